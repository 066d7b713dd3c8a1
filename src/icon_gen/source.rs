//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将流水线各阶段的产物显式建模：
//! - `SourceImage` 表示解码后的原图（可能带 alpha）
//! - `FlattenedImage` 表示合成到白底后的 RGB 图
//! - `WrittenIcon` / `GenerationReport` 表示已落盘的结果

use std::path::PathBuf;

use image::{DynamicImage, GenericImageView, RgbImage};

use super::IconSpec;

/// 解码阶段输出。
pub struct SourceImage {
    pub(crate) image: DynamicImage,
    pub(crate) had_alpha: bool,
}

impl SourceImage {
    pub fn new(image: DynamicImage) -> Self {
        let had_alpha = image.color().has_alpha();
        Self { image, had_alpha }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn had_alpha(&self) -> bool {
        self.had_alpha
    }
}

/// 不含 alpha 的 RGB 图，尺寸与原图一致。
#[derive(Debug, Clone)]
pub struct FlattenedImage(pub(crate) RgbImage);

impl FlattenedImage {
    pub fn as_rgb(&self) -> &RgbImage {
        &self.0
    }

    pub fn into_rgb(self) -> RgbImage {
        self.0
    }
}

/// 单个已写入磁盘的图标。
#[derive(Debug, Clone)]
pub struct WrittenIcon {
    pub spec: IconSpec,
    pub path: PathBuf,
    pub bytes_written: usize,
}

/// 一次生成的汇总结果。
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub source_width: u32,
    pub source_height: u32,
    pub had_alpha: bool,
    pub icons: Vec<WrittenIcon>,
}

impl GenerationReport {
    pub fn count(&self) -> usize {
        self.icons.len()
    }
}
