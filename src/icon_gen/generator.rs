//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，不关心具体编解码实现。
//! 处理链路固定为：
//! 1. 读取输入字节并解码
//! 2. 合成到白底（去除 alpha）
//! 3. 创建输出目录
//! 4. 按尺寸表逐个缩放、编码、写入
//!
//! ## 实现思路
//!
//! - 编解码通过 `ImageCodec` 泛型注入，默认 `FastImageCodec`。
//! - 输入读取在目录创建之前完成，输入缺失或损坏时不会留下空目录。
//! - 任一写入失败立即返回，已写入的文件保留在磁盘上（不做回滚）。
//! - 记录 `load/flatten/icons/total` 阶段耗时，便于性能诊断。

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use super::codec::{FastImageCodec, ImageCodec};
use super::flatten::flatten_onto_white;
use super::source::{FlattenedImage, GenerationReport, SourceImage, WrittenIcon};
use super::{APP_ICON_SPECS, IconGenConfig, IconGenError, IconSpec};

/// 图标生成器。
pub struct IconGenerator<C: ImageCodec = FastImageCodec> {
    codec: C,
}

impl IconGenerator<FastImageCodec> {
    /// 使用默认编解码器创建生成器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use app_icon_fix::icon_gen::{IconGenConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(&IconGenConfig::default());
    /// let count = generator.generate("assets/images/logo.png", "out")?;
    /// assert_eq!(count, 19);
    /// # Ok::<(), app_icon_fix::icon_gen::IconGenError>(())
    /// ```
    pub fn new(config: &IconGenConfig) -> Self {
        Self::with_codec(FastImageCodec::new(config))
    }
}

impl<C: ImageCodec> IconGenerator<C> {
    /// 注入自定义编解码器。
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    /// 生成全部图标，返回写入数量（成功时恒为 19）。
    pub fn generate(
        &self,
        input_path: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
    ) -> Result<usize, IconGenError> {
        self.generate_with_progress(input_path, output_dir, |_| {})
            .map(|report| report.count())
    }

    /// 生成全部图标，每写入一个文件回调一次 `on_icon`。
    pub fn generate_with_progress<P>(
        &self,
        input_path: impl AsRef<Path>,
        output_dir: impl AsRef<Path>,
        mut on_icon: P,
    ) -> Result<GenerationReport, IconGenError>
    where
        P: FnMut(&WrittenIcon),
    {
        let input_path = input_path.as_ref();
        let output_dir = output_dir.as_ref();
        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = self.load_source(input_path)?;
        let (source_width, source_height) = source.dimensions();
        let load_elapsed = load_start.elapsed();

        let flatten_start = Instant::now();
        let flattened = flatten_onto_white(&source);
        let had_alpha = source.had_alpha();
        drop(source);
        let flatten_elapsed = flatten_start.elapsed();

        fs::create_dir_all(output_dir)
            .map_err(|e| IconGenError::write_failed(output_dir, e))?;

        let icons_start = Instant::now();
        let mut icons = Vec::with_capacity(APP_ICON_SPECS.len());
        for spec in APP_ICON_SPECS {
            let icon = self.write_icon(&flattened, spec, output_dir)?;
            on_icon(&icon);
            icons.push(icon);
        }
        let icons_elapsed = icons_start.elapsed();

        log::info!(
            "✅ 图标生成完成 - 源尺寸: {}x{} alpha: {} 数量: {} load={}ms flatten={}ms icons={}ms total={}ms",
            source_width,
            source_height,
            had_alpha,
            icons.len(),
            load_elapsed.as_millis(),
            flatten_elapsed.as_millis(),
            icons_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(GenerationReport {
            source_width,
            source_height,
            had_alpha,
            icons,
        })
    }

    fn load_source(&self, input_path: &Path) -> Result<SourceImage, IconGenError> {
        log::info!("📁 开始读取源图片 - 路径: {}", input_path.display());

        let bytes = fs::read(input_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => IconGenError::InputMissing(input_path.to_path_buf()),
            _ => IconGenError::DecodeFailed(format!("无法读取图片文件：{}", e)),
        })?;

        let image = self.codec.decode(&bytes)?;
        let source = SourceImage::new(image);
        let (width, height) = source.dimensions();
        log::debug!(
            "解码成功 - 尺寸: {}x{} 格式: {:?}",
            width,
            height,
            source.image.color()
        );

        Ok(source)
    }

    fn write_icon(
        &self,
        flattened: &FlattenedImage,
        spec: IconSpec,
        output_dir: &Path,
    ) -> Result<WrittenIcon, IconGenError> {
        let resized = self.codec.resize(flattened.as_rgb(), spec.width, spec.height)?;
        let png = self.codec.encode_png(&resized)?;
        drop(resized);

        let path = output_dir.join(spec.filename);
        fs::write(&path, &png).map_err(|e| IconGenError::write_failed(&path, e))?;
        log::debug!("🖼️ 已写入 {} ({} bytes)", path.display(), png.len());

        Ok(WrittenIcon {
            spec,
            path,
            bytes_written: png.len(),
        })
    }
}
