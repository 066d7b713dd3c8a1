//! # 透明度合成模块
//!
//! ## 设计思路
//!
//! App Store 拒绝带 alpha 通道的图标，因此在缩放前先把原图合成到纯白画布上。
//! 合成在原始分辨率上只做一次，19 个尺寸共享同一份结果。
//!
//! ## 实现思路
//!
//! 标准 "over" 合成：`out = c * a + 255 * (1 - a)`，用整数并四舍五入：
//! `(c * a + 255 * (255 - a) + 127) / 255`。
//! 这样 `a = 0` 精确得到 255，`a = 255` 精确保留原色。

use image::{Rgb, RgbImage, Rgba};

use super::source::{FlattenedImage, SourceImage};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// 将原图合成到白底，输出不含 alpha 的 RGB 图。
///
/// 没有 alpha 通道的输入（RGB / 灰度 / 无透明调色板）只做 8 位 RGB 归一化。
pub fn flatten_onto_white(source: &SourceImage) -> FlattenedImage {
    if !source.had_alpha {
        return FlattenedImage(source.image.to_rgb8());
    }

    let rgba = source.image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut canvas = RgbImage::from_pixel(width, height, WHITE);

    for (dst, src) in canvas.pixels_mut().zip(rgba.pixels()) {
        *dst = composite_over_white(*src);
    }

    FlattenedImage(canvas)
}

/// 单像素合成。
pub fn composite_over_white(pixel: Rgba<u8>) -> Rgb<u8> {
    let [r, g, b, a] = pixel.0;
    let alpha = a as u32;
    let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha) + 127) / 255) as u8;

    Rgb([blend(r), blend(g), blend(b)])
}
