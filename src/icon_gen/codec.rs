//! # 编解码能力模块
//!
//! ## 设计思路
//!
//! 解码、缩放、PNG 编码都依赖外部图像库，这里抽象为 `ImageCodec` trait，
//! 由 `IconGenerator` 以泛型注入。编排逻辑因此可以用桩实现单独测试。
//!
//! ## 实现思路
//!
//! `FastImageCodec` 为默认实现：
//! 1. 先读取 header 尺寸并按像素上限快速拒绝，再带 `image::Limits` 完整解码
//! 2. 使用 `fast_image_resize` 的 Lanczos3 卷积缩放，失败时回退 `image::imageops::resize`
//! 3. 以最高压缩 + 自适应行过滤编码为 8 位 RGB PNG

use std::io::Cursor;

use fast_image_resize as fr;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, RgbImage};

use super::{IconGenConfig, IconGenError};

/// 图像编解码能力。
pub trait ImageCodec {
    /// 将文件字节解码为内存图像。
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, IconGenError>;

    /// 将 RGB 图缩放到精确的目标尺寸（允许非等比）。
    fn resize(&self, image: &RgbImage, width: u32, height: u32) -> Result<RgbImage, IconGenError>;

    /// 编码为不含 alpha 的 PNG 字节。
    fn encode_png(&self, image: &RgbImage) -> Result<Vec<u8>, IconGenError>;
}

/// 基于 `image` + `fast_image_resize` 的默认实现。
#[derive(Debug, Clone)]
pub struct FastImageCodec {
    limits: image::Limits,
    max_decoded_pixels: u64,
}

impl FastImageCodec {
    pub fn new(config: &IconGenConfig) -> Self {
        Self {
            limits: config.decode_limits(),
            max_decoded_pixels: config.max_decoded_pixels,
        }
    }

    /// 仅通过图片头信息读取宽高，用于完整解码前的像素检查。
    fn inspect_dimensions(bytes: &[u8]) -> Result<(u32, u32), IconGenError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconGenError::DecodeFailed(format!("无法识别图片格式：{}", e)))?;

        if reader.format().is_none() {
            return Err(IconGenError::DecodeFailed("不支持的图片格式".to_string()));
        }

        reader
            .into_dimensions()
            .map_err(|e| IconGenError::DecodeFailed(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(&self, width: u32, height: u32) -> Result<(), IconGenError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| IconGenError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > self.max_decoded_pixels {
            return Err(IconGenError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, self.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn resize_with_fast_image_resize(
        image: &RgbImage,
        target_width: u32,
        target_height: u32,
    ) -> Result<RgbImage, IconGenError> {
        let (src_width, src_height) = image.dimensions();

        let src_image = fr::images::ImageRef::new(
            src_width,
            src_height,
            image.as_raw(),
            fr::PixelType::U8x3,
        )
        .map_err(|e| IconGenError::ResizeFailed(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x3);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconGenError::ResizeFailed(format!("fast_image_resize 执行失败：{}", e)))?;

        RgbImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
            IconGenError::ResizeFailed("fast_image_resize 输出缓冲长度异常".to_string())
        })
    }
}

impl Default for FastImageCodec {
    fn default() -> Self {
        Self::new(&IconGenConfig::default())
    }
}

impl ImageCodec for FastImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, IconGenError> {
        let (width, height) = Self::inspect_dimensions(bytes)?;
        self.validate_pixel_limits(width, height)?;

        let mut reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconGenError::DecodeFailed(format!("无法识别图片格式：{}", e)))?;
        reader.limits(self.limits.clone());

        reader.decode().map_err(|e| match e {
            image::ImageError::Limits(limit) => {
                IconGenError::ResourceLimit(format!("图片解码超出内存限制：{}", limit))
            }
            other => IconGenError::DecodeFailed(format!("图片解码失败：{}", other)),
        })
    }

    fn resize(&self, image: &RgbImage, width: u32, height: u32) -> Result<RgbImage, IconGenError> {
        match Self::resize_with_fast_image_resize(image, width, height) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                    err
                );
                Ok(image::imageops::resize(image, width, height, FilterType::Lanczos3))
            }
        }
    }

    fn encode_png(&self, image: &RgbImage) -> Result<Vec<u8>, IconGenError> {
        let (width, height) = image.dimensions();
        let mut buf = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);

        encoder
            .write_image(image.as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(|e| IconGenError::EncodeFailed(format!("PNG 编码失败：{}", e)))?;

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat, Rgb, Rgba, RgbaImage};

    fn create_png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 255) as u8, (y % 255) as u8, ((x + y) % 255) as u8, 255])
        });

        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut cursor, ImageFormat::Png)
            .expect("failed to encode test image");
        cursor.into_inner()
    }

    #[test]
    fn decode_reads_png_with_alpha_channel() {
        let codec = FastImageCodec::default();

        let decoded = codec
            .decode(&create_png_bytes(33, 17))
            .expect("decode should succeed");

        assert_eq!(decoded.dimensions(), (33, 17));
        assert!(decoded.color().has_alpha());
    }

    #[test]
    fn decode_rejects_non_image_bytes() {
        let codec = FastImageCodec::default();

        let result = codec.decode(b"<html><body>not an image</body></html>");

        assert!(matches!(result, Err(IconGenError::DecodeFailed(_))));
    }

    #[test]
    fn decode_rejects_too_many_pixels() {
        let mut config = IconGenConfig::default();
        config.max_decoded_pixels = 1_000;
        let codec = FastImageCodec::new(&config);

        let result = codec.decode(&create_png_bytes(64, 64));

        assert!(matches!(result, Err(IconGenError::ResourceLimit(_))));
    }

    #[test]
    fn resize_produces_exact_non_uniform_dimensions() {
        let codec = FastImageCodec::default();
        let src = RgbImage::from_pixel(300, 100, Rgb([10, 200, 30]));

        let resized = codec.resize(&src, 57, 57).expect("resize should succeed");

        assert_eq!(resized.dimensions(), (57, 57));
        let Rgb([r, g, b]) = *resized.get_pixel(28, 28);
        assert!(r.abs_diff(10) <= 2 && g.abs_diff(200) <= 2 && b.abs_diff(30) <= 2);
    }

    #[test]
    fn resize_upscales_small_source() {
        let codec = FastImageCodec::default();
        let src = RgbImage::from_pixel(16, 16, Rgb([255, 255, 255]));

        let resized = codec.resize(&src, 180, 180).expect("resize should succeed");

        assert_eq!(resized.dimensions(), (180, 180));
    }

    #[test]
    fn resize_handles_single_pixel_and_single_column_sources() {
        let codec = FastImageCodec::default();
        let pixel = RgbImage::from_pixel(1, 1, Rgb([10, 20, 30]));
        let column = RgbImage::from_pixel(1, 37, Rgb([200, 100, 50]));

        let from_pixel = codec.resize(&pixel, 1024, 1024).expect("resize should succeed");
        let from_column = codec.resize(&column, 87, 87).expect("resize should succeed");

        assert_eq!(from_pixel.dimensions(), (1024, 1024));
        assert_eq!(*from_pixel.get_pixel(512, 512), Rgb([10, 20, 30]));
        assert_eq!(from_column.dimensions(), (87, 87));
        let Rgb([r, g, b]) = *from_column.get_pixel(43, 43);
        assert!(r.abs_diff(200) <= 2 && g.abs_diff(100) <= 2 && b.abs_diff(50) <= 2);
    }

    #[test]
    fn encode_png_writes_rgb8_without_alpha() {
        let codec = FastImageCodec::default();
        let src = RgbImage::from_pixel(20, 20, Rgb([1, 2, 3]));

        let bytes = codec.encode_png(&src).expect("encode should succeed");
        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .expect("output should be a valid png");

        assert_eq!(decoded.color(), image::ColorType::Rgb8);
        assert_eq!(decoded.dimensions(), (20, 20));
    }

    #[test]
    fn encode_png_is_deterministic() {
        let codec = FastImageCodec::default();
        let src = RgbImage::from_fn(40, 40, |x, y| Rgb([x as u8, y as u8, (x * y) as u8]));

        let first = codec.encode_png(&src).expect("encode should succeed");
        let second = codec.encode_png(&src).expect("encode should succeed");

        assert_eq!(first, second);
    }
}
