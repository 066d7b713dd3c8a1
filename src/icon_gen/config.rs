//! # 配置模块
//!
//! ## 设计思路
//!
//! 原先散落在入口处的硬编码路径统一收敛到 `IconGenConfig`，核心逻辑只接收显式参数。
//! 默认值只在边界（`Default` / `from_env`）出现一次。
//!
//! ## 实现思路
//!
//! - `Default` 提供 Flutter 工程根目录下可直接运行的默认路径与解码上限。
//! - `from_env` 允许通过环境变量覆盖两条路径（不解析命令行参数）。
//! - `validate` 负责范围校验，失败返回可读错误字符串，由入口层包装为 `AppError::Config`。

use std::path::PathBuf;

/// 默认输入 logo 路径（相对当前工作目录）。
pub const DEFAULT_INPUT_PATH: &str = "assets/images/logo.png";
/// 默认输出目录（相对当前工作目录）。
pub const DEFAULT_OUTPUT_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

/// 覆盖输入路径的环境变量名。
pub const INPUT_PATH_ENV: &str = "APP_ICON_INPUT";
/// 覆盖输出目录的环境变量名。
pub const OUTPUT_DIR_ENV: &str = "APP_ICON_OUTPUT_DIR";

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct IconGenConfig {
    /// 源 logo 文件。
    pub input_path: PathBuf,
    /// 输出目录，不存在时自动创建（含父目录）。
    pub output_dir: PathBuf,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的内存上限（字节）。
    pub max_decoded_bytes: u64,
}

impl Default for IconGenConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_decoded_pixels: 40_000_000,
            max_decoded_bytes: 160 * 1024 * 1024,
        }
    }
}

impl IconGenConfig {
    /// 以默认值为基础，读取进程环境变量覆盖路径。
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意查找函数覆盖路径，便于测试时不触碰进程环境。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(input) = lookup(INPUT_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("⚙️ {} 覆盖输入路径：{}", INPUT_PATH_ENV, input);
            config.input_path = PathBuf::from(input);
        }
        if let Some(output) = lookup(OUTPUT_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            log::debug!("⚙️ {} 覆盖输出目录：{}", OUTPUT_DIR_ENV, output);
            config.output_dir = PathBuf::from(output);
        }

        config
    }

    /// 校验配置是否可用。
    pub fn validate(&self) -> Result<(), String> {
        if self.input_path.as_os_str().is_empty() {
            return Err("input_path 不能为空".to_string());
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err("output_dir 不能为空".to_string());
        }
        if self.max_decoded_pixels == 0 {
            return Err("max_decoded_pixels 必须大于 0".to_string());
        }
        if self.max_decoded_bytes < 1024 * 1024 {
            return Err("max_decoded_bytes 不能小于 1MB".to_string());
        }
        Ok(())
    }

    /// 转换为解码器使用的 `image::Limits`。
    pub(crate) fn decode_limits(&self) -> image::Limits {
        let mut limits = image::Limits::default();
        limits.max_alloc = Some(self.max_decoded_bytes);
        limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_flutter_ios_layout() {
        let config = IconGenConfig::default();

        assert_eq!(config.input_path, PathBuf::from("assets/images/logo.png"));
        assert_eq!(
            config.output_dir,
            PathBuf::from("ios/Runner/Assets.xcassets/AppIcon.appiconset")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn lookup_overrides_paths() {
        let config = IconGenConfig::from_lookup(|key| match key {
            INPUT_PATH_ENV => Some("brand/logo.png".to_string()),
            OUTPUT_DIR_ENV => Some("out/icons".to_string()),
            _ => None,
        });

        assert_eq!(config.input_path, PathBuf::from("brand/logo.png"));
        assert_eq!(config.output_dir, PathBuf::from("out/icons"));
    }

    #[test]
    fn blank_override_keeps_default() {
        let config = IconGenConfig::from_lookup(|_| Some("   ".to_string()));

        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn validate_rejects_zero_pixel_limit() {
        let mut config = IconGenConfig::default();
        config.max_decoded_pixels = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_output_dir() {
        let mut config = IconGenConfig::default();
        config.output_dir = PathBuf::new();

        assert!(config.validate().is_err());
    }
}
