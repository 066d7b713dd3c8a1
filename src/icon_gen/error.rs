//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配（例如决定退出码）。

use std::path::PathBuf;

/// 图标生成统一错误类型。
///
/// 该类型会在入口层被上转为 `AppError`。
#[derive(Debug, thiserror::Error)]
pub enum IconGenError {
    #[error("输入文件不存在：{}", .0.display())]
    InputMissing(PathBuf),

    #[error("解码错误：{0}")]
    DecodeFailed(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("缩放错误：{0}")]
    ResizeFailed(String),

    #[error("编码错误：{0}")]
    EncodeFailed(String),

    #[error("写入失败：{} ({reason})", .path.display())]
    WriteFailed { path: PathBuf, reason: String },
}

impl IconGenError {
    pub(crate) fn write_failed(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::WriteFailed {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

