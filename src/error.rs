//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 入口层统一返回 `Result<T, AppError>`，由 `main` 决定日志与退出码映射，
//! 库内部不直接终止进程。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconGenError` 提供 `From` 转换，无需手动 map。

use crate::icon_gen::IconGenError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 配置校验失败
    #[error("配置无效: {0}")]
    Config(String),

    /// 图标生成流水线错误（解码 / 缩放 / 编码 / 写入）
    #[error("{0}")]
    Generate(#[from] IconGenError),

    /// 控制台输出失败
    #[error("控制台输出失败: {0}")]
    Io(#[from] std::io::Error),
}
