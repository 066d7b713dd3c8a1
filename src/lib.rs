//! # App 图标修复工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   env_logger 初始化 · 默认配置 · 退出码映射       │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<RunOutcome, AppError>
//! ┌───────┴──────────────────────────────────────────────────┐
//! │  app ──────── 输入预检 + 控制台输出                        │
//! │  error ────── AppError (统一错误类型)                      │
//! │  icon_gen ─── 解码 · 白底合成 · Lanczos 缩放 · PNG 落盘    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，入口层返回类型 |
//! | [`app`] | 一次运行的外部可见行为（预检、逐行输出） |
//! | [`icon_gen`] | 从 logo 生成 19 个不含 alpha 的 iOS AppIcon PNG |

pub mod app;
pub mod error;
pub mod icon_gen;
