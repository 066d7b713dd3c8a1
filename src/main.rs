//! # App 图标修复工具 — 应用入口
//!
//! 本文件仅负责日志初始化、配置装配与退出码映射。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::process::ExitCode;

use app_icon_fix::app::{self, RunOutcome};
use app_icon_fix::icon_gen::IconGenConfig;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = IconGenConfig::from_env();

    match app::run(&config) {
        Ok(RunOutcome::Generated(report)) => {
            log::info!("共生成 {} 个图标 -> {}", report.count(), config.output_dir.display());
            ExitCode::SUCCESS
        }
        // 输入缺失只提示，不视为失败
        Ok(RunOutcome::InputMissing(_)) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("图标生成失败: {err}");
            ExitCode::FAILURE
        }
    }
}
