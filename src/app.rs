//! 运行入口模块
//!
//! # 设计思路
//!
//! 负责一次完整运行的外部可见行为：输入存在性预检、调用生成器、逐行输出结果。
//! 输入缺失属于“可预期结果”而非错误，通过 `RunOutcome::InputMissing` 返回，
//! 由 `main` 以成功状态退出。
//!
//! # 实现思路
//!
//! - 控制台输出写入泛型 `Write`，测试可捕获到内存缓冲。
//! - 进度回调内无法使用 `?`，首个输出错误先暂存，生成结束后再上抛。

use std::io::Write;
use std::path::PathBuf;

use crate::error::AppError;
use crate::icon_gen::{GenerationReport, IconGenConfig, IconGenerator};

/// 一次运行的结果。
#[derive(Debug)]
pub enum RunOutcome {
    /// 全部图标已生成。
    Generated(GenerationReport),
    /// 输入文件不存在，未创建任何目录或文件。
    InputMissing(PathBuf),
}

/// 使用标准输出运行。
pub fn run(config: &IconGenConfig) -> Result<RunOutcome, AppError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run_with_output(config, &mut handle)
}

/// 运行并把控制台信息写入 `out`。
pub fn run_with_output<W: Write>(
    config: &IconGenConfig,
    out: &mut W,
) -> Result<RunOutcome, AppError> {
    config.validate().map_err(AppError::Config)?;

    if !config.input_path.exists() {
        log::warn!("源图片不存在，跳过生成：{}", config.input_path.display());
        writeln!(out, "❌ Logo not found at {}", config.input_path.display())?;
        return Ok(RunOutcome::InputMissing(config.input_path.clone()));
    }

    let generator = IconGenerator::new(config);
    let mut console_error: Option<std::io::Error> = None;

    let report = generator.generate_with_progress(&config.input_path, &config.output_dir, |icon| {
        if console_error.is_some() {
            return;
        }
        if let Err(err) = writeln!(
            out,
            "Created {} ({}x{})",
            icon.spec.filename, icon.spec.width, icon.spec.height
        ) {
            console_error = Some(err);
        }
    })?;

    if let Some(err) = console_error {
        return Err(err.into());
    }

    writeln!(out, "✅ App icons created successfully!")?;
    writeln!(out, "✅ All icons are now RGB (no alpha channel)")?;

    Ok(RunOutcome::Generated(report))
}
