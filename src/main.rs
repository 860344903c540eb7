//! # 剪贴板文本转换工具 — 命令行入口
//!
//! 本文件仅负责参数解析、日志初始化与输入输出。
//! 转换逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cool_paster::actions::Action;
use cool_paster::clipboard::{self, SystemClipboard};
use cool_paster::error::AppError;
use cool_paster::literal::LiteralType;
use cool_paster::settings::Settings;

#[derive(Parser)]
#[command(name = "cool-paster")]
#[command(version, about = "剪贴板文本转换：JSON 美化、C# 字符串字面量转义/反转义", long_about = None)]
#[command(after_help = "EXAMPLES:
    cool-paster escape -c                  转义剪贴板文本并写回
    cool-paster unescape-trim -i body.txt  反转义文件内容并去掉两端引号
    echo '{\"a\":1}' | cool-paster prettify  美化标准输入中的 JSON")]
struct Cli {
    /// 动作：prettify / escape / unescape / escape-quotes / unescape-trim
    #[arg(value_name = "ACTION")]
    action: Option<String>,

    /// 字面量类型：regular / verbatim / interpolated / interpolated-verbatim
    #[arg(short, long, value_name = "TYPE")]
    literal: Option<String>,

    /// 从文件读取文本（默认读取标准输入）
    #[arg(short, long, value_name = "FILE", conflicts_with = "clipboard")]
    input: Option<PathBuf>,

    /// 从系统剪贴板读取文本，并把结果写回
    #[arg(short, long)]
    clipboard: bool,

    /// 配合 --clipboard：不写回剪贴板
    #[arg(long)]
    no_write_back: bool,

    /// 设置文件路径
    #[arg(long, value_name = "FILE", env = "COOL_PASTER_CONFIG")]
    config: Option<PathBuf>,

    /// 列出所有动作
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("执行失败: {e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if cli.list {
        for action in Action::ALL {
            println!("{action}");
        }
        return Ok(());
    }

    let base = match &cli.config {
        Some(path) => Settings::load_from_path(path),
        None => Settings::default(),
    };
    let action = cli.action.as_deref().map(str::parse::<Action>).transpose()?;
    let literal = cli.literal.as_deref().map(str::parse::<LiteralType>).transpose()?;
    let write_back = cli.no_write_back.then_some(false);
    let settings = base.with_overrides(action, literal, write_back);
    log::debug!("生效设置: {:?}", settings);

    let result = if cli.clipboard {
        let mut system = SystemClipboard::new()?;
        clipboard::paste_transformed(&mut system, settings.action, settings.literal, settings.write_back)?
    } else {
        let text = match &cli.input {
            Some(path) => fs::read_to_string(path)?,
            None => io::read_to_string(io::stdin())?,
        };
        settings.action.apply(&text, settings.literal)
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(result.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
