//! # 控制台入口
//!
//! 默认从当前目录下的 `config.txt` 读取两行装配配置：
//! 第一行为数据提供者标识符，第二行为业务服务标识符。
//! 计算结果或错误消息写入标准输出，日志写入标准错误。

use anyhow::Context;
use clap::{Parser, Subcommand};
use infrastructure_composition::{
    init_logging, parse_log_level, report, run_setter, run_static, LoggingConfig, RunStatus,
    Runner,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "presentation")]
#[command(about = "配置驱动的组件装配示例")]
struct Args {
    /// 配置文件路径，`.toml` 按 TOML 解析，其余按两行文本解析
    #[arg(short, long, default_value = "config.txt")]
    config: PathBuf,

    /// 日志级别
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// 使用 JSON 格式输出日志
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    mode: Option<Mode>,
}

/// 装配方式
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Mode {
    /// 按配置文件中的标识符动态装配（默认）
    Run,
    /// 通过构造函数手工装配
    Static,
    /// 通过设值方式手工装配
    Setter,
    /// 列出已注册的组件
    Components {
        /// 以 JSON 格式输出
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    match execute(&args) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            println!("错误 [BootstrapError]: {:#}", e);
            ExitCode::from(RunStatus::Failure.code())
        }
    }
}

fn execute(args: &Args) -> anyhow::Result<RunStatus> {
    let logging = LoggingConfig::quiet()
        .with_level(parse_log_level(&args.log_level))
        .with_json(args.json_logs);
    init_logging(&logging).context("初始化日志失败")?;
    debug!("命令行参数: {:?}", args);

    let mut stdout = std::io::stdout().lock();
    let mode = args.mode.clone().unwrap_or(Mode::Run);

    let status = match mode {
        Mode::Static => run_static(&mut stdout),
        Mode::Setter => run_setter(&mut stdout),
        Mode::Run => match Runner::with_defaults() {
            Ok(runner) => {
                let provider = config_impl::provider_for_path(&args.config);
                runner.run(provider.as_ref(), &mut stdout)
            }
            Err(e) => report(Err(e), &mut stdout),
        },
        Mode::Components { json } => match Runner::with_defaults() {
            Ok(runner) => runner.list_components(&mut stdout, json),
            Err(e) => report(Err(e), &mut stdout),
        },
    };

    Ok(status)
}
