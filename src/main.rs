//! vfs 主程序入口
//!
//! 不带子命令时进入交互模式；单次命令失败时以状态码 1 退出

use clap::Parser;
use vfscli::cli::{Cli, Commands};
use vfscli::{AppConfig, Application};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match AppConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            e.report(cli.verbose);
            std::process::exit(1);
        }
    };

    let app = Application::new(config);
    let command = cli.command.unwrap_or(Commands::Shell);

    if let Err(e) = app.execute(command) {
        e.report(cli.verbose);
        std::process::exit(1);
    }
}

/// 初始化日志，RUST_LOG 优先
fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
