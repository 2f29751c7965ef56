//! 交互模式
//!
//! 逐行读取标准输入，按空白切分后复用子命令的 clap 语法解析。
//! 单行命令失败只打印错误，不会中断会话。

use super::{CommandContext, CommandHandler};
use crate::app::Application;
use crate::cli::{Commands, ShellLine};
use crate::domain::error::{DomainError, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "# ";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// shell 命令
pub struct ShellCommand<'a> {
    app: &'a Application,
}

impl<'a> ShellCommand<'a> {
    pub fn new(app: &'a Application) -> Self {
        Self { app }
    }

    /// 运行会话直到 `exit` 或输入结束
    pub fn run<R: BufRead>(&self, input: R, ctx: &CommandContext) -> Result<()> {
        let mut lines = input.lines();
        loop {
            print!("{}", PROMPT);
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                println!();
                break;
            };
            if self.handle_line(&line?, ctx) == Flow::Exit {
                break;
            }
        }

        if self.app.config().ephemeral {
            self.app.cleanup()?;
            println!("Removed all temp files.");
        }
        Ok(())
    }

    fn handle_line(&self, line: &str, ctx: &CommandContext) -> Flow {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => return Flow::Continue,
            ["exit"] | ["quit"] => return Flow::Exit,
            _ => {}
        }

        let command = match ShellLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // help 也经由这里输出
                let _ = e.print();
                return Flow::Continue;
            }
        };

        if command == Commands::Shell {
            DomainError::InvalidArgument("已处于交互模式".to_string())
                .report(ctx.verbose);
            return Flow::Continue;
        }

        if let Err(e) = self.app.execute(command) {
            e.report(ctx.verbose);
        }
        Flow::Continue
    }
}

impl CommandHandler for ShellCommand<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let stdin = io::stdin();
        self.run(stdin.lock(), ctx)
    }
}
