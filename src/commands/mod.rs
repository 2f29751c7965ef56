//! 命令处理器
//!
//! 每组命令一个模块，实现 CommandHandler trait

use crate::domain::error::Result;

pub mod file;
pub mod folder;
pub mod shell;
pub mod table;
pub mod user;

/// 命令上下文
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandContext {
    pub verbose: bool,
}

/// 命令处理器 trait
pub trait CommandHandler {
    /// 执行命令
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
