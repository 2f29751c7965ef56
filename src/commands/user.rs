//! register 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::services::UserService;
use crate::domain::error::Result;
use std::sync::Arc;

/// register 命令
pub struct RegisterCommand {
    user_service: Arc<UserService>,
    username: String,
}

impl RegisterCommand {
    pub fn new(user_service: Arc<UserService>, username: String) -> Self {
        Self {
            user_service,
            username,
        }
    }
}

impl CommandHandler for RegisterCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        self.user_service.register(&self.username)?;
        println!("Add '{}' successfully.", self.username);
        Ok(())
    }
}
