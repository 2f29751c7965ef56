//! 用户应用服务

use crate::domain::error::{DomainError, Result};
use crate::domain::models::User;
use crate::domain::repositories::UserRepository;
use std::sync::Arc;

/// 用户服务
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// 注册用户：校验 → 查重 → 追加
    ///
    /// 查重与追加之间没有跨调用的锁，并发注册同名用户可能都成功。
    pub fn register(&self, username: &str) -> Result<User> {
        self.repository.validate_username(username)?;

        if self.repository.exists(username)? {
            return Err(DomainError::UserExists(username.to_string()));
        }

        let user = User::new(username);
        self.repository.register(&user)?;
        log::info!("registered user {}", username);
        Ok(user)
    }
}
