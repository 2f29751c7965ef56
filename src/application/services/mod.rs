//! 应用服务

pub mod file_service;
pub mod folder_service;
pub mod user_service;

#[cfg(test)]
pub(crate) mod mocks;

pub use file_service::FileService;
pub use folder_service::FolderService;
pub use user_service::UserService;

use crate::domain::error::{DomainError, Result};
use crate::domain::models::User;
use crate::domain::repositories::UserRepository;

/// 按注册时的拼写解析用户；不存在时返回 `UserNotFound`
///
/// 文件夹与文件记录一律保存解析后的用户名，同一用户只有一个命名空间。
fn resolve_user(users: &dyn UserRepository, username: &str) -> Result<User> {
    users
        .find(username)?
        .ok_or_else(|| DomainError::UserNotFound(username.to_string()))
}
