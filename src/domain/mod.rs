//! Domain Layer - 核心业务逻辑
//!
//! 包含：
//! - models: 领域实体与列表排序
//! - repositories: 存储接口（输出端口）
//! - validation: 名称校验
//! - error: 领域错误类型

pub mod error;
pub mod models;
pub mod repositories;
pub mod validation;

pub use error::{DomainError, Result};
pub use models::{File, Folder, ListOptions, SortField, SortOrder, User};
pub use repositories::{FileRepository, FolderRepository, StorageConfig, UserRepository};
