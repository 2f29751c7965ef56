//! Application Layer - 应用服务
//!
//! 包含：
//! - services: 应用服务（用例实现），负责在调用存储前检查父实体是否存在

pub mod services;

pub use services::{FileService, FolderService, UserService};
