//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - user_store / folder_store / file_store: 文件系统存储实现
//! - records: 持久化记录格式
//! - config: 配置文件与环境变量
//! - paths: 路径工具

pub mod config;
pub mod file_store;
pub mod folder_store;
pub mod paths;
pub mod records;
pub mod user_store;

pub use file_store::JsonFileRepository;
pub use folder_store::JsonFolderRepository;
pub use user_store::TextUserRepository;
