//! vfscli - 命令行虚拟文件系统
//!
//! 分层结构：领域层 → 应用层 → 基础设施层，命令层与 CLI 位于最外层

// 领域层
pub mod domain;

// 应用层
pub mod application;

// 基础设施层
pub mod infrastructure;

// 命令层
pub mod commands;

// CLI 定义
pub mod cli;

// 应用程序容器
pub mod app;

#[cfg(test)]
pub mod test_utils;

// 重新导出常用类型
pub use app::{AppConfig, Application};
pub use domain::{DomainError, File, Folder, ListOptions, Result, User};
