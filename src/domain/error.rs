//! 领域层错误类型

use miette::Diagnostic;
use std::error::Error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 领域层错误类型
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("The name: {0} contains invalid chars. Only alphabets and numbers are allowed.")]
    #[diagnostic(code(vfs::invalid_name), help("名称只能包含字母和数字，且不能为空"))]
    InvalidName(String),

    #[error("The name: {0} is too long. The maximum length is 30 characters.")]
    #[diagnostic(code(vfs::name_too_long))]
    NameTooLong(String),

    #[error("The user: {0} already exists.")]
    #[diagnostic(code(vfs::user_exists))]
    UserExists(String),

    #[error("The user: {0} doesn't exist.")]
    #[diagnostic(code(vfs::user_not_found), help("先使用 'register <username>' 注册用户"))]
    UserNotFound(String),

    #[error("The folder: {0} already exists.")]
    #[diagnostic(code(vfs::folder_exists), help("文件夹名称比较不区分大小写"))]
    FolderExists(String),

    #[error("The folder: {0} doesn't exist.")]
    #[diagnostic(code(vfs::folder_not_found), help("使用 'list-folders <username>' 查看所有文件夹"))]
    FolderNotFound(String),

    #[error("The file: {0} already exists.")]
    #[diagnostic(code(vfs::file_exists))]
    FileExists(String),

    #[error("The file: {0} doesn't exist.")]
    #[diagnostic(code(vfs::file_not_found), help("文件名比较区分大小写"))]
    FileNotFound(String),

    #[error("no folders found for user {0}")]
    #[diagnostic(code(vfs::no_folders))]
    NoFoldersFound(String),

    #[error("IO 错误: {0}")]
    #[diagnostic(code(vfs::io))]
    Io(String),

    #[error("序列化错误: {0}")]
    #[diagnostic(code(vfs::serialization), help("存储文件可能已损坏"))]
    Serialization(String),

    #[error("存储错误: {0}")]
    #[diagnostic(code(vfs::storage))]
    Storage(String),

    #[error("配置错误: {0}")]
    #[diagnostic(code(vfs::config))]
    Config(String),

    #[error("无效参数: {0}")]
    #[diagnostic(code(vfs::invalid_argument), help("输入 'help' 查看可用命令"))]
    InvalidArgument(String),
}

impl DomainError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 错误码 + 提示 + 错误链
    /// verbose = false: 单行错误信息
    pub fn report(&self, verbose: bool) {
        eprintln!("Error: {}", self);

        if verbose {
            if let Some(code) = self.code() {
                eprintln!("  ├─ code: {}", code);
            }
            if let Some(help) = self.help() {
                eprintln!("  └─ help: {}", help);
            }
            let mut current = self.source();
            while let Some(next) = current {
                eprintln!("     └─ {}", next);
                current = next.source();
            }
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::Config(err.to_string())
    }
}
