//! 测试用的存储替身

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{File, ListOptions, User};
use crate::domain::repositories::{FileRepository, UserRepository};

fn broken() -> DomainError {
    DomainError::Io("disk unavailable".to_string())
}

/// 所有操作都返回 IO 错误的用户存储
pub struct FailingUsers;

impl UserRepository for FailingUsers {
    fn register(&self, _user: &User) -> Result<()> {
        Err(broken())
    }

    fn find(&self, _username: &str) -> Result<Option<User>> {
        Err(broken())
    }
}

/// 固定回答是否存在的用户存储；存在时原样返回查询的用户名
pub struct KnownUsers(pub bool);

impl UserRepository for KnownUsers {
    fn register(&self, _user: &User) -> Result<()> {
        Ok(())
    }

    fn find(&self, username: &str) -> Result<Option<User>> {
        Ok(self.0.then(|| User::new(username)))
    }
}

/// 所有操作都返回 IO 错误的文件存储
pub struct FailingFiles;

impl FileRepository for FailingFiles {
    fn create_file(&self, _file: File) -> Result<()> {
        Err(broken())
    }

    fn delete_file(&self, _username: &str, _folder_name: &str, _file_name: &str) -> Result<()> {
        Err(broken())
    }

    fn list_files(&self, _username: &str, _folder_name: &str, _options: ListOptions) -> Result<Vec<File>> {
        Err(broken())
    }

    fn remove_folder(&self, _username: &str, _folder_name: &str) -> Result<usize> {
        Err(broken())
    }

    fn move_folder(&self, _username: &str, _from: &str, _to: &str) -> Result<usize> {
        Err(broken())
    }
}
