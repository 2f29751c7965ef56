//! 文件应用服务

use super::resolve_user;
use crate::domain::error::{DomainError, Result};
use crate::domain::models::{File, Folder, ListOptions};
use crate::domain::repositories::{FileRepository, FolderRepository, UserRepository};
use std::sync::Arc;

/// 文件服务
pub struct FileService {
    files: Arc<dyn FileRepository>,
    folders: Arc<dyn FolderRepository>,
    users: Arc<dyn UserRepository>,
}

impl FileService {
    pub fn new(
        files: Arc<dyn FileRepository>,
        folders: Arc<dyn FolderRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            files,
            folders,
            users,
        }
    }

    // 文件记录使用用户与文件夹在存储中的原始拼写
    fn resolve_folder(&self, username: &str, folder_name: &str) -> Result<Folder> {
        let user = resolve_user(self.users.as_ref(), username)?;
        self.folders
            .find(&user.username, folder_name)?
            .ok_or_else(|| DomainError::FolderNotFound(folder_name.to_string()))
    }

    /// 创建文件
    pub fn create_file(
        &self,
        username: &str,
        folder_name: &str,
        file_name: &str,
        description: &str,
    ) -> Result<File> {
        let folder = self.resolve_folder(username, folder_name)?;
        self.files.validate_file_name(file_name)?;

        let file = File::new(folder.username, folder.name, file_name, description);
        self.files.create_file(file.clone())?;
        Ok(file)
    }

    /// 删除文件
    pub fn delete_file(&self, username: &str, folder_name: &str, file_name: &str) -> Result<()> {
        let folder = self.resolve_folder(username, folder_name)?;
        self.files
            .delete_file(&folder.username, &folder.name, file_name)
    }

    /// 列出文件夹内的文件
    pub fn list_files(
        &self,
        username: &str,
        folder_name: &str,
        options: ListOptions,
    ) -> Result<Vec<File>> {
        let folder = self.resolve_folder(username, folder_name)?;
        self.files
            .list_files(&folder.username, &folder.name, options)
    }
}
