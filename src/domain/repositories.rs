//! 存储接口定义（输出端口）
//!
//! 每个实体一个存储，各自独占自己的持久化集合。
//! 父实体是否存在由调用方（应用服务）负责检查。

use crate::domain::error::Result;
use crate::domain::models::{File, Folder, ListOptions, User};
use crate::domain::validation;
use std::path::{Path, PathBuf};

/// 用户存储接口
pub trait UserRepository: Send + Sync {
    /// 追加注册用户（不检查重复）
    fn register(&self, user: &User) -> Result<()>;

    /// 按用户名查找（不区分大小写），返回注册时的拼写
    fn find(&self, username: &str) -> Result<Option<User>>;

    /// 用户是否存在（不区分大小写）
    fn exists(&self, username: &str) -> Result<bool> {
        Ok(self.find(username)?.is_some())
    }

    /// 校验用户名
    fn validate_username(&self, username: &str) -> Result<()> {
        validation::validate_name(username)
    }
}

/// 文件夹存储接口
pub trait FolderRepository: Send + Sync {
    /// 文件夹是否存在（名称不区分大小写）
    fn exists(&self, username: &str, folder_name: &str) -> Result<bool> {
        Ok(self.find(username, folder_name)?.is_some())
    }

    /// 按身份查找文件夹，返回存储中的原始记录
    fn find(&self, username: &str, folder_name: &str) -> Result<Option<Folder>>;

    /// 创建文件夹
    fn create_folder(&self, folder: Folder) -> Result<()>;

    /// 删除文件夹，返回被删除的记录
    fn delete_folder(&self, username: &str, folder_name: &str) -> Result<Folder>;

    /// 重命名文件夹，返回改名前存储中的名称
    fn rename_folder(&self, username: &str, folder_name: &str, new_name: &str) -> Result<String>;

    /// 列出用户的文件夹；没有任何文件夹时返回 `NoFoldersFound`
    fn list_folders(&self, username: &str, options: ListOptions) -> Result<Vec<Folder>>;

    /// 校验文件夹名
    fn validate_folder_name(&self, folder_name: &str) -> Result<()> {
        validation::validate_name(folder_name)
    }
}

/// 文件存储接口
pub trait FileRepository: Send + Sync {
    /// 创建文件（名称区分大小写）
    fn create_file(&self, file: File) -> Result<()>;

    /// 删除文件
    fn delete_file(&self, username: &str, folder_name: &str, file_name: &str) -> Result<()>;

    /// 列出文件夹内的文件；为空时返回空列表
    fn list_files(
        &self,
        username: &str,
        folder_name: &str,
        options: ListOptions,
    ) -> Result<Vec<File>>;

    /// 删除文件夹下的全部文件，返回删除数量
    fn remove_folder(&self, username: &str, folder_name: &str) -> Result<usize>;

    /// 将文件夹下的全部文件移到新文件夹名下，返回移动数量
    fn move_folder(&self, username: &str, from: &str, to: &str) -> Result<usize>;

    /// 校验文件名
    fn validate_file_name(&self, file_name: &str) -> Result<()> {
        validation::validate_name(file_name)
    }
}

/// 默认用户存储文件名
pub const USERS_FILE: &str = "users.txt";
/// 默认文件夹存储文件名
pub const FOLDERS_FILE: &str = "folders.json";
/// 默认文件存储文件名
pub const FILES_FILE: &str = "files.json";

/// 存储配置：三个持久化文件的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub users_path: PathBuf,
    pub folders_path: PathBuf,
    pub files_path: PathBuf,
}

impl StorageConfig {
    /// 三个文件都放在同一目录下
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            users_path: dir.join(USERS_FILE),
            folders_path: dir.join(FOLDERS_FILE),
            files_path: dir.join(FILES_FILE),
        }
    }

    /// 默认数据目录：~/.vfs（无法确定主目录时使用 ./.vfs）
    pub fn default_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".vfs"))
            .unwrap_or_else(|| PathBuf::from(".vfs"))
    }

    /// 所有存储文件路径
    pub fn paths(&self) -> [&Path; 3] {
        [&self.users_path, &self.folders_path, &self.files_path]
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::in_dir(&Self::default_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_dir_layout() {
        let config = StorageConfig::in_dir(Path::new("/data"));
        assert_eq!(config.users_path, PathBuf::from("/data/users.txt"));
        assert_eq!(config.folders_path, PathBuf::from("/data/folders.json"));
        assert_eq!(config.files_path, PathBuf::from("/data/files.json"));
    }

    #[test]
    fn test_default_lives_under_vfs_dir() {
        let config = StorageConfig::default();
        for path in config.paths() {
            assert!(path.parent().unwrap().ends_with(".vfs"));
        }
    }
}
