//! 文件夹存储：JSON 集合，整体读取、修改、整体重写
//!
//! 每个公开操作在整个 读取 → 修改 → 写回 过程中持有同一把锁，
//! 并发创建不会互相覆盖。

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{Folder, ListOptions, sort_records};
use crate::domain::repositories::FolderRepository;
use crate::infrastructure::records::{StoredFolder, acquire, load_collection, save_collection};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// JSON 文件夹存储
pub struct JsonFolderRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFolderRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<StoredFolder>> {
        load_collection(&self.path)
    }

    fn save(&self, folders: &[StoredFolder]) -> Result<()> {
        save_collection(&self.path, folders)
    }
}

impl FolderRepository for JsonFolderRepository {
    fn find(&self, username: &str, folder_name: &str) -> Result<Option<Folder>> {
        let _guard = acquire(&self.lock, &self.path)?;
        let folders = self.load()?;

        Ok(folders
            .iter()
            .find(|f| f.matches(username, folder_name))
            .map(StoredFolder::to_model_lossy))
    }

    fn create_folder(&self, folder: Folder) -> Result<()> {
        let _guard = acquire(&self.lock, &self.path)?;
        let mut folders = self.load()?;

        if folders.iter().any(|f| f.matches(&folder.username, &folder.name)) {
            return Err(DomainError::FolderExists(folder.name));
        }

        folders.push(StoredFolder::from(&folder));
        self.save(&folders)
    }

    fn delete_folder(&self, username: &str, folder_name: &str) -> Result<Folder> {
        let _guard = acquire(&self.lock, &self.path)?;
        let mut folders = self.load()?;

        // 只删除第一条匹配记录
        let index = folders
            .iter()
            .position(|f| f.matches(username, folder_name))
            .ok_or_else(|| DomainError::FolderNotFound(folder_name.to_string()))?;
        let removed = folders.remove(index);

        self.save(&folders)?;
        Ok(removed.to_model_lossy())
    }

    fn rename_folder(&self, username: &str, folder_name: &str, new_name: &str) -> Result<String> {
        let _guard = acquire(&self.lock, &self.path)?;
        let mut folders = self.load()?;

        let index = folders
            .iter()
            .position(|f| f.matches(username, folder_name))
            .ok_or_else(|| DomainError::FolderNotFound(folder_name.to_string()))?;

        // 在整个集合中检查新名称冲突，包括仅大小写不同的自身名称
        if folders.iter().any(|f| f.matches(username, new_name)) {
            return Err(DomainError::FolderExists(new_name.to_string()));
        }

        let previous = std::mem::replace(&mut folders[index].name, new_name.to_string());
        self.save(&folders)?;
        Ok(previous)
    }

    fn list_folders(&self, username: &str, options: ListOptions) -> Result<Vec<Folder>> {
        let _guard = acquire(&self.lock, &self.path)?;
        let folders = self.load()?;

        let owned: Vec<&StoredFolder> = folders.iter().filter(|f| f.username == username).collect();
        if owned.is_empty() {
            return Err(DomainError::NoFoldersFound(username.to_string()));
        }

        let mut result: Vec<Folder> = owned
            .into_iter()
            .filter_map(|stored| {
                let model = stored.to_model();
                if model.is_none() {
                    log::warn!(
                        "skipping folder '{}': unparseable createdAt '{}'",
                        stored.name,
                        stored.created_at
                    );
                }
                model
            })
            .collect();

        sort_records(&mut result, options);
        Ok(result)
    }
}
