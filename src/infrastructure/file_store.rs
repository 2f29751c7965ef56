//! 文件存储：JSON 集合，按 (用户, 文件夹) 归属，名称区分大小写

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{File, ListOptions, sort_records};
use crate::domain::repositories::FileRepository;
use crate::infrastructure::records::{StoredFile, acquire, load_collection, save_collection};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// JSON 文件存储
pub struct JsonFileRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<StoredFile>> {
        load_collection(&self.path)
    }

    fn save(&self, files: &[StoredFile]) -> Result<()> {
        save_collection(&self.path, files)
    }
}

impl FileRepository for JsonFileRepository {
    fn create_file(&self, file: File) -> Result<()> {
        let _guard = acquire(&self.lock, &self.path)?;
        let mut files = self.load()?;

        if files
            .iter()
            .any(|f| f.matches(&file.username, &file.folder_name, &file.name))
        {
            return Err(DomainError::FileExists(file.name));
        }

        files.push(StoredFile::from(&file));
        self.save(&files)
    }

    fn delete_file(&self, username: &str, folder_name: &str, file_name: &str) -> Result<()> {
        let _guard = acquire(&self.lock, &self.path)?;
        let mut files = self.load()?;

        let index = files
            .iter()
            .position(|f| f.matches(username, folder_name, file_name))
            .ok_or_else(|| DomainError::FileNotFound(file_name.to_string()))?;
        files.remove(index);

        self.save(&files)
    }

    fn list_files(
        &self,
        username: &str,
        folder_name: &str,
        options: ListOptions,
    ) -> Result<Vec<File>> {
        let _guard = acquire(&self.lock, &self.path)?;
        let files = self.load()?;

        let mut result: Vec<File> = files
            .iter()
            .filter(|f| f.in_folder(username, folder_name))
            .filter_map(|stored| {
                let model = stored.to_model();
                if model.is_none() {
                    log::warn!(
                        "skipping file '{}': unparseable createdAt '{}'",
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

    fn remove_folder(&self, username: &str, folder_name: &str) -> Result<usize> {
        let _guard = acquire(&self.lock, &self.path)?;
        let mut files = self.load()?;

        let before = files.len();
        files.retain(|f| !f.in_folder(username, folder_name));
        let removed = before - files.len();

        if removed > 0 {
            self.save(&files)?;
        }
        Ok(removed)
    }

    fn move_folder(&self, username: &str, from: &str, to: &str) -> Result<usize> {
        let _guard = acquire(&self.lock, &self.path)?;
        let mut files = self.load()?;

        let mut moved = 0;
        for file in files.iter_mut().filter(|f| f.in_folder(username, from)) {
            file.folder_name = to.to_string();
            moved += 1;
        }

        if moved > 0 {
            self.save(&files)?;
        }
        Ok(moved)
    }
}
