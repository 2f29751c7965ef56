//! 文件夹应用服务

use super::resolve_user;
use crate::domain::error::Result;
use crate::domain::models::{Folder, ListOptions};
use crate::domain::repositories::{FileRepository, FolderRepository, UserRepository};
use std::sync::Arc;

/// 文件夹服务
///
/// 删除与重命名会同步处理文件夹下的文件记录。两个存储之间没有事务，
/// 文件存储失败时文件夹的修改已经落盘。
pub struct FolderService {
    folders: Arc<dyn FolderRepository>,
    files: Arc<dyn FileRepository>,
    users: Arc<dyn UserRepository>,
}

impl FolderService {
    pub fn new(
        folders: Arc<dyn FolderRepository>,
        files: Arc<dyn FileRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            folders,
            files,
            users,
        }
    }

    /// 创建文件夹
    pub fn create_folder(
        &self,
        username: &str,
        folder_name: &str,
        description: &str,
    ) -> Result<Folder> {
        let user = resolve_user(self.users.as_ref(), username)?;
        self.folders.validate_folder_name(folder_name)?;

        let folder = Folder::new(user.username, folder_name, description);
        self.folders.create_folder(folder.clone())?;
        Ok(folder)
    }

    /// 删除文件夹及其中的文件
    pub fn delete_folder(&self, username: &str, folder_name: &str) -> Result<Folder> {
        let user = resolve_user(self.users.as_ref(), username)?;
        self.folders.validate_folder_name(folder_name)?;

        let removed = self.folders.delete_folder(&user.username, folder_name)?;
        let files = self.files.remove_folder(&user.username, &removed.name)?;
        log::info!(
            "deleted folder {}/{} with {} files",
            user.username,
            removed.name,
            files
        );
        Ok(removed)
    }

    /// 重命名文件夹，文件随之移动
    pub fn rename_folder(&self, username: &str, folder_name: &str, new_name: &str) -> Result<()> {
        let user = resolve_user(self.users.as_ref(), username)?;
        self.folders.validate_folder_name(new_name)?;

        let previous = self
            .folders
            .rename_folder(&user.username, folder_name, new_name)?;
        let moved = self.files.move_folder(&user.username, &previous, new_name)?;
        log::info!(
            "renamed folder {}/{} to {} ({} files moved)",
            user.username,
            previous,
            new_name,
            moved
        );
        Ok(())
    }

    /// 列出文件夹
    pub fn list_folders(&self, username: &str, options: ListOptions) -> Result<Vec<Folder>> {
        let user = resolve_user(self.users.as_ref(), username)?;
        self.folders.list_folders(&user.username, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::mocks::{FailingFiles, KnownUsers};
    use crate::domain::DomainError;
    use crate::domain::models::{File, SortField, SortOrder};
    use crate::infrastructure::{JsonFileRepository, JsonFolderRepository, TextUserRepository};
    use crate::test_utils::TempStorage;

    struct Fixture {
        _storage: TempStorage,
        service: FolderService,
        files: Arc<JsonFileRepository>,
    }

    fn fixture() -> Fixture {
        let storage = TempStorage::new();
        let config = storage.config();
        let users = Arc::new(TextUserRepository::new(config.users_path));
        users.register(&crate::domain::User::new("alice")).unwrap();
        let files = Arc::new(JsonFileRepository::new(config.files_path));
        let service = FolderService::new(
            Arc::new(JsonFolderRepository::new(config.folders_path)),
            files.clone(),
            users,
        );
        Fixture {
            _storage: storage,
            service,
            files,
        }
    }

    #[test]
    fn test_create_folder() {
        let f = fixture();
        let folder = f.service.create_folder("alice", "Notes", "my notes").unwrap();
        assert_eq!(folder.name, "Notes");
        assert_eq!(folder.username, "alice");

        let listed = f.service.list_folders("alice", ListOptions::default()).unwrap();
        assert_eq!(listed[0].description, "my notes");
    }

    #[test]
    fn test_username_resolves_to_registered_spelling() {
        let storage = TempStorage::new();
        let config = storage.config();
        let users = Arc::new(TextUserRepository::new(config.users_path));
        users.register(&crate::domain::User::new("Alice")).unwrap();
        let service = FolderService::new(
            Arc::new(JsonFolderRepository::new(config.folders_path)),
            Arc::new(JsonFileRepository::new(config.files_path)),
            users,
        );

        let folder = service.create_folder("alice", "Notes", "").unwrap();
        assert_eq!(folder.username, "Alice");

        // 不同拼写的用户名指向同一个命名空间
        assert_eq!(
            service.create_folder("ALICE", "notes", ""),
            Err(DomainError::FolderExists("notes".to_string()))
        );
        let listed = service.list_folders("Alice", ListOptions::default()).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].username, "Alice");

        service.rename_folder("aLiCe", "Notes", "Journal").unwrap();
        service.delete_folder("ALICE", "journal").unwrap();
        assert_eq!(
            service.list_folders("alice", ListOptions::default()),
            Err(DomainError::NoFoldersFound("Alice".to_string()))
        );
    }

    #[test]
    fn test_create_folder_unknown_user() {
        let f = fixture();
        assert_eq!(
            f.service.create_folder("ghost", "Notes", ""),
            Err(DomainError::UserNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_create_folder_invalid_name() {
        let f = fixture();
        assert_eq!(
            f.service.create_folder("alice", "invalid@folder", ""),
            Err(DomainError::InvalidName("invalid@folder".to_string()))
        );
    }

    #[test]
    fn test_user_check_runs_before_validation() {
        let f = fixture();
        assert!(matches!(
            f.service.create_folder("ghost", "bad name", ""),
            Err(DomainError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_delete_folder_cascades_to_files() {
        let f = fixture();
        f.service.create_folder("alice", "Notes", "").unwrap();
        f.files.create_file(File::new("alice", "Notes", "todo", "")).unwrap();

        let removed = f.service.delete_folder("alice", "notes").unwrap();
        assert_eq!(removed.name, "Notes");
        assert!(
            f.files
                .list_files("alice", "Notes", ListOptions::default())
                .unwrap()
                .is_empty()
        );

        // 同名新文件夹不会继承旧文件
        f.service.create_folder("alice", "Notes", "").unwrap();
        assert!(
            f.files
                .list_files("alice", "Notes", ListOptions::default())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_delete_ghost_folder() {
        let f = fixture();
        assert_eq!(
            f.service.delete_folder("alice", "ghost"),
            Err(DomainError::FolderNotFound("ghost".to_string()))
        );
    }

    #[test]
    fn test_rename_folder_moves_files() {
        let f = fixture();
        f.service.create_folder("alice", "Notes", "").unwrap();
        f.files.create_file(File::new("alice", "Notes", "todo", "")).unwrap();

        f.service.rename_folder("alice", "notes", "Journal").unwrap();

        let moved = f
            .files
            .list_files("alice", "Journal", ListOptions::default())
            .unwrap();
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].name, "todo");
    }

    #[test]
    fn test_rename_to_invalid_name() {
        let f = fixture();
        f.service.create_folder("alice", "Notes", "").unwrap();
        assert!(matches!(
            f.service.rename_folder("alice", "Notes", "no spaces"),
            Err(DomainError::InvalidName(_))
        ));
    }

    #[test]
    fn test_list_folders_sorted() {
        let f = fixture();
        f.service.create_folder("alice", "b", "").unwrap();
        f.service.create_folder("alice", "a", "").unwrap();

        let listed = f
            .service
            .list_folders("alice", ListOptions::new(Some(SortField::Name), SortOrder::Desc))
            .unwrap();
        let names: Vec<_> = listed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_list_folders_empty() {
        let f = fixture();
        assert_eq!(
            f.service.list_folders("alice", ListOptions::default()),
            Err(DomainError::NoFoldersFound("alice".to_string()))
        );
    }

    #[test]
    fn test_file_store_failure_surfaces_after_folder_delete() {
        let storage = TempStorage::new();
        let folders = Arc::new(JsonFolderRepository::new(storage.config().folders_path));
        let service = FolderService::new(folders.clone(), Arc::new(FailingFiles), Arc::new(KnownUsers(true)));

        service.create_folder("alice", "Notes", "").unwrap();
        assert!(matches!(
            service.delete_folder("alice", "Notes"),
            Err(DomainError::Io(_))
        ));
        assert!(!folders.exists("alice", "Notes").unwrap());
    }
}
