//! 应用程序容器
//!
//! 负责配置加载、依赖注入和命令分发

use crate::application::services::{FileService, FolderService, UserService};
use crate::cli::{Cli, Commands, join_description};
use crate::commands::file::{CreateFileCommand, DeleteFileCommand, ListFilesCommand};
use crate::commands::folder::{
    CreateFolderCommand, DeleteFolderCommand, ListFoldersCommand, RenameFolderCommand,
};
use crate::commands::shell::ShellCommand;
use crate::commands::user::RegisterCommand;
use crate::commands::{CommandContext, CommandHandler};
use crate::domain::error::{DomainError, Result};
use crate::domain::repositories::{FileRepository, FolderRepository, StorageConfig, UserRepository};
use crate::infrastructure::config::ConfigFile;
use crate::infrastructure::{JsonFileRepository, JsonFolderRepository, TextUserRepository, paths};
use std::sync::Arc;

/// 应用程序配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub verbose: bool,
    /// 退出交互模式时删除存储文件
    pub ephemeral: bool,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// 合并命令行参数与配置文件
    ///
    /// 显式指定的 `--config` 必须存在；默认路径缺失时使用默认配置。
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) if !paths::file_exists(path) => {
                return Err(DomainError::Config(format!(
                    "配置文件不存在: {}",
                    path.display()
                )));
            }
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::load(&paths::get_config_path())?,
        };

        Ok(Self {
            verbose: cli.verbose,
            ephemeral: cli.ephemeral || file.ephemeral,
            storage: file.resolve_storage(cli.data_dir.as_deref()),
        })
    }
}

/// 应用程序容器
pub struct Application {
    pub user_service: Arc<UserService>,
    pub folder_service: Arc<FolderService>,
    pub file_service: Arc<FileService>,
    config: AppConfig,
}

impl Application {
    /// 创建应用程序实例
    pub fn new(config: AppConfig) -> Self {
        let storage = &config.storage;
        log::debug!(
            "storage: users={} folders={} files={}",
            storage.users_path.display(),
            storage.folders_path.display(),
            storage.files_path.display()
        );

        let users: Arc<dyn UserRepository> =
            Arc::new(TextUserRepository::new(storage.users_path.clone()));
        let folders: Arc<dyn FolderRepository> =
            Arc::new(JsonFolderRepository::new(storage.folders_path.clone()));
        let files: Arc<dyn FileRepository> =
            Arc::new(JsonFileRepository::new(storage.files_path.clone()));

        Self {
            user_service: Arc::new(UserService::new(users.clone())),
            folder_service: Arc::new(FolderService::new(
                folders.clone(),
                files.clone(),
                users.clone(),
            )),
            file_service: Arc::new(FileService::new(files, folders, users)),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 执行一条命令
    pub fn execute(&self, command: Commands) -> Result<()> {
        let ctx = CommandContext {
            verbose: self.config.verbose,
        };
        self.handler(command).execute(&ctx)
    }

    fn handler(&self, command: Commands) -> Box<dyn CommandHandler + '_> {
        match command {
            Commands::Register { username } => {
                Box::new(RegisterCommand::new(self.user_service.clone(), username))
            }
            Commands::CreateFolder {
                username,
                foldername,
                description,
            } => Box::new(CreateFolderCommand::new(
                self.folder_service.clone(),
                username,
                foldername,
                join_description(&description),
            )),
            Commands::DeleteFolder {
                username,
                foldername,
            } => Box::new(DeleteFolderCommand::new(
                self.folder_service.clone(),
                username,
                foldername,
            )),
            Commands::ListFolders { username, sort } => Box::new(ListFoldersCommand::new(
                self.folder_service.clone(),
                username,
                sort.to_options(),
            )),
            Commands::RenameFolder {
                username,
                foldername,
                new_folder_name,
            } => Box::new(RenameFolderCommand::new(
                self.folder_service.clone(),
                username,
                foldername,
                new_folder_name,
            )),
            Commands::CreateFile {
                username,
                foldername,
                filename,
                description,
            } => Box::new(CreateFileCommand::new(
                self.file_service.clone(),
                username,
                foldername,
                filename,
                join_description(&description),
            )),
            Commands::DeleteFile {
                username,
                foldername,
                filename,
            } => Box::new(DeleteFileCommand::new(
                self.file_service.clone(),
                username,
                foldername,
                filename,
            )),
            Commands::ListFiles {
                username,
                foldername,
                sort,
            } => Box::new(ListFilesCommand::new(
                self.file_service.clone(),
                username,
                foldername,
                sort.to_options(),
            )),
            Commands::Shell => Box::new(ShellCommand::new(self)),
        }
    }

    /// 删除全部存储文件，返回实际删除的数量
    pub fn cleanup(&self) -> Result<usize> {
        let mut removed = 0;
        for path in self.config.storage.paths() {
            if paths::remove_if_exists(path)? {
                removed += 1;
            }
        }
        log::info!("removed {} storage files", removed);
        Ok(removed)
    }
}
