//! 文件夹命令处理器

use super::{CommandContext, CommandHandler, table};
use crate::application::services::FolderService;
use crate::domain::error::{DomainError, Result};
use crate::domain::models::{Folder, ListOptions};
use std::sync::Arc;

/// create-folder 命令
pub struct CreateFolderCommand {
    folder_service: Arc<FolderService>,
    username: String,
    folder_name: String,
    description: String,
}

impl CreateFolderCommand {
    pub fn new(
        folder_service: Arc<FolderService>,
        username: String,
        folder_name: String,
        description: String,
    ) -> Self {
        Self {
            folder_service,
            username,
            folder_name,
            description,
        }
    }
}

impl CommandHandler for CreateFolderCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        self.folder_service
            .create_folder(&self.username, &self.folder_name, &self.description)?;
        println!("Create '{}' successfully.", self.folder_name);
        Ok(())
    }
}

/// delete-folder 命令
pub struct DeleteFolderCommand {
    folder_service: Arc<FolderService>,
    username: String,
    folder_name: String,
}

impl DeleteFolderCommand {
    pub fn new(folder_service: Arc<FolderService>, username: String, folder_name: String) -> Self {
        Self {
            folder_service,
            username,
            folder_name,
        }
    }
}

impl CommandHandler for DeleteFolderCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        self.folder_service
            .delete_folder(&self.username, &self.folder_name)?;
        println!("Delete '{}' successfully.", self.folder_name);
        Ok(())
    }
}

/// rename-folder 命令
pub struct RenameFolderCommand {
    folder_service: Arc<FolderService>,
    username: String,
    folder_name: String,
    new_name: String,
}

impl RenameFolderCommand {
    pub fn new(
        folder_service: Arc<FolderService>,
        username: String,
        folder_name: String,
        new_name: String,
    ) -> Self {
        Self {
            folder_service,
            username,
            folder_name,
            new_name,
        }
    }
}

impl CommandHandler for RenameFolderCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        self.folder_service
            .rename_folder(&self.username, &self.folder_name, &self.new_name)?;
        println!(
            "Rename '{}' to '{}' successfully.",
            self.folder_name, self.new_name
        );
        Ok(())
    }
}

/// list-folders 命令
pub struct ListFoldersCommand {
    folder_service: Arc<FolderService>,
    username: String,
    options: ListOptions,
}

impl ListFoldersCommand {
    pub fn new(folder_service: Arc<FolderService>, username: String, options: ListOptions) -> Self {
        Self {
            folder_service,
            username,
            options,
        }
    }
}

impl CommandHandler for ListFoldersCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        match self.folder_service.list_folders(&self.username, self.options) {
            Ok(folders) => {
                println!("{}", render_folders(&folders));
                Ok(())
            }
            // 没有文件夹不算失败
            Err(DomainError::NoFoldersFound(username)) => {
                println!("Warning: The {} doesn't have any folders.", username);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

pub fn render_folders(folders: &[Folder]) -> String {
    let rows: Vec<Vec<String>> = folders
        .iter()
        .map(|folder| {
            vec![
                folder.name.clone(),
                folder.description.clone(),
                table::display_time(&folder.created_at),
                folder.username.clone(),
            ]
        })
        .collect();
    table::render(&["Name", "Description", "Created At", "User Name"], &rows)
}
