//! 文件命令处理器

use super::{CommandContext, CommandHandler, table};
use crate::application::services::FileService;
use crate::domain::error::Result;
use crate::domain::models::{File, ListOptions};
use std::sync::Arc;

/// create-file 命令
pub struct CreateFileCommand {
    file_service: Arc<FileService>,
    username: String,
    folder_name: String,
    file_name: String,
    description: String,
}

impl CreateFileCommand {
    pub fn new(
        file_service: Arc<FileService>,
        username: String,
        folder_name: String,
        file_name: String,
        description: String,
    ) -> Self {
        Self {
            file_service,
            username,
            folder_name,
            file_name,
            description,
        }
    }
}

impl CommandHandler for CreateFileCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let file = self.file_service.create_file(
            &self.username,
            &self.folder_name,
            &self.file_name,
            &self.description,
        )?;
        println!(
            "Create '{}' in {}/{} successfully.",
            file.name, file.username, file.folder_name
        );
        Ok(())
    }
}

/// delete-file 命令
pub struct DeleteFileCommand {
    file_service: Arc<FileService>,
    username: String,
    folder_name: String,
    file_name: String,
}

impl DeleteFileCommand {
    pub fn new(
        file_service: Arc<FileService>,
        username: String,
        folder_name: String,
        file_name: String,
    ) -> Self {
        Self {
            file_service,
            username,
            folder_name,
            file_name,
        }
    }
}

impl CommandHandler for DeleteFileCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        self.file_service
            .delete_file(&self.username, &self.folder_name, &self.file_name)?;
        println!(
            "Delete '{}' in {}/{} successfully.",
            self.file_name, self.username, self.folder_name
        );
        Ok(())
    }
}

/// list-files 命令
pub struct ListFilesCommand {
    file_service: Arc<FileService>,
    username: String,
    folder_name: String,
    options: ListOptions,
}

impl ListFilesCommand {
    pub fn new(
        file_service: Arc<FileService>,
        username: String,
        folder_name: String,
        options: ListOptions,
    ) -> Self {
        Self {
            file_service,
            username,
            folder_name,
            options,
        }
    }
}

impl CommandHandler for ListFilesCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        let files = self
            .file_service
            .list_files(&self.username, &self.folder_name, self.options)?;
        if files.is_empty() {
            println!("Warning: The folder is empty.");
        } else {
            println!("{}", render_files(&files));
        }
        Ok(())
    }
}

pub fn render_files(files: &[File]) -> String {
    let rows: Vec<Vec<String>> = files
        .iter()
        .map(|file| {
            vec![
                file.name.clone(),
                file.description.clone(),
                table::display_time(&file.created_at),
                file.folder_name.clone(),
                file.username.clone(),
            ]
        })
        .collect();
    table::render(
        &["Name", "Description", "Created At", "Folder", "User Name"],
        &rows,
    )
}
