//! 持久化记录格式
//!
//! 文件夹与文件集合以 JSON 数组整体存储，每次修改整体重写。
//! 创建时间以固定格式文本保存（UTC，精确到秒），列表时重新解析。

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{File, Folder};
use crate::infrastructure::paths;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// 创建时间的持久化格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// 磁盘上的文件夹记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFolder {
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: String,
}

impl StoredFolder {
    pub fn matches(&self, username: &str, name: &str) -> bool {
        self.username == username && self.name.eq_ignore_ascii_case(name)
    }

    /// 转换为领域实体；时间无法解析时返回 `None`
    pub fn to_model(&self) -> Option<Folder> {
        parse_timestamp(&self.created_at).map(|created_at| Folder {
            username: self.username.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            created_at,
        })
    }

    /// 转换为领域实体；时间无法解析时使用 UNIX 纪元
    pub fn to_model_lossy(&self) -> Folder {
        self.to_model().unwrap_or_else(|| Folder {
            username: self.username.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: DateTime::<Utc>::default(),
        })
    }
}

impl From<&Folder> for StoredFolder {
    fn from(folder: &Folder) -> Self {
        Self {
            username: folder.username.clone(),
            name: folder.name.clone(),
            description: folder.description.clone(),
            created_at: format_timestamp(&folder.created_at),
        }
    }
}

/// 磁盘上的文件记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    pub username: String,
    pub folder_name: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: String,
}

impl StoredFile {
    pub fn in_folder(&self, username: &str, folder_name: &str) -> bool {
        self.username == username && self.folder_name == folder_name
    }

    pub fn matches(&self, username: &str, folder_name: &str, name: &str) -> bool {
        self.in_folder(username, folder_name) && self.name == name
    }

    pub fn to_model(&self) -> Option<File> {
        parse_timestamp(&self.created_at).map(|created_at| File {
            username: self.username.clone(),
            folder_name: self.folder_name.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            created_at,
        })
    }
}

impl From<&File> for StoredFile {
    fn from(file: &File) -> Self {
        Self {
            username: file.username.clone(),
            folder_name: file.folder_name.clone(),
            name: file.name.clone(),
            description: file.description.clone(),
            created_at: format_timestamp(&file.created_at),
        }
    }
}

/// 读取整个集合；文件不存在或为空时返回空集合
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let records: Vec<T> = match paths::read_if_exists(path)? {
        Some(content) if !content.trim().is_empty() => serde_json::from_str(&content)
            .map_err(|e| DomainError::Serialization(format!("{}: {}", path.display(), e)))?,
        _ => Vec::new(),
    };
    log::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// 整体重写集合
pub fn save_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let content = serde_json::to_string_pretty(records)?;
    paths::write_file_safe(path, &content)?;
    log::debug!("saved {} records to {}", records.len(), path.display());
    Ok(())
}

/// 获取存储锁；锁中毒视为存储错误
pub fn acquire<'a>(lock: &'a Mutex<()>, path: &Path) -> Result<MutexGuard<'a, ()>> {
    lock.lock()
        .map_err(|_| DomainError::Storage(format!("存储锁已损坏: {}", path.display())))
}
