//! 文件实体（仅元数据，不含内容）

use super::listing::Listable;
use chrono::{DateTime, Utc};

/// 文件，身份为 (username, folder_name, name)，全部精确匹配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub username: String,
    pub folder_name: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl File {
    /// 创建新文件，创建时间取当前时间
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        folder_name: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            folder_name: folder_name.into(),
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}

impl Listable for File {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
