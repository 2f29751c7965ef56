//! 文件夹实体

use super::listing::Listable;
use chrono::{DateTime, Utc};

/// 文件夹，身份为 (username, name)，name 比较不区分大小写
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub username: String,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// 创建新文件夹，创建时间取当前时间
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }
}

impl Listable for Folder {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
