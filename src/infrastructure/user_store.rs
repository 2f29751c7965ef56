//! 用户存储：按行追加的纯文本用户名列表

use crate::domain::error::Result;
use crate::domain::models::User;
use crate::domain::repositories::UserRepository;
use crate::infrastructure::paths;
use crate::infrastructure::records::acquire;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// 文本文件用户存储
pub struct TextUserRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl TextUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UserRepository for TextUserRepository {
    fn register(&self, user: &User) -> Result<()> {
        let _guard = acquire(&self.lock, &self.path)?;
        paths::append_line(&self.path, &user.username)?;
        log::debug!("registered user {} in {}", user.username, self.path.display());
        Ok(())
    }

    fn find(&self, username: &str) -> Result<Option<User>> {
        let _guard = acquire(&self.lock, &self.path)?;

        // 文件尚未创建视为没有用户
        let Some(content) = paths::read_if_exists(&self.path)? else {
            return Ok(None);
        };

        Ok(content
            .lines()
            .find(|line| line.eq_ignore_ascii_case(username))
            .map(User::new))
    }
}
