//! 配置加载
//!
//! 优先级（低 → 高）：默认值 → 配置文件 → 环境变量 → `--data-dir`

use crate::domain::error::Result;
use crate::domain::repositories::StorageConfig;
use crate::infrastructure::paths;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const ENV_USERS_FILE: &str = "VFS_USERS_FILE";
pub const ENV_FOLDERS_FILE: &str = "VFS_FOLDERS_FILE";
pub const ENV_FILES_FILE: &str = "VFS_FILES_FILE";

/// 配置文件内容
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// 退出交互模式时删除所有存储文件
    pub ephemeral: bool,
    pub storage: StorageSection,
}

/// `[storage]` 表
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageSection {
    pub data_dir: Option<PathBuf>,
    pub users_file: Option<PathBuf>,
    pub folders_file: Option<PathBuf>,
    pub files_file: Option<PathBuf>,
}

impl ConfigFile {
    /// 从文件加载；文件不存在时返回默认配置
    pub fn load(path: &Path) -> Result<Self> {
        match paths::read_if_exists(path)? {
            Some(content) => {
                let config = toml::from_str(&content)?;
                log::debug!("loaded config from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// 解析最终的存储路径
    ///
    /// 文件中的相对路径相对于数据目录解析。
    pub fn resolve_storage(&self, data_dir_override: Option<&Path>) -> StorageConfig {
        if let Some(dir) = data_dir_override {
            return StorageConfig::in_dir(dir);
        }

        let base = self
            .storage
            .data_dir
            .clone()
            .unwrap_or_else(paths::get_data_dir);
        let mut config = StorageConfig::in_dir(&base);

        if let Some(file) = &self.storage.users_file {
            config.users_path = base.join(file);
        }
        if let Some(file) = &self.storage.folders_file {
            config.folders_path = base.join(file);
        }
        if let Some(file) = &self.storage.files_file {
            config.files_path = base.join(file);
        }

        if let Some(path) = env_path(ENV_USERS_FILE) {
            config.users_path = path;
        }
        if let Some(path) = env_path(ENV_FOLDERS_FILE) {
            config.folders_path = path;
        }
        if let Some(path) = env_path(ENV_FILES_FILE) {
            config.files_path = path;
        }

        config
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
