//! 路径与文件读写工具

use crate::domain::error::{DomainError, Result};
use crate::domain::repositories::StorageConfig;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 默认配置文件名
pub const CONFIG_FILE: &str = "config.toml";

/// 获取数据目录
pub fn get_data_dir() -> PathBuf {
    StorageConfig::default_dir()
}

/// 获取默认配置文件路径：~/.vfs/config.toml
pub fn get_config_path() -> PathBuf {
    get_data_dir().join(CONFIG_FILE)
}

/// 检查文件是否存在
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// 确保父目录存在 (幂等操作)
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| io_error("创建目录", parent, e))?;
    }
    Ok(())
}

/// 读取文件内容；文件不存在时返回 `None`
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error("读取文件", path, e)),
    }
}

/// 安全写入文件 (使用临时文件 + 原子替换)
pub fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    let temp_path = temp_path_for(path);
    std::fs::write(&temp_path, content).map_err(|e| io_error("写入文件", &temp_path, e))?;
    std::fs::rename(&temp_path, path).map_err(|e| io_error("替换文件", path, e))?;

    Ok(())
}

/// 追加一行到文件末尾，文件不存在时创建
pub fn append_line(path: &Path, line: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_error("打开文件", path, e))?;
    writeln!(file, "{}", line).map_err(|e| io_error("追加写入", path, e))?;

    Ok(())
}

/// 删除文件；不存在时返回 false
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(io_error("删除文件", path, e)),
    }
}

// 保留原扩展名，避免 users.txt 与 users.json 的临时文件冲突
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> DomainError {
    DomainError::Io(format!("{} {} 失败: {}", action, path.display(), err))
}
