//! 测试工具模块
//!
//! 提供环境变量守卫与临时存储目录，避免测试之间互相污染

use crate::domain::repositories::StorageConfig;
use std::collections::HashMap;
use std::env;
use std::sync::Mutex;
use tempfile::TempDir;

/// 环境变量守卫 - 自动清理
pub struct EnvGuard {
    original_vars: HashMap<String, String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// 创建一个新的环境守卫，记录当前环境变量
    pub fn new() -> Self {
        let original_vars: HashMap<String, String> = env::vars().collect();
        Self { original_vars }
    }

    /// 设置测试环境变量（自动包装为 unsafe）
    pub fn set_var(&self, key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    /// 释放时恢复原始环境变量
    fn drop(&mut self) {
        let current_vars: Vec<String> = env::vars().map(|(k, _)| k).collect();
        for key in current_vars {
            if !self.original_vars.contains_key(&key) {
                self.remove_var(&key);
            }
        }

        for (key, value) in &self.original_vars {
            if env::var(key).ok().as_deref() != Some(value.as_str()) {
                self.set_var(key, value);
            }
        }
    }
}

/// 临时数据目录，释放时自动删除
pub struct TempStorage {
    temp_dir: TempDir,
}

impl Default for TempStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TempStorage {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    /// 指向临时目录的存储配置
    pub fn config(&self) -> StorageConfig {
        StorageConfig::in_dir(self.temp_dir.path())
    }
}

/// 在持有锁的线程中 panic，使锁进入中毒状态
pub fn poison(lock: &Mutex<()>) {
    std::thread::scope(|scope| {
        let handle = scope.spawn(|| {
            let _guard = lock.lock().unwrap();
            panic!("writer crashed while holding the lock");
        });
        assert!(handle.join().is_err());
    });
    assert!(lock.is_poisoned());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_guard_cleanup() {
        {
            let guard = EnvGuard::new();
            guard.set_var("VFS_TEST_CLEANUP_VAR", "cleanup_test");
            assert_eq!(env::var("VFS_TEST_CLEANUP_VAR").unwrap(), "cleanup_test");
        }
        // guard 被释放后，变量应该被清理
        assert!(env::var("VFS_TEST_CLEANUP_VAR").is_err());
    }

    #[test]
    fn test_temp_storage_config() {
        let storage = TempStorage::new();
        let config = storage.config();
        for path in config.paths() {
            assert!(path.starts_with(storage.path()));
            assert!(!path.exists());
        }
    }
}
