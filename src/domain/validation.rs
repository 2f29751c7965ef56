//! 名称校验（用户名、文件夹名、文件名共用同一规则）

use crate::domain::error::{DomainError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// 名称最大长度（字节）
pub const MAX_NAME_LEN: usize = 30;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("名称正则应当有效"));

/// 校验名称：先检查长度，再检查字符集
///
/// - 字节长度超过 [`MAX_NAME_LEN`] 返回 `NameTooLong`
/// - 为空或含字母数字以外的字符返回 `InvalidName`
pub fn validate_name(name: &str) -> Result<()> {
    if name.len() > MAX_NAME_LEN {
        return Err(DomainError::NameTooLong(name.to_string()));
    }

    if !NAME_RE.is_match(name) {
        return Err(DomainError::InvalidName(name.to_string()));
    }

    Ok(())
}
