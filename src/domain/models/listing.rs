//! 列表排序选项与排序逻辑（文件夹与文件共用）

use chrono::{DateTime, Utc};
use std::fmt;

/// 排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    CreatedAt,
}

impl SortField {
    /// 从字符串解析，接受命令行标志形式与字段名形式
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "--sort-name" | "name" => Some(SortField::Name),
            "--sort-created" | "created" | "createdat" | "created_at" => Some(SortField::CreatedAt),
            _ => None,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Name => write!(f, "name"),
            SortField::CreatedAt => write!(f, "createdAt"),
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl From<&str> for SortOrder {
    fn from(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// 列表选项
///
/// `field` 为 `None` 时一律按名称升序，忽略 `order`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListOptions {
    pub field: Option<SortField>,
    pub order: SortOrder,
}

impl ListOptions {
    #[must_use]
    pub fn new(field: Option<SortField>, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// 从原始字符串构造；无法识别的字段回退为默认排序
    #[must_use]
    pub fn from_args(field: Option<&str>, order: Option<&str>) -> Self {
        Self {
            field: field.and_then(SortField::parse),
            order: order.map(SortOrder::from).unwrap_or_default(),
        }
    }
}

/// 可排序的列表记录
pub trait Listable {
    fn sort_name(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

/// 按选项原地排序（稳定排序）
pub fn sort_records<T: Listable>(records: &mut [T], options: ListOptions) {
    let (field, order) = match options.field {
        Some(field) => (field, options.order),
        None => (SortField::Name, SortOrder::Asc),
    };

    records.sort_by(|a, b| {
        let ordering = match field {
            SortField::Name => a.sort_name().cmp(b.sort_name()),
            SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Item {
        name: &'static str,
        at: i64,
    }

    impl Listable for Item {
        fn sort_name(&self) -> &str {
            self.name
        }

        fn created_at(&self) -> DateTime<Utc> {
            Utc.timestamp_opt(self.at, 0).unwrap()
        }
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name).collect()
    }

    fn sample() -> Vec<Item> {
        vec![
            Item { name: "b", at: 100 },
            Item { name: "a", at: 200 },
            Item { name: "c", at: 50 },
        ]
    }

    #[test]
    fn test_sort_by_name() {
        let mut items = sample();
        sort_records(&mut items, ListOptions::new(Some(SortField::Name), SortOrder::Asc));
        assert_eq!(names(&items), vec!["a", "b", "c"]);

        sort_records(&mut items, ListOptions::new(Some(SortField::Name), SortOrder::Desc));
        assert_eq!(names(&items), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_by_created() {
        let mut items = sample();
        sort_records(&mut items, ListOptions::new(Some(SortField::CreatedAt), SortOrder::Asc));
        assert_eq!(names(&items), vec!["c", "b", "a"]);

        sort_records(&mut items, ListOptions::new(Some(SortField::CreatedAt), SortOrder::Desc));
        assert_eq!(names(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unspecified_field_ignores_order() {
        let mut items = sample();
        sort_records(&mut items, ListOptions::new(None, SortOrder::Desc));
        assert_eq!(names(&items), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_name_sort_is_byte_order() {
        let mut items = vec![Item { name: "b", at: 0 }, Item { name: "B", at: 0 }];
        sort_records(&mut items, ListOptions::default());
        assert_eq!(names(&items), vec!["B", "b"]);
    }

    #[test]
    fn test_from_args_fallbacks() {
        let opts = ListOptions::from_args(Some("--sort-created"), Some("desc"));
        assert_eq!(opts, ListOptions::new(Some(SortField::CreatedAt), SortOrder::Desc));

        let opts = ListOptions::from_args(Some("--bogus"), Some("desc"));
        assert_eq!(opts.field, None);

        let opts = ListOptions::from_args(Some("name"), Some("sideways"));
        assert_eq!(opts.order, SortOrder::Asc);

        assert_eq!(ListOptions::from_args(None, None), ListOptions::default());
    }
}
