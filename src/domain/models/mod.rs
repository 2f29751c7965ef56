//! 领域实体

pub mod file;
pub mod folder;
pub mod listing;
pub mod user;

pub use file::File;
pub use folder::Folder;
pub use listing::{ListOptions, Listable, SortField, SortOrder, sort_records};
pub use user::User;
