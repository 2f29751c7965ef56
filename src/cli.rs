//! CLI 参数定义

use crate::domain::models::ListOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// vfs - 命令行虚拟文件系统
#[derive(Parser, Debug)]
#[command(
    name = "vfs",
    version,
    about = "命令行虚拟文件系统",
    long_about = "为已注册用户管理文件夹与文件记录，所有记录持久化到本地文件"
)]
pub struct Cli {
    /// 不带子命令时进入交互模式
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 配置文件路径（默认 ~/.vfs/config.toml）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 数据目录，覆盖所有存储文件位置
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// 退出交互模式时删除存储文件
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// 注册用户
    Register {
        username: String,
    },

    /// 创建文件夹
    CreateFolder {
        username: String,
        foldername: String,
        /// 描述（可包含空格）
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },

    /// 删除文件夹及其中的文件
    DeleteFolder {
        username: String,
        foldername: String,
    },

    /// 列出文件夹
    ListFolders {
        username: String,
        #[command(flatten)]
        sort: SortArgs,
    },

    /// 重命名文件夹
    RenameFolder {
        username: String,
        foldername: String,
        new_folder_name: String,
    },

    /// 创建文件
    CreateFile {
        username: String,
        foldername: String,
        filename: String,
        /// 描述（可包含空格）
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },

    /// 删除文件
    DeleteFile {
        username: String,
        foldername: String,
        filename: String,
    },

    /// 列出文件夹中的文件
    ListFiles {
        username: String,
        foldername: String,
        #[command(flatten)]
        sort: SortArgs,
    },

    /// 进入交互模式
    Shell,
}

/// 列表排序参数：[--sort-name|--sort-created] [asc|desc]
///
/// 两者都按原样接收，无法识别的字段回退为按名称升序，无法识别的方向回退为升序。
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SortArgs {
    /// 排序字段：--sort-name 或 --sort-created
    #[arg(value_name = "SORT_FIELD", allow_hyphen_values = true)]
    pub field: Option<String>,

    /// 排序方向：asc 或 desc
    #[arg(value_name = "ORDER")]
    pub order: Option<String>,
}

impl SortArgs {
    pub fn to_options(&self) -> ListOptions {
        ListOptions::from_args(self.field.as_deref(), self.order.as_deref())
    }
}

/// 交互模式下的一行输入
#[derive(Parser, Debug)]
#[command(name = "vfs", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Commands,
}

/// 将描述参数合并为单个字符串
pub fn join_description(words: &[String]) -> String {
    words.join(" ")
}
