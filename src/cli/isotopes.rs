//! # isotopes 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/isotopes.rs`

use clap::Args;
use std::path::PathBuf;

/// isotopes 子命令参数
#[derive(Args, Debug)]
pub struct IsotopesArgs {
    /// Also export the catalog to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
