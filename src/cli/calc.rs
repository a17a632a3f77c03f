//! # calc 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/calc.rs`

use crate::cli::query::QueryArgs;
use clap::Args;

/// calc 子命令参数
#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}
