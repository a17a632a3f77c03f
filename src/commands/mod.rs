//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `decay/`, `models/`, `utils/`
//! - 子模块: calc, curve, isotopes, query

pub mod calc;
pub mod curve;
pub mod isotopes;
pub mod query;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Calc(args) => calc::execute(args),
        Commands::Curve(args) => curve::execute(args),
        Commands::Isotopes(args) => isotopes::execute(args),
    }
}
