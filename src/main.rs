//! # radecay - 放射性衰变计算器
//!
//! 由衰变常数、初始数量（核数或质量）和经过时间计算剩余量，
//! 并生成衰变曲线用于表格、CSV 导出与绘图。
//!
//! ## 子命令
//! - `calc`     - 单点计算：N(t) = N0·exp(-λt)
//! - `curve`    - 衰变曲线采样、导出 (CSV) 与绘图 (PNG/SVG)
//! - `isotopes` - 列出内置同位素表
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── decay/     (同位素表、衰变引擎、曲线采样、导出、绘图)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod decay;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
