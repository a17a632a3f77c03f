//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `calc`: 计算给定时间后的剩余核数或质量
//! - `curve`: 生成衰变曲线（表格、CSV、PNG/SVG）
//! - `isotopes`: 列出同位素表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: query, calc, curve, isotopes

pub mod calc;
pub mod curve;
pub mod isotopes;
pub mod query;

use clap::{Parser, Subcommand};

/// radecay - 放射性衰变计算器
#[derive(Parser)]
#[command(name = "radecay")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Radioactive decay calculator: remaining nuclei/mass, decay curves and CSV export", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the remaining nuclei (or mass) after an elapsed time
    Calc(calc::CalcArgs),

    /// Sample the decay curve and export it as a table, CSV, PNG or SVG
    Curve(curve::CurveArgs),

    /// List the built-in isotope catalog
    Isotopes(isotopes::IsotopesArgs),
}
