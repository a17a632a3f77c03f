//! # curve 子命令 CLI 定义
//!
//! 采样衰变曲线，输出终端表格，并可导出 CSV 或绘制 PNG/SVG 图像。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/curve.rs`

use crate::cli::query::QueryArgs;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 曲线输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CurveOutputFormat {
    /// CSV data file (time, remaining quantity)
    Csv,
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
}

/// curve 子命令参数
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Number of sampling steps (the curve has steps + 1 points)
    #[arg(short, long, default_value_t = 50, env = "RADECAY_STEPS")]
    pub steps: usize,

    /// Output file (CSV, PNG or SVG); only the table is printed if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<CurveOutputFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: isotope name)
    #[arg(long)]
    pub title: Option<String>,

    /// Do not print the curve table
    #[arg(long, default_value_t = false)]
    pub no_table: bool,
}
