//! # 衰变查询参数
//!
//! `calc` 与 `curve` 共用的参数：同位素选择、自定义常数、时间与初始数量。
//!
//! ## 依赖关系
//! - 被 `cli/calc.rs`, `cli/curve.rs` 通过 `#[command(flatten)]` 引用
//! - 由 `commands/query.rs` 解析为 `DecayQuery`

use clap::Args;

/// 衰变查询参数
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Isotope name or symbol from the catalog (e.g., "Césio-137", "Co-60"); defaults to Césio-137
    #[arg(short, long, env = "RADECAY_ISOTOPE")]
    pub isotope: Option<String>,

    /// Decay constant λ in 1/years (overrides the catalog value; without --isotope defines a custom isotope)
    #[arg(short, long, allow_negative_numbers = true)]
    pub lambda: Option<f64>,

    /// Atomic weight in g/mol (overrides the catalog value)
    #[arg(long, allow_negative_numbers = true)]
    pub atomic_weight: Option<f64>,

    /// Elapsed time (for `curve`, a value <= 0 spans five half-lives)
    #[arg(short, long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub time: f64,

    /// Time unit: segundos, minutos, horas, dias, anos (English names accepted)
    #[arg(short, long, default_value = "anos", env = "RADECAY_TIME_UNIT")]
    pub unit: String,

    /// Initial number of nuclei (default: 1 mol = 6.02214076e23)
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "mass")]
    pub nuclei: Option<f64>,

    /// Initial mass in grams (switches input and output to mass mode)
    #[arg(short, long, allow_negative_numbers = true)]
    pub mass: Option<f64>,
}
