//! # 统一错误处理模块
//!
//! 定义 radecay 的所有错误类型，使用 `thiserror` 派生。
//!
//! 领域错误（衰变常数、原子量、数量、采样步数、同位素查找）均携带出错的输入值，
//! 便于调用方直接展示。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// radecay 统一错误类型
#[derive(Error, Debug)]
pub enum RadecayError {
    // ─────────────────────────────────────────────────────────────
    // 衰变计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid decay constant: {value} (λ must be > 0, in 1/years)")]
    InvalidDecayConstant { value: f64 },

    #[error(
        "Invalid atomic weight: {} (mass mode requires a positive atomic weight)",
        describe_weight(.value)
    )]
    InvalidAtomicWeight { value: Option<f64> },

    #[error("Negative {quantity}: {value} (must be >= 0)")]
    NegativeQuantity { quantity: &'static str, value: f64 },

    #[error("Invalid step count: {value} (must be > 1)")]
    InvalidStepCount { value: usize },

    #[error("Invalid time: {value} (the curve range {horizon} is not finite)")]
    InvalidTime { value: f64, horizon: f64 },

    #[error("Isotope not found: '{name}'")]
    IsotopeNotFound { name: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

fn describe_weight(value: &Option<f64>) -> String {
    match value {
        Some(w) => w.to_string(),
        None => "undefined".to_string(),
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, RadecayError>;
