//! # 数据模型模块
//!
//! 定义同位素、时间单位与衰变查询的统一数据模型。
//!
//! ## 依赖关系
//! - 被 `decay/` 和 `commands/` 使用
//! - 子模块: isotope, query, units

pub mod isotope;
pub mod query;
pub mod units;

pub use isotope::{DecayParameters, IsotopeRecord};
pub use query::{DecayQuery, InitialQuantity, OutputMode};
pub use units::TimeUnit;
