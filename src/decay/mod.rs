//! # 放射性衰变计算模块
//!
//! 提供衰变量（剩余核数或质量）的计算、衰变曲线采样与导出。
//!
//! ## 子模块
//! - `catalog`: 同位素常数表
//! - `engine`: 初始数量解析与指数衰变定律
//! - `sampler`: 衰变曲线采样（含时间范围启发式）
//! - `format`: 科学计数法显示格式
//! - `export`: CSV 导出
//! - `plot`: 图表生成
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 数据模型

pub mod catalog;
pub mod engine;
pub mod export;
pub mod format;
pub mod plot;
pub mod sampler;

pub use engine::{DecayOutcome, AVOGADRO_NUMBER};
pub use sampler::CurvePoint;
