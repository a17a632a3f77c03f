//! # 衰变曲线采样
//!
//! 在启发式选取的时间范围内对衰变过程均匀采样，供图表与表格使用。
//!
//! ## 时间范围
//! - 给定时间 t > 0：范围为 2.5·t，展示请求点及其后的外推
//!   （范围溢出为非有限值时报错）
//! - 未给定时间（t <= 0）：五个半衰期（约 97% 已衰变），换算回原始单位；
//!   结果非有限或为零时退回默认值 100
//!
//! ## 依赖关系
//! - 被 `commands/curve.rs` 调用
//! - 使用 `decay/engine.rs` 计算各点的剩余量
//! - 使用 `decay/format.rs` 生成显示字符串

use crate::decay::engine::{self, check_decay_constant};
use crate::decay::format::{to_exponential, CURVE_DIGITS};
use crate::error::{RadecayError, Result};
use crate::models::{DecayQuery, OutputMode};

use std::f64::consts::LN_2;

/// 无法推出时间范围时的默认值（原始单位）
pub const DEFAULT_HORIZON: f64 = 100.0;

/// 未给定时间时展示的半衰期个数
pub const HORIZON_HALF_LIVES: f64 = 5.0;

/// 给定时间时的外推倍数
pub const EXTRAPOLATION_FACTOR: f64 = 2.5;

/// 曲线上的一个采样点
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoint {
    /// 经过时间（查询的原始单位）
    pub time: f64,
    /// 剩余量（核数或质量，取决于输出模式）
    pub value: f64,
    pub time_display: String,
    pub value_display: String,
}

/// 选择曲线的时间范围（原始单位）
pub fn choose_horizon(time_value: f64, decay_constant: f64, conversion_factor: f64) -> f64 {
    if time_value > 0.0 {
        return time_value * EXTRAPOLATION_FACTOR;
    }

    let half_life_years = LN_2 / decay_constant;
    let horizon = half_life_years * HORIZON_HALF_LIVES / conversion_factor;

    if horizon.is_finite() && horizon != 0.0 {
        horizon
    } else {
        DEFAULT_HORIZON
    }
}

/// 生成衰变曲线（共 step_count + 1 个点，含两端）
pub fn generate_curve(query: &DecayQuery, step_count: usize) -> Result<Vec<CurvePoint>> {
    if step_count <= 1 {
        return Err(RadecayError::InvalidStepCount { value: step_count });
    }
    check_decay_constant(query.decay_constant)?;

    let max_time = choose_horizon(
        query.time_value,
        query.decay_constant,
        query.time_unit.years_factor(),
    );
    if !max_time.is_finite() {
        return Err(RadecayError::InvalidTime {
            value: query.time_value,
            horizon: max_time,
        });
    }
    let step_size = max_time / step_count as f64;

    (0..=step_count)
        .map(|i| -> Result<CurvePoint> {
            let time = i as f64 * step_size;
            let nuclei = engine::compute_remaining(
                query.initial_nuclei,
                query.decay_constant,
                time,
                query.time_unit,
            )?;

            let value = match (query.mode, query.atomic_weight) {
                (OutputMode::Mass, Some(w)) => engine::to_mass(nuclei, w),
                _ => nuclei,
            };

            Ok(CurvePoint {
                time,
                value,
                time_display: to_exponential(time, CURVE_DIGITS),
                value_display: to_exponential(value, CURVE_DIGITS),
            })
        })
        .collect()
}
