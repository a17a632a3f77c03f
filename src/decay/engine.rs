//! # 衰变计算引擎
//!
//! 实现放射性衰变的核心计算。
//!
//! ## 公式
//! N(t) = N0 · exp(-λt)，λ 与 t 均以“年”为单位
//!
//! ## 流程
//! 1. 解析初始数量：直接核数，或 质量 / 原子量 × 阿伏伽德罗常数
//! 2. 将经过时间换算为年
//! 3. 应用指数衰变定律
//! 4. 质量模式下将核数换算回质量
//!
//! 负时间不会被拒绝，结果大于 N0（向过去外推）。
//!
//! ## 依赖关系
//! - 被 `models/query.rs`, `decay/sampler.rs`, `commands/` 调用
//! - 使用 `decay/format.rs` 生成显示字符串

use crate::decay::format::{to_exponential, POINT_DIGITS};
use crate::error::{RadecayError, Result};
use crate::models::{DecayQuery, InitialQuantity, OutputMode, TimeUnit};

use std::f64::consts::LN_2;

/// 阿伏伽德罗常数 (mol⁻¹)
pub const AVOGADRO_NUMBER: f64 = 6.02214076e23;

/// 解析初始核数 N0
pub fn resolve_initial_quantity(initial: InitialQuantity, atomic_weight: Option<f64>) -> Result<f64> {
    match initial {
        InitialQuantity::Mass(grams) => {
            let weight = match atomic_weight {
                Some(w) if w > 0.0 => w,
                _ => {
                    return Err(RadecayError::InvalidAtomicWeight {
                        value: atomic_weight,
                    })
                }
            };
            if grams.is_nan() || grams < 0.0 {
                return Err(RadecayError::NegativeQuantity {
                    quantity: "mass",
                    value: grams,
                });
            }
            Ok((grams / weight) * AVOGADRO_NUMBER)
        }
        InitialQuantity::Nuclei(count) => {
            if count.is_nan() || count < 0.0 {
                return Err(RadecayError::NegativeQuantity {
                    quantity: "nuclei count",
                    value: count,
                });
            }
            Ok(count)
        }
    }
}

/// 计算经过时间后的剩余核数
pub fn compute_remaining(
    n0: f64,
    decay_constant: f64,
    time_value: f64,
    time_unit: TimeUnit,
) -> Result<f64> {
    check_decay_constant(decay_constant)?;

    let t_years = time_value * time_unit.years_factor();
    Ok(n0 * (-decay_constant * t_years).exp())
}

/// 核数换算为质量（g）
pub fn to_mass(nuclei: f64, atomic_weight: f64) -> f64 {
    (nuclei / AVOGADRO_NUMBER) * atomic_weight
}

/// 由衰变常数推出的半衰期（年）
pub fn half_life_years(decay_constant: f64) -> f64 {
    LN_2 / decay_constant
}

/// 衰变常数必须为正（NaN 同样拒绝）
pub(crate) fn check_decay_constant(decay_constant: f64) -> Result<()> {
    if decay_constant > 0.0 {
        Ok(())
    } else {
        Err(RadecayError::InvalidDecayConstant {
            value: decay_constant,
        })
    }
}

/// 单点计算结果
#[derive(Debug, Clone, PartialEq)]
pub struct DecayOutcome {
    /// 剩余核数 N(t)
    pub remaining_nuclei: f64,
    /// 剩余质量（g），仅质量模式
    pub remaining_mass: Option<f64>,
    pub initial_display: String,
    pub decay_constant_display: String,
    pub half_life_display: String,
    pub remaining_nuclei_display: String,
    pub remaining_mass_display: Option<String>,
}

impl DecayOutcome {
    /// 按输出模式取剩余量
    pub fn remaining(&self, mode: OutputMode) -> f64 {
        match (mode, self.remaining_mass) {
            (OutputMode::Mass, Some(mass)) => mass,
            _ => self.remaining_nuclei,
        }
    }
}

/// 计算单点衰变结果
pub fn evaluate(query: &DecayQuery) -> Result<DecayOutcome> {
    query.validate()?;

    let remaining_nuclei = compute_remaining(
        query.initial_nuclei,
        query.decay_constant,
        query.time_value,
        query.time_unit,
    )?;

    let remaining_mass = match (query.mode, query.atomic_weight) {
        (OutputMode::Mass, Some(w)) => Some(to_mass(remaining_nuclei, w)),
        _ => None,
    };

    let half_life = half_life_years(query.decay_constant);

    Ok(DecayOutcome {
        remaining_nuclei,
        remaining_mass,
        initial_display: to_exponential(query.initial_nuclei, POINT_DIGITS),
        decay_constant_display: to_exponential(query.decay_constant, POINT_DIGITS),
        half_life_display: to_exponential(half_life, POINT_DIGITS),
        remaining_nuclei_display: to_exponential(remaining_nuclei, POINT_DIGITS),
        remaining_mass_display: remaining_mass.map(|m| to_exponential(m, POINT_DIGITS)),
    })
}
