//! # 同位素数据模型
//!
//! - `IsotopeRecord`: 同位素表中的不可变条目
//! - `DecayParameters`: 一次计算实际使用的物理常数，可来自同位素表，
//!   也可由调用方直接给出（自定义同位素）
//!
//! ## 依赖关系
//! - 被 `decay/catalog.rs` 用于定义同位素表
//! - 被 `models/query.rs`, `commands/` 使用

use crate::models::TimeUnit;

/// 同位素表条目
#[derive(Debug, Clone, PartialEq)]
pub struct IsotopeRecord {
    /// 名称（如 "Césio-137"）
    pub name: &'static str,
    /// 核素符号（如 "Cs-137"），可作为查找别名
    pub symbol: &'static str,
    /// 衰变常数 λ（1/年），衰变计算的唯一依据
    pub decay_constant: f64,
    /// 半衰期，仅用于显示
    pub half_life: f64,
    /// 半衰期的显示单位
    pub half_life_unit: TimeUnit,
    /// 原子量（g/mol），缺失时不支持质量模式
    pub atomic_weight: Option<f64>,
}

impl IsotopeRecord {
    /// 是否支持按质量计算
    pub fn supports_mass(&self) -> bool {
        matches!(self.atomic_weight, Some(w) if w > 0.0)
    }
}

/// 衰变计算参数
#[derive(Debug, Clone, PartialEq)]
pub struct DecayParameters {
    /// 显示标签（同位素名称或 "custom"）
    pub label: String,
    /// 衰变常数 λ（1/年）
    pub decay_constant: f64,
    /// 原子量（g/mol）
    pub atomic_weight: Option<f64>,
}

impl DecayParameters {
    /// 自定义同位素的标签
    pub const CUSTOM_LABEL: &'static str = "custom";

    /// 从同位素表条目构造
    pub fn from_record(record: &IsotopeRecord) -> Self {
        DecayParameters {
            label: record.name.to_string(),
            decay_constant: record.decay_constant,
            atomic_weight: record.atomic_weight,
        }
    }

    /// 不经同位素表，直接给定常数
    pub fn custom(decay_constant: f64, atomic_weight: Option<f64>) -> Self {
        DecayParameters {
            label: Self::CUSTOM_LABEL.to_string(),
            decay_constant,
            atomic_weight,
        }
    }

    /// 覆盖衰变常数
    pub fn with_decay_constant(mut self, decay_constant: f64) -> Self {
        self.decay_constant = decay_constant;
        self
    }

    /// 覆盖原子量
    pub fn with_atomic_weight(mut self, atomic_weight: f64) -> Self {
        self.atomic_weight = Some(atomic_weight);
        self
    }
}
