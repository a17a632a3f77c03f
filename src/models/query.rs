//! # 衰变查询
//!
//! 一次计算的瞬态输入：已解析的初始核数、衰变常数、经过时间及其单位、输出模式。
//!
//! ## 不变量
//! 质量模式要求原子量存在且为正，否则在计算之前即被拒绝。
//!
//! ## 依赖关系
//! - 被 `decay/engine.rs`, `decay/sampler.rs`, `commands/` 使用
//! - 使用 `decay/engine.rs` 解析初始数量

use crate::decay::engine;
use crate::error::{RadecayError, Result};
use crate::models::{DecayParameters, TimeUnit};

/// 初始数量：直接给出核数，或给出质量（克）
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitialQuantity {
    Nuclei(f64),
    Mass(f64),
}

impl InitialQuantity {
    /// 输入方式同时决定输出方式
    pub fn output_mode(&self) -> OutputMode {
        match self {
            InitialQuantity::Nuclei(_) => OutputMode::Nuclei,
            InitialQuantity::Mass(_) => OutputMode::Mass,
        }
    }
}

/// 输出模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// 剩余核数
    Nuclei,
    /// 剩余质量（g）
    Mass,
}

impl OutputMode {
    /// CSV 数值列表头
    pub fn value_header(self) -> &'static str {
        match self {
            OutputMode::Nuclei => "Núcleos Restantes",
            OutputMode::Mass => "Massa Restante (g)",
        }
    }
}

/// 衰变查询
#[derive(Debug, Clone, PartialEq)]
pub struct DecayQuery {
    /// 同位素名称或 "custom"
    pub label: String,
    /// 初始核数 N0
    pub initial_nuclei: f64,
    /// 衰变常数 λ（1/年）
    pub decay_constant: f64,
    /// 经过时间（原始单位）
    pub time_value: f64,
    /// 经过时间的单位
    pub time_unit: TimeUnit,
    /// 输出模式
    pub mode: OutputMode,
    /// 原子量（g/mol）
    pub atomic_weight: Option<f64>,
}

impl DecayQuery {
    /// 解析初始数量并构造查询
    pub fn new(
        params: &DecayParameters,
        initial: InitialQuantity,
        time_value: f64,
        time_unit: TimeUnit,
    ) -> Result<Self> {
        let initial_nuclei = engine::resolve_initial_quantity(initial, params.atomic_weight)?;

        let query = DecayQuery {
            label: params.label.clone(),
            initial_nuclei,
            decay_constant: params.decay_constant,
            time_value,
            time_unit,
            mode: initial.output_mode(),
            atomic_weight: params.atomic_weight,
        };
        query.validate()?;
        Ok(query)
    }

    /// 校验质量模式的原子量
    pub fn validate(&self) -> Result<()> {
        if self.mode == OutputMode::Mass && !matches!(self.atomic_weight, Some(w) if w > 0.0) {
            return Err(RadecayError::InvalidAtomicWeight {
                value: self.atomic_weight,
            });
        }
        Ok(())
    }
}
