//! # 同位素常数表
//!
//! 同位素名称到物理常数（衰变常数、半衰期、原子量）的静态映射。
//! 衰变常数是唯一的计算依据，半衰期只用于显示。
//!
//! ## 查找顺序
//! 1. 名称精确匹配
//! 2. 名称大小写不敏感匹配
//! 3. 核素符号匹配（如 "Cs-137"）
//! 4. 去除重音后的名称匹配（如 "cesio-137"）
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 纯静态数据，无外部依赖

use crate::error::{RadecayError, Result};
use crate::models::{IsotopeRecord, TimeUnit};

use std::collections::HashMap;
use std::sync::LazyLock;

/// 未指定同位素时使用的默认条目
pub const DEFAULT_ISOTOPE: &str = "Césio-137";

/// 同位素表（规范顺序）
pub static ISOTOPES: [IsotopeRecord; 6] = [
    IsotopeRecord {
        name: "Césio-137",
        symbol: "Cs-137",
        decay_constant: 0.02298,
        half_life: 30.17,
        half_life_unit: TimeUnit::Years,
        atomic_weight: Some(136.907089),
    },
    IsotopeRecord {
        name: "Carbono-14",
        symbol: "C-14",
        decay_constant: 1.20968e-4,
        half_life: 5730.0,
        half_life_unit: TimeUnit::Years,
        atomic_weight: Some(14.0032417),
    },
    IsotopeRecord {
        name: "Tório-232",
        symbol: "Th-232",
        decay_constant: 4.95105e-11,
        half_life: 1.4e10,
        half_life_unit: TimeUnit::Years,
        atomic_weight: Some(232.038055),
    },
    IsotopeRecord {
        name: "Cobalto-60",
        symbol: "Co-60",
        decay_constant: 0.1315,
        half_life: 5.27,
        half_life_unit: TimeUnit::Years,
        atomic_weight: Some(59.933822),
    },
    IsotopeRecord {
        name: "Iodo-131",
        symbol: "I-131",
        decay_constant: 31.55,
        half_life: 8.02,
        half_life_unit: TimeUnit::Days,
        atomic_weight: Some(130.906124),
    },
    IsotopeRecord {
        name: "Urânio-238",
        symbol: "U-238",
        decay_constant: 1.551e-10,
        half_life: 4.468e9,
        half_life_unit: TimeUnit::Years,
        atomic_weight: Some(238.050788),
    },
];

/// 按名称索引
static BY_NAME: LazyLock<HashMap<&'static str, &'static IsotopeRecord>> =
    LazyLock::new(|| ISOTOPES.iter().map(|r| (r.name, r)).collect());

/// 按规范顺序枚举全部条目
pub fn entries() -> &'static [IsotopeRecord] {
    &ISOTOPES
}

/// 查找同位素
pub fn lookup(name: &str) -> Result<&'static IsotopeRecord> {
    let name = name.trim();

    // 精确匹配
    if let Some(record) = BY_NAME.get(name).copied() {
        return Ok(record);
    }

    let lower = name.to_lowercase();
    let folded = fold_accents(&lower);

    ISOTOPES
        .iter()
        .find(|r| r.name.to_lowercase() == lower)
        .or_else(|| ISOTOPES.iter().find(|r| r.symbol.to_lowercase() == lower))
        .or_else(|| {
            ISOTOPES
                .iter()
                .find(|r| fold_accents(&r.name.to_lowercase()) == folded)
        })
        .ok_or_else(|| RadecayError::IsotopeNotFound {
            name: name.to_string(),
        })
}

/// 去除葡萄牙语常见重音符号
fn fold_accents(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
