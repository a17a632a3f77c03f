//! # 数值显示格式
//!
//! - `to_exponential`: 固定小数位的科学计数法（如 `1.0049e+22`），用于结果显示
//! - `raw_number`: 全精度数值文本，用于 CSV 导出，保证可无损解析回 `f64`
//!
//! ## 依赖关系
//! - 被 `decay/engine.rs`, `decay/sampler.rs`, `decay/export.rs` 调用

/// 单点结果的小数位数
pub const POINT_DIGITS: usize = 4;

/// 曲线/表格的小数位数
pub const CURVE_DIGITS: usize = 2;

/// 固定小数位的科学计数法，指数始终带符号
pub fn to_exponential(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let s = format!("{:.*e}", digits, value);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}

/// 全精度数值文本
///
/// 数量级在 `[1e-6, 1e21)` 内用普通十进制，否则用最短往返的科学计数法。
pub fn raw_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if value.is_finite() && (1e-6..1e21).contains(&magnitude) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(1.00486e22, 4), "1.0049e+22");
        assert_eq!(to_exponential(6.02214076e23, 2), "6.02e+23");
        assert_eq!(to_exponential(0.000123, 2), "1.23e-4");
        assert_eq!(to_exponential(0.0, 2), "0.00e+0");
        assert_eq!(to_exponential(-2.5, 1), "-2.5e+0");
    }

    #[test]
    fn test_raw_number() {
        assert_eq!(raw_number(0.0), "0");
        assert_eq!(raw_number(-0.0), "0");
        assert_eq!(raw_number(2.5), "2.5");
        assert_eq!(raw_number(100.0), "100");
        assert_eq!(raw_number(6.02214076e23), "6.02214076e23");
        assert_eq!(raw_number(1e-9), "1e-9");
    }

    #[test]
    fn test_raw_number_round_trips() {
        for v in [1.0 / 3.0, 6.02214076e23 * (-2.298f64).exp(), 1.234e-12, 42.0] {
            let parsed: f64 = raw_number(v).parse().unwrap();
            assert_eq!(parsed, v);
        }
    }
}
