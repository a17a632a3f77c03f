//! # 时间单位
//!
//! 固定的时间单位集合及其换算到“年”的乘法因子。
//! 衰变常数一律以 1/年 表示，年是内部计算的标准单位（1 年 = 365.25 天）。
//!
//! ## 依赖关系
//! - 被 `models/query.rs`, `decay/` 使用
//! - 被 `commands/` 用于解析 `--unit` 参数

use std::fmt;

/// 一年的天数（儒略年）
pub const DAYS_PER_YEAR: f64 = 365.25;

/// 时间单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Years,
}

impl TimeUnit {
    /// 全部单位，按从小到大排列
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Years,
    ];

    /// 换算到年的乘法因子
    pub fn years_factor(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0 / (DAYS_PER_YEAR * 24.0 * 60.0 * 60.0),
            TimeUnit::Minutes => 1.0 / (DAYS_PER_YEAR * 24.0 * 60.0),
            TimeUnit::Hours => 1.0 / (DAYS_PER_YEAR * 24.0),
            TimeUnit::Days => 1.0 / DAYS_PER_YEAR,
            TimeUnit::Years => 1.0,
        }
    }

    /// 显示名称（用于表头和 CSV 列名）
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "segundos",
            TimeUnit::Minutes => "minutos",
            TimeUnit::Hours => "horas",
            TimeUnit::Days => "dias",
            TimeUnit::Years => "anos",
        }
    }

    /// 解析单位名称（大小写不敏感，接受葡萄牙语、英语名称及常见缩写）
    pub fn parse(name: &str) -> Option<TimeUnit> {
        match name.trim().to_lowercase().as_str() {
            "segundos" | "segundo" | "seconds" | "second" | "sec" | "s" => Some(TimeUnit::Seconds),
            "minutos" | "minuto" | "minutes" | "minute" | "min" => Some(TimeUnit::Minutes),
            "horas" | "hora" | "hours" | "hour" | "h" => Some(TimeUnit::Hours),
            "dias" | "dia" | "days" | "day" | "d" => Some(TimeUnit::Days),
            "anos" | "ano" | "years" | "year" | "yr" | "y" | "a" => Some(TimeUnit::Years),
            _ => None,
        }
    }

    /// 宽松解析：无法识别的单位按“年”处理（因子为 1）
    ///
    /// 返回值第二项表示名称是否被识别，调用方可据此给出警告。
    pub fn parse_lenient(name: &str) -> (TimeUnit, bool) {
        match TimeUnit::parse(name) {
            Some(unit) => (unit, true),
            None => (TimeUnit::Years, false),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_factor() {
        assert_eq!(TimeUnit::Years.years_factor(), 1.0);
        assert!((TimeUnit::Days.years_factor() * 365.25 - 1.0).abs() < 1e-15);
        assert!((TimeUnit::Seconds.years_factor() * 31_557_600.0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_factors_increase_with_unit_size() {
        for pair in TimeUnit::ALL.windows(2) {
            assert!(pair[0].years_factor() < pair[1].years_factor());
        }
    }

    #[test]
    fn test_parse_accepts_labels_and_aliases() {
        for unit in TimeUnit::ALL {
            assert_eq!(TimeUnit::parse(unit.label()), Some(unit));
        }
        assert_eq!(TimeUnit::parse("Days"), Some(TimeUnit::Days));
        assert_eq!(TimeUnit::parse(" h "), Some(TimeUnit::Hours));
        assert_eq!(TimeUnit::parse("fortnights"), None);
    }

    #[test]
    fn test_unknown_unit_is_treated_as_years() {
        let (unit, recognized) = TimeUnit::parse_lenient("quinzenas");
        assert_eq!(unit, TimeUnit::Years);
        assert!(!recognized);
        assert_eq!(unit.years_factor(), 1.0);

        let (unit, recognized) = TimeUnit::parse_lenient("minutos");
        assert_eq!(unit, TimeUnit::Minutes);
        assert!(recognized);
    }
}
