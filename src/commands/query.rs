//! # 查询解析
//!
//! 将命令行参数解析为 `DecayQuery`：选择同位素或自定义常数、
//! 宽松解析时间单位、确定初始数量。
//!
//! ## 依赖关系
//! - 被 `commands/calc.rs`, `commands/curve.rs` 调用
//! - 使用 `cli/query.rs` 定义的 QueryArgs
//! - 使用 `decay/catalog.rs` 查找同位素

use crate::cli::query::QueryArgs;
use crate::decay::{catalog, AVOGADRO_NUMBER};
use crate::error::Result;
use crate::models::{DecayParameters, DecayQuery, InitialQuantity, IsotopeRecord, TimeUnit};
use crate::utils::output;

/// 解析后的查询
pub struct ResolvedQuery {
    pub query: DecayQuery,
    /// 来自同位素表的条目（自定义同位素为 None）
    pub record: Option<&'static IsotopeRecord>,
}

/// 由命令行参数构造查询
pub fn resolve(args: &QueryArgs) -> Result<ResolvedQuery> {
    let (params, record) = resolve_parameters(args)?;

    let (time_unit, recognized) = TimeUnit::parse_lenient(&args.unit);
    if !recognized {
        let known: Vec<&str> = TimeUnit::ALL.iter().map(|u| u.label()).collect();
        output::print_warning(&format!(
            "Unknown time unit '{}' (known: {}), treating the time as {}",
            args.unit,
            known.join(", "),
            time_unit
        ));
    }

    let initial = match args.mass {
        Some(grams) => InitialQuantity::Mass(grams),
        None => InitialQuantity::Nuclei(args.nuclei.unwrap_or(AVOGADRO_NUMBER)),
    };

    let query = DecayQuery::new(&params, initial, args.time, time_unit)?;
    Ok(ResolvedQuery { query, record })
}

/// 选择衰变参数：同位素表条目（可覆盖常数）或自定义常数
fn resolve_parameters(
    args: &QueryArgs,
) -> Result<(DecayParameters, Option<&'static IsotopeRecord>)> {
    let (mut params, record) = match (&args.isotope, args.lambda) {
        (None, Some(lambda)) => (DecayParameters::custom(lambda, None), None),
        (name, lambda) => {
            let record = catalog::lookup(name.as_deref().unwrap_or(catalog::DEFAULT_ISOTOPE))?;
            let mut params = DecayParameters::from_record(record);
            if let Some(lambda) = lambda {
                params = params.with_decay_constant(lambda);
            }
            (params, Some(record))
        }
    };

    if let Some(weight) = args.atomic_weight {
        params = params.with_atomic_weight(weight);
    }

    Ok((params, record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RadecayError;
    use crate::models::OutputMode;

    fn args() -> QueryArgs {
        QueryArgs {
            isotope: None,
            lambda: None,
            atomic_weight: None,
            time: 100.0,
            unit: "anos".to_string(),
            nuclei: None,
            mass: None,
        }
    }

    #[test]
    fn test_defaults_to_cesium_and_one_mole() {
        let resolved = resolve(&args()).unwrap();
        assert_eq!(resolved.query.label, catalog::DEFAULT_ISOTOPE);
        assert_eq!(resolved.query.initial_nuclei, AVOGADRO_NUMBER);
        assert_eq!(resolved.query.mode, OutputMode::Nuclei);
        assert!(resolved.record.is_some());
    }

    #[test]
    fn test_custom_isotope() {
        let resolved = resolve(&QueryArgs {
            lambda: Some(0.5),
            atomic_weight: Some(10.0),
            mass: Some(1.0),
            ..args()
        })
        .unwrap();
        assert_eq!(resolved.query.label, "custom");
        assert_eq!(resolved.query.decay_constant, 0.5);
        assert_eq!(resolved.query.mode, OutputMode::Mass);
        assert!(resolved.record.is_none());
    }

    #[test]
    fn test_custom_isotope_without_weight_rejects_mass() {
        let result = resolve(&QueryArgs {
            lambda: Some(0.5),
            mass: Some(1.0),
            ..args()
        });
        assert!(matches!(result, Err(RadecayError::InvalidAtomicWeight { value: None })));
    }

    #[test]
    fn test_lambda_override_keeps_catalog_weight() {
        let resolved = resolve(&QueryArgs {
            isotope: Some("Co-60".to_string()),
            lambda: Some(0.2),
            ..args()
        })
        .unwrap();
        assert_eq!(resolved.query.decay_constant, 0.2);
        assert_eq!(resolved.query.atomic_weight, Some(59.933822));
    }

    #[test]
    fn test_unknown_unit_is_years() {
        let resolved = resolve(&QueryArgs {
            unit: "eons".to_string(),
            ..args()
        })
        .unwrap();
        assert_eq!(resolved.query.time_unit, TimeUnit::Years);
    }

    #[test]
    fn test_unknown_isotope() {
        let result = resolve(&QueryArgs {
            isotope: Some("Unobtainium-1".to_string()),
            ..args()
        });
        assert!(matches!(result, Err(RadecayError::IsotopeNotFound { .. })));
    }
}
