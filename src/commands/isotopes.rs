//! # isotopes 子命令实现
//!
//! 列出同位素表，可选导出为 CSV。
//! 原子量缺失的条目不支持质量模式。
//!
//! ## 依赖关系
//! - 使用 `cli/isotopes.rs` 定义的 IsotopesArgs
//! - 使用 `decay/catalog.rs`, `decay/export.rs`

use crate::cli::isotopes::IsotopesArgs;
use crate::decay::{catalog, export};
use crate::error::Result;
use crate::models::IsotopeRecord;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 同位素表行
#[derive(Debug, Clone, Tabled)]
struct IsotopeRow {
    #[tabled(rename = "Isotope")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "λ (1/anos)")]
    decay_constant: String,
    #[tabled(rename = "Half-life")]
    half_life: String,
    #[tabled(rename = "Atomic weight (g/mol)")]
    atomic_weight: String,
    #[tabled(rename = "Mass mode")]
    mass_mode: String,
}

impl From<&IsotopeRecord> for IsotopeRow {
    fn from(record: &IsotopeRecord) -> Self {
        IsotopeRow {
            name: record.name.to_string(),
            symbol: record.symbol.to_string(),
            decay_constant: format!("{:e}", record.decay_constant),
            half_life: format!("{} {}", record.half_life, record.half_life_unit),
            atomic_weight: record
                .atomic_weight
                .map(|w| w.to_string())
                .unwrap_or_else(|| "-".to_string()),
            mass_mode: if record.supports_mass() { "yes" } else { "no" }.to_string(),
        }
    }
}

/// 执行 isotopes 命令
pub fn execute(args: IsotopesArgs) -> Result<()> {
    output::print_header("Isotope Catalog");

    let records = catalog::entries();
    let rows: Vec<IsotopeRow> = records.iter().map(IsotopeRow::from).collect();
    println!("{}", Table::new(&rows));

    if let Some(ref path) = args.csv {
        export::write_catalog_csv(records, path)?;
        output::print_success(&format!(
            "Catalog ({} isotopes) saved to '{}'",
            records.len(),
            path.display()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_record() {
        let row = IsotopeRow::from(catalog::lookup("Iodo-131").unwrap());
        assert_eq!(row.symbol, "I-131");
        assert_eq!(row.decay_constant, "3.155e1");
        assert_eq!(row.half_life, "8.02 dias");
        assert_eq!(row.mass_mode, "yes");
    }
}
