//! # calc 子命令实现
//!
//! 计算经过给定时间后的剩余核数（质量模式下同时给出剩余质量），
//! 以表格形式输出计算报告。
//!
//! ## 依赖关系
//! - 使用 `cli/calc.rs` 定义的 CalcArgs
//! - 使用 `commands/query.rs` 解析查询
//! - 使用 `decay/engine.rs` 计算

use crate::cli::calc::CalcArgs;
use crate::commands::query::{self, ResolvedQuery};
use crate::decay::{engine, DecayOutcome};
use crate::error::Result;
use crate::models::OutputMode;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 报告行
#[derive(Debug, Clone, Tabled)]
struct ReportRow {
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl ReportRow {
    fn new(quantity: &str, value: String) -> Self {
        ReportRow {
            quantity: quantity.to_string(),
            value,
        }
    }
}

/// 执行 calc 命令
pub fn execute(args: CalcArgs) -> Result<()> {
    output::print_header("Radioactive Decay Calculation");

    let resolved = query::resolve(&args.query)?;
    let outcome = engine::evaluate(&resolved.query)?;

    let table = Table::new(report_rows(&resolved, &outcome));
    println!("{}", table);

    output::print_success(&format!(
        "{}: {} remaining after {} {}",
        resolved.query.label,
        match resolved.query.mode {
            OutputMode::Mass => format!(
                "{} g",
                outcome.remaining_mass_display.as_deref().unwrap_or("-")
            ),
            OutputMode::Nuclei => format!("{} nuclei", outcome.remaining_nuclei_display),
        },
        resolved.query.time_value,
        resolved.query.time_unit
    ));

    Ok(())
}

/// 生成报告行
fn report_rows(resolved: &ResolvedQuery, outcome: &DecayOutcome) -> Vec<ReportRow> {
    let query = &resolved.query;
    let mut rows = vec![ReportRow::new("Isotope", query.label.clone())];

    if let Some(record) = resolved.record {
        rows.push(ReportRow::new(
            "Half-life (catalog)",
            format!("{} {}", record.half_life, record.half_life_unit),
        ));
    }

    rows.push(ReportRow::new(
        "N0 (nuclei)",
        outcome.initial_display.clone(),
    ));
    rows.push(ReportRow::new(
        "λ (1/anos)",
        outcome.decay_constant_display.clone(),
    ));
    rows.push(ReportRow::new(
        "Time",
        format!("{} {}", query.time_value, query.time_unit),
    ));
    rows.push(ReportRow::new(
        "Half-life from λ (anos)",
        outcome.half_life_display.clone(),
    ));

    if let Some(ref mass) = outcome.remaining_mass_display {
        rows.push(ReportRow::new("Remaining mass (g)", mass.clone()));
        rows.push(ReportRow::new(
            "Equivalent nuclei",
            outcome.remaining_nuclei_display.clone(),
        ));
    } else {
        rows.push(ReportRow::new(
            "Remaining N(t) (nuclei)",
            outcome.remaining_nuclei_display.clone(),
        ));
    }

    rows
}
