//! # curve 子命令实现
//!
//! 采样衰变曲线并输出。
//!
//! ## 功能
//! - 终端表格（科学计数法，两位小数）
//! - 导出 CSV（全精度数值）
//! - 输出图像 (PNG/SVG)，标记请求的时间点
//!
//! ## 依赖关系
//! - 使用 `cli/curve.rs` 定义的 CurveArgs
//! - 使用 `commands/query.rs` 解析查询
//! - 使用 `decay/` 模块进行采样、导出与绘图

use crate::cli::curve::{CurveArgs, CurveOutputFormat};
use crate::commands::query;
use crate::decay::{self, engine, sampler, CurvePoint};
use crate::error::Result;
use crate::models::{DecayQuery, OutputMode, TimeUnit};
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 执行 curve 命令
pub fn execute(args: CurveArgs) -> Result<()> {
    output::print_header("Radioactive Decay Curve");

    let resolved = query::resolve(&args.query)?;
    let query = &resolved.query;

    let curve = sampler::generate_curve(query, args.steps)?;
    let horizon = curve.last().map(|p| p.time).unwrap_or_default();
    output::print_info(&format!(
        "{}: {} points over 0 - {:.4e} {}",
        query.label,
        curve.len(),
        horizon,
        query.time_unit
    ));

    if !args.no_table {
        print_curve_table(&curve, query.mode, query.time_unit);
    }

    if let Some(ref path) = args.output {
        let format = args
            .format
            .unwrap_or_else(|| guess_format_from_extension(path));
        write_output(&curve, query, path, format, &args)?;
        output::print_success(&format!("Curve saved to '{}'", path.display()));
    }

    Ok(())
}

/// 按格式写出曲线
fn write_output(
    curve: &[CurvePoint],
    query: &DecayQuery,
    path: &Path,
    format: CurveOutputFormat,
    args: &CurveArgs,
) -> Result<()> {
    match format {
        CurveOutputFormat::Csv => {
            decay::export::write_csv(curve, query.mode, query.time_unit, path)
        }
        CurveOutputFormat::Png | CurveOutputFormat::Svg => {
            let marker = if query.time_value > 0.0 {
                let outcome = engine::evaluate(query)?;
                Some((query.time_value, outcome.remaining(query.mode)))
            } else {
                None
            };
            let title = args.title.clone().unwrap_or_else(|| query.label.clone());
            decay::plot::generate_curve_plot(
                curve,
                marker,
                query.mode,
                query.time_unit,
                path,
                &title,
                args.width,
                args.height,
                format == CurveOutputFormat::Svg,
            )
        }
    }
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> CurveOutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("png") => CurveOutputFormat::Png,
        Some("svg") => CurveOutputFormat::Svg,
        _ => CurveOutputFormat::Csv,
    }
}

/// 打印曲线表格
fn print_curve_table(curve: &[CurvePoint], mode: OutputMode, unit: TimeUnit) {
    #[derive(Tabled)]
    struct CurveRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "Time")]
        time: String,
        #[tabled(rename = "Remaining")]
        value: String,
    }

    let rows: Vec<CurveRow> = curve
        .iter()
        .enumerate()
        .map(|(i, p)| CurveRow {
            index: i,
            time: p.time_display.clone(),
            value: p.value_display.clone(),
        })
        .collect();

    if !rows.is_empty() {
        let [time_header, value_header] = decay::export::curve_header(mode, unit);
        output::print_header(&format!("{} vs {}", value_header, time_header));
        println!("{}", Table::new(&rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_format_from_extension() {
        assert_eq!(
            guess_format_from_extension(Path::new("decay.PNG")),
            CurveOutputFormat::Png
        );
        assert_eq!(
            guess_format_from_extension(Path::new("out/decay.svg")),
            CurveOutputFormat::Svg
        );
        assert_eq!(
            guess_format_from_extension(Path::new("decay.csv")),
            CurveOutputFormat::Csv
        );
        assert_eq!(
            guess_format_from_extension(Path::new("decay")),
            CurveOutputFormat::Csv
        );
    }
}
