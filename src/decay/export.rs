//! # 衰变数据导出
//!
//! 导出衰变曲线与同位素表到 CSV。
//!
//! ## 支持格式
//! - 曲线 CSV: `Tempo (<单位>),<Massa Restante (g)|Núcleos Restantes>`，
//!   每行为全精度原始数值（不是显示用的舍入字符串）
//! - 同位素表 CSV: 名称、符号、λ、半衰期、单位、原子量
//!
//! ## 依赖关系
//! - 被 `commands/curve.rs`, `commands/isotopes.rs` 调用
//! - 使用 `decay/sampler.rs` 的 CurvePoint 结构
//! - 使用 `csv` 库写入 CSV，`serde` 序列化同位素表行

use crate::decay::format::raw_number;
use crate::decay::CurvePoint;
use crate::error::{RadecayError, Result};
use crate::models::{IsotopeRecord, OutputMode, TimeUnit};

use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// 曲线 CSV 的表头
pub fn curve_header(mode: OutputMode, unit: TimeUnit) -> [String; 2] {
    [
        format!("Tempo ({})", unit.label()),
        mode.value_header().to_string(),
    ]
}

fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder.terminator(csv::Terminator::Any(b'\n'));
    builder
}

fn write_curve_rows<W: io::Write>(
    wtr: &mut csv::Writer<W>,
    points: &[CurvePoint],
    mode: OutputMode,
    unit: TimeUnit,
) -> Result<()> {
    wtr.write_record(curve_header(mode, unit))?;
    for point in points {
        wtr.write_record([raw_number(point.time), raw_number(point.value)])?;
    }
    Ok(())
}

/// 将曲线序列化为 CSV 文本
pub fn serialize_csv(points: &[CurvePoint], mode: OutputMode, unit: TimeUnit) -> Result<String> {
    let mut wtr = writer_builder().from_writer(Vec::new());
    write_curve_rows(&mut wtr, points, mode, unit)?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| RadecayError::Other(format!("Failed to finish CSV buffer: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| RadecayError::Other(e.to_string()))
}

/// 将曲线写入 CSV 文件
pub fn write_csv(
    points: &[CurvePoint],
    mode: OutputMode,
    unit: TimeUnit,
    output_path: &Path,
) -> Result<()> {
    let text = serialize_csv(points, mode, unit)?;
    fs::write(output_path, text).map_err(|e| RadecayError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

/// 同位素表 CSV 行
#[derive(Debug, Serialize)]
struct CatalogRow<'a> {
    name: &'a str,
    symbol: &'a str,
    decay_constant_per_year: f64,
    half_life: f64,
    half_life_unit: &'static str,
    atomic_weight_g_mol: Option<f64>,
}

impl<'a> From<&'a IsotopeRecord> for CatalogRow<'a> {
    fn from(record: &'a IsotopeRecord) -> Self {
        CatalogRow {
            name: record.name,
            symbol: record.symbol,
            decay_constant_per_year: record.decay_constant,
            half_life: record.half_life,
            half_life_unit: record.half_life_unit.label(),
            atomic_weight_g_mol: record.atomic_weight,
        }
    }
}

fn write_catalog_rows<W: io::Write>(
    wtr: &mut csv::Writer<W>,
    records: &[IsotopeRecord],
) -> Result<()> {
    for record in records {
        wtr.serialize(CatalogRow::from(record))?;
    }
    Ok(())
}

/// 将同位素表写入 CSV 文件
pub fn write_catalog_csv(records: &[IsotopeRecord], output_path: &Path) -> Result<()> {
    let mut wtr = writer_builder().from_path(output_path)?;
    write_catalog_rows(&mut wtr, records)?;

    wtr.flush().map_err(|e| RadecayError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decay::{catalog, sampler};
    use crate::models::{DecayParameters, DecayQuery, InitialQuantity};

    fn point(time: f64, value: f64) -> CurvePoint {
        CurvePoint {
            time,
            value,
            time_display: String::new(),
            value_display: String::new(),
        }
    }

    #[test]
    fn test_serialize_nuclei_curve() {
        let points = vec![point(0.0, 6.02214076e23), point(2.5, 1.5e23)];
        let text = serialize_csv(&points, OutputMode::Nuclei, TimeUnit::Years).unwrap();
        assert_eq!(
            text,
            "Tempo (anos),Núcleos Restantes\n0,6.02214076e23\n2.5,1.5e23\n"
        );
    }

    #[test]
    fn test_serialize_mass_curve() {
        let points = vec![point(0.0, 1.0), point(12.5, 0.25)];
        let text = serialize_csv(&points, OutputMode::Mass, TimeUnit::Days).unwrap();
        assert_eq!(text, "Tempo (dias),Massa Restante (g)\n0,1\n12.5,0.25\n");
    }

    #[test]
    fn test_serialize_keeps_full_precision() {
        let params = DecayParameters::from_record(catalog::lookup("Césio-137").unwrap());
        let query =
            DecayQuery::new(&params, InitialQuantity::Nuclei(1e23), 100.0, TimeUnit::Years).unwrap();
        let curve = sampler::generate_curve(&query, 10).unwrap();
        let text = serialize_csv(&curve, query.mode, query.time_unit).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), curve.len() + 1);
        for (line, point) in lines[1..].iter().zip(&curve) {
            let (t, v) = line.split_once(',').unwrap();
            assert_eq!(t.parse::<f64>().unwrap(), point.time);
            assert_eq!(v.parse::<f64>().unwrap(), point.value);
        }
    }

    #[test]
    fn test_write_csv_matches_serialized_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decay.csv");
        let points = vec![point(0.0, 10.0), point(1.0, 5.0)];

        write_csv(&points, OutputMode::Nuclei, TimeUnit::Hours, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            serialize_csv(&points, OutputMode::Nuclei, TimeUnit::Hours).unwrap()
        );
    }

    #[test]
    fn test_write_csv_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("decay.csv");
        let points = vec![point(0.0, 1.0)];

        let err = write_csv(&points, OutputMode::Mass, TimeUnit::Years, &path).unwrap_err();
        assert!(matches!(err, RadecayError::FileWriteError { .. }));
    }

    #[test]
    fn test_write_catalog_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("isotopes.csv");

        write_catalog_csv(catalog::entries(), &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();

        assert_eq!(
            lines.next(),
            Some("name,symbol,decay_constant_per_year,half_life,half_life_unit,atomic_weight_g_mol")
        );
        assert_eq!(
            lines.next(),
            Some("Césio-137,Cs-137,0.02298,30.17,anos,136.907089")
        );
        assert_eq!(lines.count(), catalog::entries().len() - 1);
    }
}
