//! # 衰变曲线图表生成
//!
//! 使用 `plotters` 库绘制衰变曲线。
//!
//! ## 功能
//! - 曲线与其下方填充区域
//! - 可选标记请求的时间点
//! - 纵轴使用科学计数法刻度
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/curve.rs` 调用
//! - 使用 `decay/sampler.rs` 的 CurvePoint 结构
//! - 使用 `plotters` 渲染图表

use crate::decay::CurvePoint;
use crate::error::{RadecayError, Result};
use crate::models::{OutputMode, TimeUnit};

use plotters::prelude::*;
use std::path::Path;

fn plot_error<E: std::fmt::Debug>(e: E) -> RadecayError {
    RadecayError::Other(format!("{:?}", e))
}

/// 生成衰变曲线图
///
/// `marker` 为请求时间点的 (时间, 剩余量)，落在曲线范围内时绘制标记。
#[allow(clippy::too_many_arguments)]
pub fn generate_curve_plot(
    points: &[CurvePoint],
    marker: Option<(f64, f64)>,
    mode: OutputMode,
    unit: TimeUnit,
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if points.is_empty() {
        return Err(RadecayError::Other("No data to plot".to_string()));
    }

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve_chart(&root, points, marker, mode, unit, title)?;
        root.present().map_err(plot_error)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_curve_chart(&root, points, marker, mode, unit, title)?;
        root.present().map_err(plot_error)?;
    }
    Ok(())
}

/// 绘制曲线图的核心逻辑
fn draw_curve_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    points: &[CurvePoint],
    marker: Option<(f64, f64)>,
    mode: OutputMode,
    unit: TimeUnit,
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_error)?;

    let x_max = points
        .last()
        .map(|p| p.time)
        .filter(|t| *t > 0.0)
        .unwrap_or(1.0);
    let y_max = points
        .iter()
        .map(|p| p.value)
        .fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(plot_error)?;

    let y_desc = match mode {
        OutputMode::Nuclei => "N(t) (nuclei)".to_string(),
        OutputMode::Mass => "m(t) (g)".to_string(),
    };

    chart
        .configure_mesh()
        .x_desc(format!("t ({})", unit.label()))
        .y_desc(y_desc)
        .x_label_formatter(&|x| format!("{:.3}", x))
        .y_label_formatter(&|y| format!("{:.2e}", y))
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(plot_error)?;

    // 填充曲线下方区域
    let fill_color = RGBColor(0, 102, 204).mix(0.2);
    chart
        .draw_series(AreaSeries::new(
            points.iter().map(|p| (p.time, p.value)),
            0.0,
            fill_color,
        ))
        .map_err(plot_error)?;

    // 绘制曲线
    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.time, p.value)),
            line_color.stroke_width(2),
        ))
        .map_err(plot_error)?;

    // 标记请求时间点
    if let Some((t, value)) = marker.filter(|(t, _)| *t > 0.0 && *t <= x_max) {
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(t, 0.0), (t, value)],
                RED.stroke_width(1),
            )))
            .map_err(plot_error)?;
        chart
            .draw_series(std::iter::once(Circle::new((t, value), 5, RED.filled())))
            .map_err(plot_error)?;
        chart
            .draw_series(std::iter::once(Text::new(
                format!("{:.4e}", value),
                (t, value + y_max * 0.03),
                ("sans-serif", 14).into_font().color(&BLACK),
            )))
            .map_err(plot_error)?;
    }

    Ok(())
}
