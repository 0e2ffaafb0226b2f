//! The three report figures, rendered to PNG with `plotters`.

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::errors::{LineProfileError, Result};
use crate::math::Scalar;
use crate::profile::{currents, voltages, ProfilePoint};
use crate::sweep::{mag, mag_in};

use super::config::PlotConfig;

const DISTANCE_LABEL: &str = "Distance (km)";
const VOLTAGE_LABEL: &str = "Voltage (kV)";
const CURRENT_LABEL: &str = "Current (A)";

/// One curve of a panel.
struct Curve<'a> {
    label: Option<&'a str>,
    points: Vec<(Scalar, Scalar)>,
    color: RGBColor,
    dashed: bool,
}

impl<'a> Curve<'a> {
    fn solid(x: &[Scalar], y: &[Scalar], color: RGBColor) -> Self {
        Self {
            label: None,
            points: x.iter().copied().zip(y.iter().copied()).collect(),
            color,
            dashed: false,
        }
    }

    fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    fn labelled(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }
}

/// Axes, caption and curves of one panel.
struct Panel<'a> {
    title: &'a str,
    x_desc: &'a str,
    y_desc: &'a str,
    curves: Vec<Curve<'a>>,
}

/// Distributed vs series |V| (kV) and |I| (A) side by side.
///
/// Both profiles must be sampled on the same grid.
pub fn plot_model_comparison(
    distributed: &[ProfilePoint],
    series: &[ProfilePoint],
    path: &Path,
    size: (u32, u32),
    config: &PlotConfig,
) -> Result<()> {
    if distributed.len() != series.len() {
        return Err(LineProfileError::LengthMismatch {
            left: distributed.len(),
            right: series.len(),
        });
    }
    let x: Vec<Scalar> = distributed.iter().map(|p| p.distance_km).collect();

    let voltage = Panel {
        title: "Voltage V(x)",
        x_desc: DISTANCE_LABEL,
        y_desc: VOLTAGE_LABEL,
        curves: vec![
            Curve::solid(&x, &mag_in(voltages(distributed), 1.0e3), config.distributed_color)
                .labelled("Distributed"),
            Curve::solid(&x, &mag_in(voltages(series), 1.0e3), config.series_color)
                .dashed()
                .labelled("Series only"),
        ],
    };
    let current = Panel {
        title: "Current I(x)",
        x_desc: DISTANCE_LABEL,
        y_desc: CURRENT_LABEL,
        curves: vec![
            Curve::solid(&x, &mag(currents(distributed)), config.distributed_color)
                .labelled("Distributed"),
            Curve::solid(&x, &mag(currents(series)), config.series_color)
                .dashed()
                .labelled("Series only"),
        ],
    };
    draw_side_by_side(path, size, &voltage, &current, config)
}

/// Distributed |V| (kV) and |I| (A) over a long line, side by side.
pub fn plot_long_line(points: &[ProfilePoint], path: &Path, size: (u32, u32), config: &PlotConfig) -> Result<()> {
    let x: Vec<Scalar> = points.iter().map(|p| p.distance_km).collect();
    let reach_km = x.last().copied().unwrap_or_default();
    let voltage_title = format!("Voltage V(x) over {reach_km:.0} km");
    let current_title = format!("Current I(x) over {reach_km:.0} km");

    let voltage = Panel {
        title: &voltage_title,
        x_desc: DISTANCE_LABEL,
        y_desc: VOLTAGE_LABEL,
        curves: vec![Curve::solid(&x, &mag_in(voltages(points), 1.0e3), config.distributed_color)],
    };
    let current = Panel {
        title: &current_title,
        x_desc: DISTANCE_LABEL,
        y_desc: CURRENT_LABEL,
        curves: vec![Curve::solid(&x, &mag(currents(points)), config.series_color)],
    };
    draw_side_by_side(path, size, &voltage, &current, config)
}

/// Efficiency (%) against line length.
pub fn plot_efficiency(
    lengths_km: &[Scalar],
    efficiency: &[Scalar],
    path: &Path,
    size: (u32, u32),
    config: &PlotConfig,
) -> Result<()> {
    if lengths_km.len() != efficiency.len() {
        return Err(LineProfileError::LengthMismatch {
            left: lengths_km.len(),
            right: efficiency.len(),
        });
    }
    let panel = Panel {
        title: "HV line efficiency",
        x_desc: "Line length (km)",
        y_desc: "Efficiency (%)",
        curves: vec![Curve::solid(lengths_km, efficiency, config.efficiency_color)],
    };
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    draw_panel(&root, &panel, config)?;
    root.present()?;
    Ok(())
}

fn draw_side_by_side(path: &Path, size: (u32, u32), left: &Panel<'_>, right: &Panel<'_>, config: &PlotConfig) -> Result<()> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((1, 2));
    draw_panel(&areas[0], left, config)?;
    draw_panel(&areas[1], right, config)?;
    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, panel: &Panel<'_>, config: &PlotConfig) -> Result<()> {
    let all: Vec<(Scalar, Scalar)> = panel.curves.iter().flat_map(|c| c.points.iter().copied()).collect();
    let x_range = span(all.iter().map(|p| p.0), 0.0);
    let y_range = span(all.iter().map(|p| p.1), config.y_padding);

    let font = config.font_family.as_str();
    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, (font, config.caption_size))
        .margin(config.margin)
        .x_label_area_size(config.x_label_area)
        .y_label_area_size(config.y_label_area)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_desc)
        .y_desc(panel.y_desc)
        .axis_desc_style((font, config.label_size))
        .draw()?;

    for curve in &panel.curves {
        let style = curve.color.stroke_width(config.line_width);
        let anno = if curve.dashed {
            chart.draw_series(DashedLineSeries::new(
                curve.points.iter().copied(),
                config.dash.0,
                config.dash.1,
                style,
            ))?
        } else {
            chart.draw_series(LineSeries::new(curve.points.iter().copied(), style))?
        };
        if let Some(label) = curve.label {
            let color = curve.color;
            let width = config.line_width;
            anno.label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(width)));
        }
    }

    if panel.curves.iter().any(|c| c.label.is_some()) {
        chart
            .configure_series_labels()
            .label_font((font, config.label_size))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }
    Ok(())
}

/// Axis range covering `values`, widened by `padding` times the span.
///
/// A flat series gets a band of ±`padding` around its value (±1 at zero).
pub(crate) fn span(values: impl Iterator<Item = Scalar>, padding: f64) -> Range<Scalar> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((Scalar::INFINITY, Scalar::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if lo > hi {
        return 0.0..1.0;
    }
    let width = hi - lo;
    if width == 0.0 {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * padding.max(0.01) };
        return (lo - pad)..(hi + pad);
    }
    (lo - width * padding)..(hi + width * padding)
}
