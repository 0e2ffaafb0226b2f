//! Shared styling for the report figures.

use plotters::style::{RGBColor, BLUE, GREEN, RED};

/// Fonts, margins and line styles applied to every panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Font family for captions and axis labels.
    pub font_family: String,
    /// Caption size in pixels.
    pub caption_size: u32,
    /// Axis description size in pixels.
    pub label_size: u32,
    /// Margin around each panel in pixels.
    pub margin: u32,
    /// Height reserved for the x axis labels.
    pub x_label_area: u32,
    /// Width reserved for the y axis labels.
    pub y_label_area: u32,
    /// Stroke width of data curves.
    pub line_width: u32,
    /// Dash length and gap for dashed curves.
    pub dash: (u32, u32),
    /// Fraction of the data span added above and below each curve.
    pub y_padding: f64,
    /// Colour of the distributed-model curves.
    pub distributed_color: RGBColor,
    /// Colour of the series-model curves.
    pub series_color: RGBColor,
    /// Colour of the efficiency curve.
    pub efficiency_color: RGBColor,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            caption_size: 22,
            label_size: 16,
            margin: 12,
            x_label_area: 45,
            y_label_area: 65,
            line_width: 2,
            dash: (8, 6),
            y_padding: 0.05,
            distributed_color: BLUE,
            series_color: RED,
            efficiency_color: GREEN,
        }
    }
}
