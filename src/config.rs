//! Plot configuration
//!
//! [`PlotConfig`] holds the constructor-level appearance and axis
//! settings of a [`LevelPlot`](crate::plot::LevelPlot). Every setting a
//! single render call may want to vary has a per-call override slot in
//! [`RenderOptions`].

use serde::{Deserialize, Serialize};

/// Appearance and axis configuration for a level plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Overall figure size in logical points (width, height)
    pub figure_size: (f32, f32),

    /// Line width of plotted segments
    pub line_width: f32,

    /// Prefix prepended to every panel title
    pub chart_title_prefix: String,

    /// Title of the shared horizontal axis, shown under the bottom panel
    pub x_axis_title: String,

    /// Title of each panel's vertical axis
    pub y_axis_title: String,

    /// Explicit horizontal range; `None` derives the range from the data
    pub x_axis_range: Option<(f64, f64)>,

    /// Whether to draw grid lines
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            figure_size: (960.0, 800.0),
            line_width: 3.0,
            chart_title_prefix: String::new(),
            x_axis_title: "Frequency".to_string(),
            y_axis_title: "Level".to_string(),
            x_axis_range: None,
            show_grid: true,
        }
    }
}

impl PlotConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply per-call overrides, producing the effective configuration
    pub fn resolve(&self, options: &RenderOptions) -> Self {
        Self {
            figure_size: self.figure_size,
            line_width: self.line_width,
            chart_title_prefix: options
                .chart_title_prefix
                .clone()
                .unwrap_or_else(|| self.chart_title_prefix.clone()),
            x_axis_title: options
                .x_axis_title
                .clone()
                .unwrap_or_else(|| self.x_axis_title.clone()),
            y_axis_title: options
                .y_axis_title
                .clone()
                .unwrap_or_else(|| self.y_axis_title.clone()),
            x_axis_range: options.x_axis_range.or(self.x_axis_range),
            show_grid: self.show_grid,
        }
    }
}

/// Per-call overrides for a single render
///
/// Unset fields fall back to the [`PlotConfig`] values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Override the panel title prefix
    pub chart_title_prefix: Option<String>,

    /// Override the horizontal axis title
    pub x_axis_title: Option<String>,

    /// Override the vertical axis title
    pub y_axis_title: Option<String>,

    /// Override the horizontal range
    pub x_axis_range: Option<(f64, f64)>,
}
