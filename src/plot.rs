//! The level plot renderer
//!
//! [`LevelPlot`] turns a [`SegmentTable`] into a renderable [`Figure`]:
//! the table is validated, partitioned into panels, each panel's
//! segments are sorted and displaced by the overlap layout, and every
//! legend is resolved to a stable color.
//!
//! Color state lives on the renderer instance, so repeated calls keep
//! assigning the same colors to the same legends. The instance is not
//! thread-safe; give each thread its own renderer or synchronize
//! externally.

use crate::color::ColorAssigner;
use crate::config::{PlotConfig, RenderOptions};
use crate::error::Result;
use crate::figure::{Figure, Panel, PlacedSegment};
use crate::layout::{compute_offsets, partition_by_chart, sort_by_start};
use crate::types::{Segment, SegmentTable};

/// Margin added on both sides of the auto-computed horizontal range
const X_MARGIN: f64 = 1.0;

/// Renderer for signal-level timeline charts
#[derive(Debug, Clone, Default)]
pub struct LevelPlot {
    config: PlotConfig,
    colors: ColorAssigner,
}

impl LevelPlot {
    /// Create a renderer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given configuration
    pub fn with_config(config: PlotConfig) -> Self {
        Self {
            config,
            colors: ColorAssigner::default(),
        }
    }

    /// The renderer's configuration
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Mutable access to the configuration
    pub fn config_mut(&mut self) -> &mut PlotConfig {
        &mut self.config
    }

    /// Render a table into a figure using the configured settings
    pub fn plot(&mut self, table: &SegmentTable) -> Result<Figure> {
        self.plot_with(table, &RenderOptions::default())
    }

    /// Render a table into a figure with per-call overrides
    ///
    /// Validation failures abort the call; no partial figure is produced.
    pub fn plot_with(&mut self, table: &SegmentTable, options: &RenderOptions) -> Result<Figure> {
        let config = self.config.resolve(options);
        let segments = table.validate()?;

        let x_range = match config.x_axis_range {
            Some(range) => range,
            None => auto_x_range(&segments),
        };

        let mut panels = Vec::new();
        for (chart, mut rows) in partition_by_chart(segments) {
            sort_by_start(&mut rows);
            let offsets = compute_offsets(&rows);

            let placed: Vec<PlacedSegment> = rows
                .into_iter()
                .zip(offsets)
                .map(|(segment, level_offset)| PlacedSegment {
                    color: self.colors.color_for(&segment.legend),
                    legend: segment.legend,
                    start: segment.start,
                    stop: segment.stop,
                    level: segment.level,
                    level_offset,
                })
                .collect();

            let y_range = Panel::padded_y_range(placed.iter().map(|s| s.y()));
            panels.push(Panel {
                title: format!("{}{}", config.chart_title_prefix, chart),
                chart,
                segments: placed,
                y_range,
            });
        }

        tracing::info!(
            "Built figure with {} panel(s) over x range {:?}",
            panels.len(),
            x_range
        );

        Ok(Figure {
            panels,
            x_range,
            figure_size: config.figure_size,
            line_width: config.line_width,
            x_axis_title: config.x_axis_title,
            y_axis_title: config.y_axis_title,
            show_grid: config.show_grid,
        })
    }
}

/// Horizontal range enclosing all segments plus a margin on each side
fn auto_x_range(segments: &[Segment]) -> (f64, f64) {
    let min_start = segments.iter().map(|s| s.start).fold(f64::INFINITY, f64::min);
    let max_stop = segments
        .iter()
        .map(|s| s.stop)
        .fold(f64::NEG_INFINITY, f64::max);
    (min_start - X_MARGIN, max_stop + X_MARGIN)
}
