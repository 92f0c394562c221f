//! Renderable figure produced by a level plot
//!
//! A [`Figure`] is the output of one render call: an ordered list of
//! [`Panel`]s sharing a horizontal range, each holding its laid-out
//! segments with resolved colors. The figure can be handed back to the
//! caller for further customization before being drawn into an egui
//! `Ui` with [`Figure::show`].

use egui::{Color32, RichText, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoint, PlotPoints, PlotUi, Text};

/// Vertical padding added above and below a panel's outermost segments
const Y_PADDING: f64 = 0.5;

/// Estimated height of a panel's title row in logical points
const PANEL_TITLE_HEIGHT: f32 = 24.0;

/// Alpha applied to segment lines
const SEGMENT_ALPHA: f32 = 0.8;

/// One plotted segment with its final vertical position and color
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSegment {
    /// Label drawn at the segment midpoint
    pub legend: String,

    /// Left edge on the shared horizontal axis
    pub start: f64,

    /// Right edge on the shared horizontal axis
    pub stop: f64,

    /// Level as supplied by the caller
    pub level: f64,

    /// Vertical displacement computed by the overlap layout
    pub level_offset: f64,

    /// Assigned color
    pub color: Color32,
}

impl PlacedSegment {
    /// Final vertical position: level plus displacement
    pub fn y(&self) -> f64 {
        self.level + self.level_offset
    }

    /// Midpoint of the horizontal extent
    pub fn midpoint(&self) -> f64 {
        (self.start + self.stop) / 2.0
    }
}

/// One subplot: the laid-out segments of a single chart key
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// The grouping key this panel was partitioned on
    pub chart: String,

    /// Panel title (configured prefix plus chart key)
    pub title: String,

    /// Segments in ascending start order
    pub segments: Vec<PlacedSegment>,

    /// Vertical axis range
    pub y_range: (f64, f64),
}

impl Panel {
    /// Padded vertical range enclosing the given positions
    ///
    /// The range reaches [`Y_PADDING`] beyond the outermost position. A
    /// range that straddles zero after padding is widened to cover at
    /// least `[-0.5, 0.5]` so the zero line never hugs a panel edge.
    pub fn padded_y_range(positions: impl Iterator<Item = f64>) -> (f64, f64) {
        let (min, max) = positions.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });

        let mut y_min = min - Y_PADDING;
        let mut y_max = max + Y_PADDING;

        if y_min < 0.0 && y_max > 0.0 {
            y_min = y_min.min(-0.5);
            y_max = y_max.max(0.5);
        }

        (y_min, y_max)
    }
}

/// A renderable figure: stacked panels over a shared horizontal range
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Panels in first-appearance order of their chart key
    pub panels: Vec<Panel>,

    /// Horizontal range shared by every panel
    pub x_range: (f64, f64),

    /// Figure size in logical points (width, height)
    pub figure_size: (f32, f32),

    /// Line width of plotted segments
    pub line_width: f32,

    /// Title of the shared horizontal axis
    pub x_axis_title: String,

    /// Title of each panel's vertical axis
    pub y_axis_title: String,

    /// Whether to draw grid lines
    pub show_grid: bool,
}

impl Figure {
    /// Panels in display order
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Mutable panel access for caller customization before showing
    pub fn panels_mut(&mut self) -> &mut [Panel] {
        &mut self.panels
    }

    /// Number of stacked panels
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Draw the figure into the given `Ui`
    ///
    /// Panels are stacked vertically with equal heights, all clamped to
    /// the shared horizontal range. The horizontal axis label and tick
    /// labels appear only under the bottom panel. Plots are static:
    /// zoom, drag and scroll are disabled.
    pub fn show(&self, ui: &mut Ui) {
        let panel_count = self.panels.len().max(1);
        let panel_height =
            (self.figure_size.1 / panel_count as f32 - PANEL_TITLE_HEIGHT).max(60.0);

        ui.vertical(|ui| {
            for (index, panel) in self.panels.iter().enumerate() {
                let is_bottom = index + 1 == panel_count;

                ui.label(RichText::new(&panel.title).strong().size(14.0));

                let mut plot = Plot::new(format!("level_panel_{}", index))
                    .width(self.figure_size.0)
                    .height(panel_height)
                    .allow_zoom(false)
                    .allow_drag(false)
                    .allow_scroll(false)
                    .allow_boxed_zoom(false)
                    .show_grid(self.show_grid)
                    .show_axes([is_bottom, true])
                    .y_axis_label(self.y_axis_title.clone());

                if is_bottom {
                    plot = plot.x_axis_label(self.x_axis_title.clone());
                }

                plot.show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                        [self.x_range.0, panel.y_range.0],
                        [self.x_range.1, panel.y_range.1],
                    ));
                    self.draw_panel_segments(plot_ui, index, panel);
                });
            }
        });
    }

    /// Draw one panel's segments: a horizontal line plus centered label each
    fn draw_panel_segments(&self, plot_ui: &mut PlotUi, panel_index: usize, panel: &Panel) {
        for (segment_index, segment) in panel.segments.iter().enumerate() {
            let y = segment.y();

            let line = Line::new(
                segment.legend.clone(),
                PlotPoints::from(vec![[segment.start, y], [segment.stop, y]]),
            )
            .color(segment.color.gamma_multiply(SEGMENT_ALPHA))
            .width(self.line_width);
            plot_ui.line(line);

            let label = RichText::new(&segment.legend)
                .size(9.0)
                .strong()
                .color(Color32::BLACK)
                .background_color(Color32::from_rgba_unmultiplied(255, 255, 255, 200));
            plot_ui.text(Text::new(
                format!("level_label_{}_{}", panel_index, segment_index),
                PlotPoint::new(segment.midpoint(), y),
                label,
            ));
        }
    }
}
