//! Demo viewer application
//!
//! A small eframe shell that renders a sample measurement table three
//! ways: auto-computed horizontal range, a range fixed at construction,
//! and a per-call zoomed range. Useful for eyeballing layout and color
//! behavior without wiring the library into a host application.

use crate::config::{PlotConfig, RenderOptions};
use crate::error::{Result, ResultExt};
use crate::figure::Figure;
use crate::plot::LevelPlot;
use crate::types::{Segment, SegmentTable};

/// Demo viewer showing sample figures
pub struct DemoApp {
    figures: Vec<(String, Figure)>,
    selected: usize,
}

impl DemoApp {
    /// Build the demo figures
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let table = sample_table();

        let mut auto = LevelPlot::with_config(PlotConfig {
            line_width: 4.0,
            figure_size: (960.0, 640.0),
            x_axis_title: "Frequency (MHz)".to_string(),
            y_axis_title: "Level (dBm)".to_string(),
            ..Default::default()
        });

        let mut fixed = LevelPlot::with_config(PlotConfig {
            x_axis_range: Some((0.0, 10.0)),
            ..auto.config().clone()
        });

        let zoom_options = RenderOptions {
            x_axis_range: Some((2.0, 6.0)),
            ..Default::default()
        };

        let figures = vec![
            (
                "Auto range".to_string(),
                auto.plot(&table).context("rendering auto-range figure")?,
            ),
            (
                "Fixed range 0..10".to_string(),
                fixed.plot(&table).context("rendering fixed-range figure")?,
            ),
            (
                "Zoomed 2..6".to_string(),
                auto.plot_with(&table, &zoom_options)
                    .context("rendering zoomed figure")?,
            ),
        ];

        Ok(Self {
            figures,
            selected: 0,
        })
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (index, (name, _)) in self.figures.iter().enumerate() {
                    if ui.selectable_label(self.selected == index, name).clicked() {
                        self.selected = index;
                    }
                }
            });
            ui.separator();

            if let Some((_, figure)) = self.figures.get(self.selected) {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    figure.show(ui);
                });
            }
        });
    }
}

/// Sample measurement table: three charts of paired source/load segments
fn sample_table() -> SegmentTable {
    SegmentTable::from_segments([
        Segment::new("Voltage", "V_Source", 1.2, 4.3, 5.0),
        Segment::new("Voltage", "V_Load", 3.5, 7.2, 3.0),
        Segment::new("Current", "I_Source", 0.5, 3.5, 2.0),
        Segment::new("Current", "I_Load", 4.2, 8.3, -1.5),
        Segment::new("Power", "P_Source", 2.1, 4.2, 10.0),
        Segment::new("Power", "P_Load", 5.0, 7.5, -8.0),
    ])
}
