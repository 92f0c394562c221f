//! # levelplot-rs: signal-level timeline charts
//!
//! Renders measured signal segments as horizontal-line charts, grouped
//! into vertically stacked subplots that share one horizontal axis.
//! Segments are colored by legend in stable first-seen order, and
//! segments that overlap horizontally while sitting close in level are
//! displaced vertically so they stay readable.
//!
//! ## Architecture
//!
//! - **Input**: [`SegmentTable`], an ordered sequence of records the
//!   caller owns; validated at the boundary before any layout work
//! - **Layout**: the overlap displacement heuristic and panel
//!   partitioning in [`layout`]
//! - **Colors**: [`ColorAssigner`], instance state mapping legends to a
//!   fixed palette
//! - **Output**: [`Figure`], a renderable object drawn with egui_plot;
//!   panels stay accessible for caller customization before showing
//!
//! ## Example
//!
//! ```
//! use levelplot_rs::{LevelPlot, Segment, SegmentTable};
//!
//! let table: SegmentTable = [
//!     Segment::new("Voltage", "V_Source", 1.2, 4.3, 5.0),
//!     Segment::new("Voltage", "V_Load", 3.5, 7.2, 3.0),
//!     Segment::new("Current", "I_Load", 4.2, 8.3, -1.5),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut plotter = LevelPlot::new();
//! let figure = plotter.plot(&table).unwrap();
//!
//! assert_eq!(figure.panel_count(), 2);
//! // Draw it into any egui Ui with figure.show(ui).
//! ```

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod figure;
pub mod layout;
pub mod plot;
pub mod types;

// Re-export commonly used types
pub use color::{ColorAssigner, PALETTE};
pub use config::{PlotConfig, RenderOptions};
pub use error::{LevelPlotError, Result};
pub use figure::{Figure, Panel, PlacedSegment};
pub use plot::LevelPlot;
pub use types::{Segment, SegmentRecord, SegmentTable};
