//! Color assignment for plotted segments
//!
//! Labels are assigned colors from a fixed palette in first-seen order,
//! and every later occurrence of the same label reuses its color. The
//! palette cycles once exhausted.

use egui::Color32;
use std::collections::HashMap;

/// Default palette of visually distinct colors (the Tableau 10)
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4), // blue
    Color32::from_rgb(0xff, 0x7f, 0x0e), // orange
    Color32::from_rgb(0x2c, 0xa0, 0x2c), // green
    Color32::from_rgb(0xd6, 0x27, 0x28), // red
    Color32::from_rgb(0x94, 0x67, 0xbd), // purple
    Color32::from_rgb(0x8c, 0x56, 0x4b), // brown
    Color32::from_rgb(0xe3, 0x77, 0xc2), // pink
    Color32::from_rgb(0x7f, 0x7f, 0x7f), // gray
    Color32::from_rgb(0xbc, 0xbd, 0x22), // olive
    Color32::from_rgb(0x17, 0xbe, 0xcf), // cyan
];

/// Stable label-to-color assignment
///
/// The mapping grows monotonically as new labels are seen and never
/// shrinks; the n-th distinct label gets palette slot `n % palette_len`.
/// State is instance-scoped and not thread-safe: share an assigner
/// between renders to keep colors stable, but not between threads
/// without external synchronization.
#[derive(Debug, Clone)]
pub struct ColorAssigner {
    palette: Vec<Color32>,
    assigned: HashMap<String, Color32>,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorAssigner {
    /// Create an assigner using the default palette
    pub fn new() -> Self {
        Self::with_palette(PALETTE.to_vec())
    }

    /// Create an assigner using a custom palette
    ///
    /// An empty palette falls back to the default one.
    pub fn with_palette(palette: Vec<Color32>) -> Self {
        let palette = if palette.is_empty() {
            PALETTE.to_vec()
        } else {
            palette
        };
        Self {
            palette,
            assigned: HashMap::new(),
        }
    }

    /// Resolve the color for a label, assigning the next palette slot on
    /// first sight
    pub fn color_for(&mut self, legend: &str) -> Color32 {
        if let Some(color) = self.assigned.get(legend) {
            return *color;
        }
        let color = self.palette[self.assigned.len() % self.palette.len()];
        self.assigned.insert(legend.to_string(), color);
        tracing::trace!("Assigned color {:?} to legend '{}'", color, legend);
        color
    }

    /// Number of distinct labels seen so far
    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }
}
