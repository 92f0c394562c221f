//! Core data types for levelplot-rs
//!
//! This module contains the tabular input structures handed to the
//! renderer and the validation that turns loose records into typed
//! segments.
//!
//! # Main Types
//!
//! - [`SegmentRecord`] - A loose input row where every field is optional,
//!   so schema problems can be detected and reported at the boundary
//! - [`Segment`] - A validated row with all required fields present
//! - [`SegmentTable`] - An ordered sequence of records, the input to
//!   [`LevelPlot::plot`](crate::plot::LevelPlot::plot)
//!
//! # Validation
//!
//! [`SegmentTable::validate`] checks the whole table before any layout
//! work happens: missing required columns are reported together in one
//! error, rows marked `exclude` are dropped, rows with `start > stop`
//! are rejected, and a table with nothing left to plot is an explicit
//! error rather than a downstream rendering failure.

use crate::error::{LevelPlotError, Result};
use serde::{Deserialize, Serialize};

/// Required columns of the input table, in canonical order
pub const REQUIRED_COLUMNS: [&str; 5] = ["chart", "legend", "start", "stop", "level"];

/// A loose input row; every required field is optional
///
/// Records come from callers assembling tables by hand or deserializing
/// them from row-oriented data. Presence of the required fields is
/// checked by [`SegmentTable::validate`], not by the type system, so a
/// malformed table produces a descriptive error instead of failing to
/// construct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Grouping key selecting the panel this row belongs to
    pub chart: Option<String>,

    /// Label determining color and the text drawn at the segment midpoint
    pub legend: Option<String>,

    /// Left edge on the shared horizontal axis
    pub start: Option<f64>,

    /// Right edge on the shared horizontal axis
    pub stop: Option<f64>,

    /// Position on the panel's vertical axis
    pub level: Option<f64>,

    /// Rows marked excluded are dropped before any processing
    #[serde(default)]
    pub exclude: bool,
}

impl SegmentRecord {
    /// Names of required fields absent from this record, in canonical order
    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.chart.is_none() {
            missing.push("chart");
        }
        if self.legend.is_none() {
            missing.push("legend");
        }
        if self.start.is_none() {
            missing.push("start");
        }
        if self.stop.is_none() {
            missing.push("stop");
        }
        if self.level.is_none() {
            missing.push("level");
        }
        missing
    }

    /// Convert to a typed segment, if all required fields are present
    fn to_segment(&self) -> Option<Segment> {
        Some(Segment {
            chart: self.chart.clone()?,
            legend: self.legend.clone()?,
            start: self.start?,
            stop: self.stop?,
            level: self.level?,
        })
    }
}

/// A validated input row with all required fields present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Grouping key selecting the panel this segment belongs to
    pub chart: String,

    /// Label determining color and midpoint text
    pub legend: String,

    /// Left edge on the shared horizontal axis
    pub start: f64,

    /// Right edge on the shared horizontal axis
    pub stop: f64,

    /// Position on the panel's vertical axis
    pub level: f64,
}

impl Segment {
    /// Create a new segment
    pub fn new(
        chart: impl Into<String>,
        legend: impl Into<String>,
        start: f64,
        stop: f64,
        level: f64,
    ) -> Self {
        Self {
            chart: chart.into(),
            legend: legend.into(),
            start,
            stop,
            level,
        }
    }

    /// Midpoint of the horizontal extent, where the legend text is drawn
    pub fn midpoint(&self) -> f64 {
        (self.start + self.stop) / 2.0
    }
}

impl From<Segment> for SegmentRecord {
    fn from(segment: Segment) -> Self {
        Self {
            chart: Some(segment.chart),
            legend: Some(segment.legend),
            start: Some(segment.start),
            stop: Some(segment.stop),
            level: Some(segment.level),
            exclude: false,
        }
    }
}

/// An ordered sequence of input records
///
/// The caller owns the table; [`LevelPlot::plot`](crate::plot::LevelPlot::plot)
/// borrows it for the duration of one render call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentTable {
    records: Vec<SegmentRecord>,
}

impl SegmentTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from typed segments
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self {
            records: segments.into_iter().map(SegmentRecord::from).collect(),
        }
    }

    /// Append a record
    pub fn push(&mut self, record: SegmentRecord) {
        self.records.push(record);
    }

    /// Append a typed segment
    pub fn push_segment(&mut self, segment: Segment) {
        self.records.push(segment.into());
    }

    /// Number of records, including excluded ones
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records at all
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The raw records in input order
    pub fn records(&self) -> &[SegmentRecord] {
        &self.records
    }

    /// Validate the table and produce the plottable segments in input order
    ///
    /// Checks run in this order:
    /// 1. every required column must be present in every row; all missing
    ///    column names are reported together in a single [`LevelPlotError::Schema`]
    /// 2. rows with `exclude` set are dropped
    /// 3. a row with `start > stop` is rejected with the input row index
    /// 4. nothing left to plot is [`LevelPlotError::EmptyInput`]
    pub fn validate(&self) -> Result<Vec<Segment>> {
        let mut missing: Vec<String> = Vec::new();
        for record in &self.records {
            for field in record.missing_fields() {
                if !missing.iter().any(|m| m == field) {
                    missing.push(field.to_string());
                }
            }
        }
        if !missing.is_empty() {
            missing.sort_by_key(|name| {
                REQUIRED_COLUMNS
                    .iter()
                    .position(|c| c == name)
                    .unwrap_or(REQUIRED_COLUMNS.len())
            });
            return Err(LevelPlotError::Schema { missing });
        }

        let mut segments = Vec::with_capacity(self.records.len());
        for (row, record) in self.records.iter().enumerate() {
            if record.exclude {
                continue;
            }
            // The schema pass above guarantees all fields are present.
            if let Some(segment) = record.to_segment() {
                if segment.start > segment.stop {
                    return Err(LevelPlotError::InvalidSegment {
                        row,
                        start: segment.start,
                        stop: segment.stop,
                    });
                }
                segments.push(segment);
            }
        }

        if segments.is_empty() {
            tracing::debug!("Table of {} record(s) left nothing to plot", self.records.len());
            return Err(LevelPlotError::EmptyInput);
        }

        Ok(segments)
    }
}

impl FromIterator<Segment> for SegmentTable {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

impl FromIterator<SegmentRecord> for SegmentTable {
    fn from_iter<I: IntoIterator<Item = SegmentRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
