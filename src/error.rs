//! Error handling for levelplot-rs
//!
//! This module defines custom error types and a Result alias for use
//! throughout the library.

use thiserror::Error;

/// Main error type for level plot operations
#[derive(Error, Debug)]
pub enum LevelPlotError {
    /// One or more required columns are absent from the input table
    #[error("missing required column(s): {}", .missing.join(", "))]
    Schema {
        /// Names of every missing column, in canonical column order
        missing: Vec<String>,
    },

    /// A segment whose start lies beyond its stop
    #[error("invalid segment at row {row}: start {start} > stop {stop}")]
    InvalidSegment { row: usize, start: f64, stop: f64 },

    /// No plottable rows remain after exclusion filtering
    #[error("input table has no plottable rows")]
    EmptyInput,

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<LevelPlotError>,
    },
}

impl LevelPlotError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        LevelPlotError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for level plot operations
pub type Result<T> = std::result::Result<T, LevelPlotError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}
