//! Test data builders for creating test objects

use levelplot_rs::{Segment, SegmentRecord};

/// Builder for creating test segment records
pub struct RecordBuilder {
    chart: Option<String>,
    legend: Option<String>,
    start: Option<f64>,
    stop: Option<f64>,
    level: Option<f64>,
    exclude: bool,
}

impl RecordBuilder {
    pub fn new(chart: &str, legend: &str) -> Self {
        Self {
            chart: Some(chart.to_string()),
            legend: Some(legend.to_string()),
            start: Some(0.0),
            stop: Some(1.0),
            level: Some(0.0),
            exclude: false,
        }
    }

    pub fn span(mut self, start: f64, stop: f64) -> Self {
        self.start = Some(start);
        self.stop = Some(stop);
        self
    }

    pub fn level(mut self, level: f64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn excluded(mut self) -> Self {
        self.exclude = true;
        self
    }

    /// Drop a named field to provoke schema errors
    pub fn without(mut self, field: &str) -> Self {
        match field {
            "chart" => self.chart = None,
            "legend" => self.legend = None,
            "start" => self.start = None,
            "stop" => self.stop = None,
            "level" => self.level = None,
            other => panic!("unknown field: {}", other),
        }
        self
    }

    pub fn build(self) -> SegmentRecord {
        SegmentRecord {
            chart: self.chart,
            legend: self.legend,
            start: self.start,
            stop: self.stop,
            level: self.level,
            exclude: self.exclude,
        }
    }
}

/// Shorthand for a fully populated segment
pub fn segment(chart: &str, legend: &str, start: f64, stop: f64, level: f64) -> Segment {
    Segment::new(chart, legend, start, stop, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = RecordBuilder::new("Voltage", "V_Source")
            .span(1.2, 4.3)
            .level(5.0)
            .build();

        assert_eq!(record.chart.as_deref(), Some("Voltage"));
        assert_eq!(record.start, Some(1.2));
        assert_eq!(record.level, Some(5.0));
        assert!(!record.exclude);
    }

    #[test]
    fn test_record_builder_without_field() {
        let record = RecordBuilder::new("A", "s").without("level").build();
        assert!(record.level.is_none());
        assert!(record.start.is_some());
    }
}
