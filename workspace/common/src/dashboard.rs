use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::observations::ObservationTableDto;
use crate::timeseries::MonthlySeries;

/// A table plus an optional message shown in place of (or next to) it.
///
/// The message is set when the table is empty ("No weather data available ...")
/// or when it could not be produced at all.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TableSection {
    pub table: ObservationTableDto,
    pub message: Option<String>,
}

impl TableSection {
    pub fn new(table: ObservationTableDto, message: Option<String>) -> Self {
        Self { table, message }
    }
}

/// Result of rendering one trend chart. A failed chart carries the inline
/// message instead of data; it never prevents the other charts from rendering.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeriesOutcome {
    Chart { series: MonthlySeries },
    Error { field: String, message: String },
}

impl SeriesOutcome {
    pub fn field(&self) -> &str {
        match self {
            SeriesOutcome::Chart { series } => &series.field,
            SeriesOutcome::Error { field, .. } => field,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SeriesOutcome::Error { .. })
    }
}

/// All trend charts of one table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TrendSection {
    pub kind: String,
    pub title: String,
    /// One entry per numeric field, in column order
    pub charts: Vec<SeriesOutcome>,
    /// Set instead of charts when the table has nothing to plot
    pub message: Option<String>,
}

/// Everything the dashboard page shows for one (year, month) selection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardView {
    pub title: String,
    pub year: i32,
    pub month: u32,
    /// Exact-match rows per table for the selected year and month
    pub selections: Vec<TableSection>,
    pub trends: Vec<TrendSection>,
    /// Unfiltered tables
    pub overall: Vec<TableSection>,
}

impl DashboardView {
    /// Number of charts that could not be rendered.
    pub fn failed_charts(&self) -> usize {
        self.trends
            .iter()
            .flat_map(|section| section.charts.iter())
            .filter(|outcome| outcome.is_error())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_outcome_is_tagged_by_status() {
        let outcome = SeriesOutcome::Error {
            field: "Rainfall".to_string(),
            message: "Error plotting weather data: boom".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["field"], "Rainfall");

        let chart = SeriesOutcome::Chart {
            series: MonthlySeries::new("weather".to_string(), "Rainfall".to_string(), vec![]),
        };
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["status"], "chart");
        assert_eq!(json["series"]["field"], "Rainfall");
        assert_eq!(chart.field(), "Rainfall");
        assert!(!chart.is_error());
    }

    #[test]
    fn test_failed_charts_counts_errors_across_sections() {
        let view = DashboardView {
            title: "t".to_string(),
            year: 2020,
            month: 1,
            selections: vec![],
            trends: vec![
                TrendSection {
                    kind: "agriculture".to_string(),
                    title: "Agriculture Trends".to_string(),
                    charts: vec![SeriesOutcome::Error {
                        field: "Crop_Yield".to_string(),
                        message: "bad".to_string(),
                    }],
                    message: None,
                },
                TrendSection {
                    kind: "weather".to_string(),
                    title: "Weather Trends".to_string(),
                    charts: vec![SeriesOutcome::Chart {
                        series: MonthlySeries::new(
                            "weather".to_string(),
                            "Rainfall".to_string(),
                            vec![],
                        ),
                    }],
                    message: None,
                },
            ],
            overall: vec![],
        };
        assert_eq!(view.failed_charts(), 1);
    }
}
