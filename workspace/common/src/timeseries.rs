use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single point of a monthly time series.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MonthlySeriesPoint {
    /// First day of the month the point summarizes
    pub date: NaiveDate,
    /// Mean of the field over all rows of that month
    pub value: f64,
}

impl MonthlySeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// The monthly mean series of one field, ordered by date.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MonthlySeries {
    /// Table identifier, e.g. "weather"
    pub kind: String,
    pub field: String,
    pub points: Vec<MonthlySeriesPoint>,
}

impl MonthlySeries {
    pub fn new(kind: String, field: String, points: Vec<MonthlySeriesPoint>) -> Self {
        Self { kind, field, points }
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }
}
