//! Common transport-layer types shared by every presentation surface.
//! These structs are what the HTTP handlers serialize and what the terminal
//! report renders, so both surfaces agree on the shape of a dashboard.

mod dashboard;
mod observations;
mod timeseries;

pub use dashboard::{DashboardView, SeriesOutcome, TableSection, TrendSection};
pub use observations::{ObservationRow, ObservationTableDto};
pub use timeseries::{MonthlySeries, MonthlySeriesPoint};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===================== Catalogue =====================

/// A numeric column of a table and the range its synthetic values come from.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FieldInfo {
    pub name: String,
    pub low: f64,
    /// Exclusive upper bound
    pub high: f64,
}

/// Description of one table served by the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TableInfo {
    /// Identifier used in URLs, e.g. "weather"
    pub kind: String,
    pub title: String,
    pub fields: Vec<FieldInfo>,
    /// Number of rows in the unfiltered table
    pub rows: usize,
}
