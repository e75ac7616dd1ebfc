use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// One row of an observation table.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ObservationRow {
    pub year: i32,
    /// Month of the year, 1-12
    pub month: u32,
    /// Field name to sampled value
    pub values: BTreeMap<String, f64>,
}

impl ObservationRow {
    pub fn new(year: i32, month: u32, values: BTreeMap<String, f64>) -> Self {
        Self { year, month, values }
    }

    pub fn value(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied()
    }
}

/// A table ready for display: its field order plus the rows in table order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ObservationTableDto {
    /// Table identifier, e.g. "agriculture"
    pub kind: String,
    pub title: String,
    /// Numeric fields in column order
    pub fields: Vec<String>,
    pub rows: Vec<ObservationRow>,
}

impl ObservationTableDto {
    pub fn new(kind: String, title: String, fields: Vec<String>, rows: Vec<ObservationRow>) -> Self {
        Self {
            kind,
            title,
            fields,
            rows,
        }
    }

    /// A table with columns but no rows.
    pub fn empty(kind: String, title: String, fields: Vec<String>) -> Self {
        Self::new(kind, title, fields, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
