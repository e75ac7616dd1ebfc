//! Table catalogue for the dashboard dataset.
//!
//! Each table kind owns an ordered list of numeric fields together with the
//! half-open range `[low, high)` their synthetic values are drawn from. Field
//! order is the column order of the generated table and the order in which
//! trend charts are rendered.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A numeric field and the uniform sampling range for its values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub low: f64,
    /// Exclusive upper bound.
    pub high: f64,
}

impl FieldSpec {
    pub const fn new(name: &'static str, low: f64, high: f64) -> Self {
        Self { name, low, high }
    }

    /// Whether `value` lies in `[low, high)`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }
}

pub const CROP_YIELD: FieldSpec = FieldSpec::new("Crop_Yield", 100.0, 500.0);
pub const FERTILIZER_USAGE: FieldSpec = FieldSpec::new("Fertilizer_Usage", 50.0, 200.0);
pub const PESTICIDE_USAGE: FieldSpec = FieldSpec::new("Pesticide_Usage", 10.0, 50.0);
pub const TEMPERATURE: FieldSpec = FieldSpec::new("Temperature", 20.0, 35.0);
pub const RAINFALL: FieldSpec = FieldSpec::new("Rainfall", 0.0, 300.0);

static AGRICULTURE_FIELDS: [FieldSpec; 3] = [CROP_YIELD, FERTILIZER_USAGE, PESTICIDE_USAGE];
static WEATHER_FIELDS: [FieldSpec; 2] = [TEMPERATURE, RAINFALL];

/// The two tables served by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Agriculture,
    Weather,
}

impl TableKind {
    pub const ALL: [TableKind; 2] = [TableKind::Agriculture, TableKind::Weather];

    /// Lowercase identifier used in URLs and messages.
    pub fn slug(&self) -> &'static str {
        match self {
            TableKind::Agriculture => "agriculture",
            TableKind::Weather => "weather",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TableKind::Agriculture => "Agriculture Data",
            TableKind::Weather => "Weather Data",
        }
    }

    pub fn trends_title(&self) -> &'static str {
        match self {
            TableKind::Agriculture => "Agriculture Trends",
            TableKind::Weather => "Weather Trends",
        }
    }

    /// Numeric fields of this table, in column order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            TableKind::Agriculture => &AGRICULTURE_FIELDS,
            TableKind::Weather => &WEATHER_FIELDS,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when a string does not name a known table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTableKind(pub String);

impl fmt::Display for UnknownTableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown table: {}", self.0)
    }
}

impl std::error::Error for UnknownTableKind {}

impl FromStr for TableKind {
    type Err = UnknownTableKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTableKind(s.to_string()))
    }
}
