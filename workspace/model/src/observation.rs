use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column holding the observation year in every generated table.
pub const YEAR_COLUMN: &str = "Year";

/// Column holding the observation month (1-12) in every generated table.
pub const MONTH_COLUMN: &str = "Month";

/// First year covered by the dashboard dataset.
pub const DEFAULT_FIRST_YEAR: i32 = 2014;

/// Last year covered by the dashboard dataset (inclusive).
pub const DEFAULT_LAST_YEAR: i32 = 2023;

/// Identifies one synthetic observation: a (year, month) pair.
///
/// Every generated table holds exactly one row per key. The key itself does not
/// enforce the month range, because aggregated frames may come from anywhere;
/// use [`ObservationKey::first_day`] to find out whether it is a real month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObservationKey {
    pub year: i32,
    pub month: u32,
}

impl ObservationKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// First calendar day of the keyed month, or `None` when the pair does not
    /// name a valid month (e.g. month 0 or 13).
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

impl fmt::Display for ObservationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Years shown by the dashboard, 2014 through 2023.
pub fn default_years() -> Vec<i32> {
    (DEFAULT_FIRST_YEAR..=DEFAULT_LAST_YEAR).collect()
}

/// Calendar months 1 through 12.
pub fn default_months() -> Vec<u32> {
    (1..=12).collect()
}
