use chrono::NaiveDate;
use model::catalog::{RAINFALL, TEMPERATURE};
use model::{FieldSpec, MONTH_COLUMN, TableKind, YEAR_COLUMN};
use polars::prelude::*;

use crate::context::DataContext;
use crate::table::ObservationTable;

/// Single numeric field used by hand-built tables.
pub const VALUE: FieldSpec = FieldSpec::new("Value", 0.0, 1000.0);

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Builds a table with one `Value` column from `(year, month, value)` rows,
/// keeping the given order and allowing keys a generator would never emit.
pub fn value_table(rows: &[(i32, u32, f64)]) -> ObservationTable {
    let frame = df!(
        YEAR_COLUMN => rows.iter().map(|r| r.0).collect::<Vec<i32>>(),
        MONTH_COLUMN => rows.iter().map(|r| r.1).collect::<Vec<u32>>(),
        VALUE.name => rows.iter().map(|r| r.2).collect::<Vec<f64>>(),
    )
    .unwrap();
    ObservationTable::from_frame(vec![VALUE], frame).unwrap()
}

/// Builds a weather table from `(year, month, temperature, rainfall)` rows.
pub fn weather_table(rows: &[(i32, u32, f64, f64)]) -> ObservationTable {
    let frame = df!(
        YEAR_COLUMN => rows.iter().map(|r| r.0).collect::<Vec<i32>>(),
        MONTH_COLUMN => rows.iter().map(|r| r.1).collect::<Vec<u32>>(),
        TEMPERATURE.name => rows.iter().map(|r| r.2).collect::<Vec<f64>>(),
        RAINFALL.name => rows.iter().map(|r| r.3).collect::<Vec<f64>>(),
    )
    .unwrap();
    ObservationTable::from_frame(vec![TEMPERATURE, RAINFALL], frame).unwrap()
}

/// A context with an empty agriculture table and the given weather rows.
pub fn context_with_weather_rows(rows: &[(i32, u32, f64, f64)]) -> DataContext {
    let agriculture = ObservationTable::empty(TableKind::Agriculture.fields().to_vec()).unwrap();
    let mut years: Vec<i32> = rows.iter().map(|r| r.0).collect();
    years.dedup();
    DataContext::from_tables(years, (1..=12).collect(), agriculture, weather_table(rows))
}
