//! Exact-match selection and monthly aggregation over observation tables.

use common::MonthlySeriesPoint;
use model::{MONTH_COLUMN, ObservationKey, YEAR_COLUMN};
use polars::prelude::*;
use tracing::{debug, instrument, trace};

use crate::error::{ComputeError, Result};
use crate::table::ObservationTable;

/// Returns the rows whose `Year` equals `year` and whose `Month` equals
/// `month`, in table order.
///
/// A key that is absent from the table simply produces an empty table; the
/// only failures come from a frame that lacks the key columns.
#[instrument(skip(table), fields(rows = table.height()))]
pub fn select_exact(table: &ObservationTable, year: i32, month: u32) -> Result<ObservationTable> {
    let source = table.frame();
    let mask = source.column(YEAR_COLUMN)?.i32()?.equal(year)
        & source.column(MONTH_COLUMN)?.u32()?.equal(month);
    let frame = source.filter(&mask)?;

    debug!("Selected {} of {} rows", frame.height(), table.height());
    Ok(table.with_frame(frame))
}

/// Averages `value_field` over every (Year, Month) group and returns one point
/// per group, dated on the first day of the month and sorted by date.
///
/// Fails with [`ComputeError::DateComposition`] when a group key is not a
/// real month and with [`ComputeError::UnknownField`] when `value_field` is
/// not one of the table's fields. An empty table gives an empty series.
#[instrument(skip(table), fields(rows = table.height()))]
pub fn monthly_mean_series(
    table: &ObservationTable,
    value_field: &str,
) -> Result<Vec<MonthlySeriesPoint>> {
    table.field(value_field)?;
    if table.is_empty() {
        debug!("Empty table, returning empty series");
        return Ok(Vec::new());
    }

    let grouped = table
        .frame()
        .clone()
        .lazy()
        .group_by([col(YEAR_COLUMN), col(MONTH_COLUMN)])
        .agg([col(value_field).mean().alias(value_field)])
        .collect()?;

    let years = grouped.column(YEAR_COLUMN)?;
    let months = grouped.column(MONTH_COLUMN)?;
    let means = grouped.column(value_field)?;

    let mut points = Vec::with_capacity(grouped.height());
    for i in 0..grouped.height() {
        let year = years.get(i)?.try_extract::<i32>()?;
        let month = months.get(i)?.try_extract::<u32>()?;
        let mean = means.get(i)?.try_extract::<f64>()?;

        let date = ObservationKey::new(year, month)
            .first_day()
            .ok_or(ComputeError::DateComposition { year, month })?;
        trace!(%date, mean, "Aggregated group");
        points.push(MonthlySeriesPoint::new(date, mean));
    }

    // group order is unspecified
    points.sort_by_key(|point| point.date);

    debug!("Aggregated {} into {} monthly points", value_field, points.len());
    Ok(points)
}
