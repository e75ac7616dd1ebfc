//! Synthetic record generation.
//!
//! Produces one row per (year, month) pair of the Cartesian product of the
//! requested years and months, with every field sampled independently and
//! uniformly from its `[low, high)` range.

use model::{FieldSpec, MONTH_COLUMN, YEAR_COLUMN};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument, trace};

use crate::error::{ComputeError, Result};
use crate::table::ObservationTable;

/// Where generation draws its randomness from.
///
/// `Entropy` seeds from the operating system, so two generations with the same
/// parameters produce different values. Use `Seeded` when a reproducible table
/// is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSource {
    #[default]
    Entropy,
    Seeded(u64),
}

impl RandomSource {
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(RandomSource::Entropy, RandomSource::Seeded)
    }

    pub fn rng(&self) -> StdRng {
        match self {
            RandomSource::Entropy => StdRng::from_os_rng(),
            RandomSource::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }
}

/// Generates a table for every (year, month) pair, years outermost.
///
/// An empty `years` or `months` slice yields an empty table with the full
/// schema. Fails only when a field spec has an empty range or two specs share
/// a column name.
#[instrument(skip(rng), fields(rows = years.len() * months.len()))]
pub fn generate<R: Rng>(
    years: &[i32],
    months: &[u32],
    fields: &[FieldSpec],
    rng: &mut R,
) -> Result<ObservationTable> {
    for spec in fields {
        // also rejects NaN bounds
        if !(spec.low < spec.high) {
            return Err(ComputeError::InvalidFieldSpec {
                field: spec.name.to_string(),
                low: spec.low,
                high: spec.high,
            });
        }
    }

    let rows = years.len() * months.len();
    let mut year_column = Vec::with_capacity(rows);
    let mut month_column = Vec::with_capacity(rows);
    let mut value_columns: Vec<Vec<f64>> = vec![Vec::with_capacity(rows); fields.len()];

    for &year in years {
        for &month in months {
            trace!(year, month, "Sampling observation");
            year_column.push(year);
            month_column.push(month);
            for (spec, column) in fields.iter().zip(value_columns.iter_mut()) {
                column.push(rng.random_range(spec.low..spec.high));
            }
        }
    }

    let mut columns: Vec<Column> = Vec::with_capacity(fields.len() + 2);
    columns.push(Series::new(YEAR_COLUMN.into(), year_column).into());
    columns.push(Series::new(MONTH_COLUMN.into(), month_column).into());
    for (spec, values) in fields.iter().zip(value_columns) {
        columns.push(Series::new(spec.name.into(), values).into());
    }

    let frame = DataFrame::new(columns)?;
    debug!("Generated table with {} rows and {} fields", frame.height(), fields.len());
    ObservationTable::from_frame(fields.to_vec(), frame)
}
