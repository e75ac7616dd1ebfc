//! In-memory observation tables.
//!
//! A table is a polars `DataFrame` with the key columns `Year` (Int32) and
//! `Month` (UInt32) followed by one Float64 column per field spec.

use common::{ObservationRow, ObservationTableDto};
use model::{FieldSpec, MONTH_COLUMN, ObservationKey, TableKind, YEAR_COLUMN};
use polars::prelude::*;
use std::collections::BTreeMap;

use crate::error::{ComputeError, Result};

/// A generated (or hand-built) table of observations.
///
/// Tables are never mutated after construction; every query returns a freshly
/// allocated table.
#[derive(Debug, Clone)]
pub struct ObservationTable {
    fields: Vec<FieldSpec>,
    frame: DataFrame,
}

impl ObservationTable {
    /// Wraps an existing frame, checking that the key columns and every field
    /// column are present.
    pub fn from_frame(fields: Vec<FieldSpec>, frame: DataFrame) -> Result<Self> {
        frame.column(YEAR_COLUMN)?;
        frame.column(MONTH_COLUMN)?;
        for spec in &fields {
            frame.column(spec.name)?;
        }
        Ok(Self { fields, frame })
    }

    /// A table with the full schema and no rows.
    pub fn empty(fields: Vec<FieldSpec>) -> Result<Self> {
        let mut columns: Vec<Column> = Vec::with_capacity(fields.len() + 2);
        columns.push(Series::new(YEAR_COLUMN.into(), Vec::<i32>::new()).into());
        columns.push(Series::new(MONTH_COLUMN.into(), Vec::<u32>::new()).into());
        for spec in &fields {
            columns.push(Series::new(spec.name.into(), Vec::<f64>::new()).into());
        }
        let frame = DataFrame::new(columns)?;
        Ok(Self { fields, frame })
    }

    pub(crate) fn with_frame(&self, frame: DataFrame) -> Self {
        Self {
            fields: self.fields.clone(),
            frame,
        }
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The declared spec of `name`; key columns are not fields.
    pub fn field(&self, name: &str) -> Result<&FieldSpec> {
        self.fields
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| ComputeError::UnknownField(name.to_string()))
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Observation keys in table order.
    pub fn keys(&self) -> Result<Vec<ObservationKey>> {
        let years = self.frame.column(YEAR_COLUMN)?;
        let months = self.frame.column(MONTH_COLUMN)?;

        let mut keys = Vec::with_capacity(self.height());
        for i in 0..self.height() {
            let year = years.get(i)?.try_extract::<i32>()?;
            let month = months.get(i)?.try_extract::<u32>()?;
            keys.push(ObservationKey::new(year, month));
        }
        Ok(keys)
    }

    /// Values of one field in table order.
    pub fn values(&self, field: &str) -> Result<Vec<f64>> {
        self.field(field)?;
        let column = self.frame.column(field)?;

        let mut values = Vec::with_capacity(self.height());
        for i in 0..self.height() {
            values.push(column.get(i)?.try_extract::<f64>()?);
        }
        Ok(values)
    }

    /// Rows in table order, each carrying every field value by name.
    pub fn rows(&self) -> Result<Vec<ObservationRow>> {
        let keys = self.keys()?;
        let field_values = self
            .fields
            .iter()
            .map(|spec| self.values(spec.name).map(|values| (spec.name, values)))
            .collect::<Result<Vec<_>>>()?;

        let rows = keys
            .into_iter()
            .enumerate()
            .map(|(i, key)| {
                let values: BTreeMap<String, f64> = field_values
                    .iter()
                    .map(|(name, values)| (name.to_string(), values[i]))
                    .collect();
                ObservationRow::new(key.year, key.month, values)
            })
            .collect();
        Ok(rows)
    }

    /// Converts the table into its transport form under the given kind's title.
    pub fn to_dto(&self, kind: TableKind) -> Result<ObservationTableDto> {
        Ok(ObservationTableDto::new(
            kind.slug().to_string(),
            kind.title().to_string(),
            self.field_names(),
            self.rows()?,
        ))
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|spec| spec.name.to_string()).collect()
    }
}
