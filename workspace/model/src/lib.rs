pub mod catalog;
pub mod observation;

pub use catalog::{FieldSpec, TableKind, UnknownTableKind};
pub use observation::{
    DEFAULT_FIRST_YEAR, DEFAULT_LAST_YEAR, MONTH_COLUMN, ObservationKey, YEAR_COLUMN,
    default_months, default_years,
};
