use thiserror::Error;
use tracing::error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// A (year, month) group does not name a real calendar month
    #[error("Cannot compose a calendar date from year {year} and month {month}")]
    DateComposition { year: i32, month: u32 },

    /// The requested value column is not one of the table's fields
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A field spec with an empty sampling range
    #[error("Invalid range for field {field}: [{low}, {high})")]
    InvalidFieldSpec { field: String, low: f64, high: f64 },

    /// Error from Polars DataFrame operations
    #[error("DataFrame error: {0}")]
    DataFrame(String),

    /// Error from Polars Series operations
    #[error("Series error: {0}")]
    Series(String),
}

impl ComputeError {
    /// Errors caused by the request rather than by the data it ran against.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ComputeError::UnknownField(_))
    }
}

// Implement From<polars::error::PolarsError> for ComputeError
impl From<polars::error::PolarsError> for ComputeError {
    fn from(error: polars::error::PolarsError) -> Self {
        match error {
            polars::error::PolarsError::ColumnNotFound(_) => {
                let err = ComputeError::DataFrame(format!("Column not found: {}", error));
                error!(?err, "DataFrame error: Column not found");
                err
            }
            polars::error::PolarsError::ShapeMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Shape mismatch: {}", error));
                error!(?err, "DataFrame error: Shape mismatch");
                err
            }
            polars::error::PolarsError::SchemaMismatch(_) => {
                let err = ComputeError::DataFrame(format!("Schema mismatch: {}", error));
                error!(?err, "DataFrame error: Schema mismatch");
                err
            }
            polars::error::PolarsError::Duplicate(_) => {
                let err = ComputeError::DataFrame(format!("Duplicate column: {}", error));
                error!(?err, "DataFrame error: Duplicate column");
                err
            }
            polars::error::PolarsError::ComputeError(_) => {
                let err = ComputeError::DataFrame(format!("Compute error: {}", error));
                error!(?err, "DataFrame error: Compute error");
                err
            }
            _ => {
                let err = ComputeError::Series(error.to_string());
                error!(?err, "Series error");
                err
            }
        }
    }
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
