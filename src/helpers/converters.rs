use axum::{http::StatusCode, response::Json};
use common::{FieldInfo, TableInfo};
use compute::{ComputeError, DataContext};
use model::TableKind;
use tracing::{error, warn};

use crate::schemas::ErrorResponse;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Resolves the `{kind}` path segment, answering 404 for anything unknown.
pub fn parse_table_kind(kind: &str) -> Result<TableKind, ApiError> {
    kind.parse::<TableKind>().map_err(|e| {
        warn!("Unknown table kind: {}", kind);
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(e.to_string(), "UNKNOWN_TABLE")),
        )
    })
}

/// Maps an engine error onto an HTTP status and error code.
pub fn compute_error_response(err: ComputeError) -> ApiError {
    if err.is_client_error() {
        warn!("Rejected request: {}", err);
    } else {
        error!("Computation failed: {}", err);
    }
    let (status, code) = match &err {
        ComputeError::UnknownField(_) => (StatusCode::NOT_FOUND, "UNKNOWN_FIELD"),
        ComputeError::DateComposition { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "DATE_COMPOSITION_ERROR")
        }
        ComputeError::InvalidFieldSpec { .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INVALID_FIELD_SPEC")
        }
        ComputeError::DataFrame(_) | ComputeError::Series(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "COMPUTE_ERROR")
        }
    };
    (status, Json(ErrorResponse::new(err.to_string(), code)))
}

/// Catalogue entry for one table of the context.
pub fn table_info(context: &DataContext, kind: TableKind) -> TableInfo {
    TableInfo {
        kind: kind.slug().to_string(),
        title: kind.title().to_string(),
        fields: kind
            .fields()
            .iter()
            .map(|spec| FieldInfo {
                name: spec.name.to_string(),
                low: spec.low,
                high: spec.high,
            })
            .collect(),
        rows: context.table(kind).height(),
    }
}
