use axum::{
    extract::{Path, State},
    response::Json,
};
use common::MonthlySeries;
use compute::monthly_mean_series;
use tracing::{debug, instrument, trace};

use crate::helpers::converters::{ApiError, compute_error_response, parse_table_kind};
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Get the monthly mean of one field, ordered by date
#[utoipa::path(
    get,
    path = "/api/v1/tables/{kind}/series/{field}",
    tag = "timeseries",
    params(
        ("kind" = String, Path, description = "Table kind: agriculture or weather"),
        ("field" = String, Path, description = "Numeric field, e.g. Rainfall")
    ),
    responses(
        (status = 200, description = "Series computed successfully", body = ApiResponse<MonthlySeries>),
        (status = 404, description = "Unknown table or field", body = ErrorResponse),
        (status = 422, description = "A (year, month) key is not a calendar month", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_monthly_series(
    State(state): State<AppState>,
    Path((kind, field)): Path<(String, String)>,
) -> Result<Json<ApiResponse<MonthlySeries>>, ApiError> {
    trace!("Entering get_monthly_series function");
    let kind = parse_table_kind(&kind)?;

    let points =
        monthly_mean_series(state.context.table(kind), &field).map_err(compute_error_response)?;
    debug!("Computed {} points for {} {}", points.len(), kind, field);

    let series = MonthlySeries::new(kind.slug().to_string(), field, points);
    Ok(Json(ApiResponse::ok(series, "Series computed successfully")))
}
