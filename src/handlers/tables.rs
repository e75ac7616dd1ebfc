use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::{ObservationTableDto, TableInfo};
use compute::dashboard::no_selection_message;
use compute::select_exact;
use model::TableKind;
use tracing::{debug, info, instrument, trace};

use crate::helpers::converters::{ApiError, compute_error_response, parse_table_kind, table_info};
use crate::schemas::{ApiResponse, AppState, ErrorResponse, SelectionQuery};

/// List the available tables
#[utoipa::path(
    get,
    path = "/api/v1/tables",
    tag = "tables",
    responses(
        (status = 200, description = "Tables retrieved successfully", body = ApiResponse<Vec<TableInfo>>)
    )
)]
#[instrument(skip(state))]
pub async fn list_tables(State(state): State<AppState>) -> Json<ApiResponse<Vec<TableInfo>>> {
    let tables: Vec<TableInfo> = TableKind::ALL
        .iter()
        .map(|&kind| table_info(&state.context, kind))
        .collect();
    debug!("Listing {} tables", tables.len());
    Json(ApiResponse::ok(tables, "Tables retrieved successfully"))
}

/// Get the full, unfiltered table
#[utoipa::path(
    get,
    path = "/api/v1/tables/{kind}",
    tag = "tables",
    params(
        ("kind" = String, Path, description = "Table kind: agriculture or weather")
    ),
    responses(
        (status = 200, description = "Table retrieved successfully", body = ApiResponse<ObservationTableDto>),
        (status = 404, description = "Unknown table", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_table(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<ApiResponse<ObservationTableDto>>, ApiError> {
    trace!("Entering get_table function");
    let kind = parse_table_kind(&kind)?;

    let dto = state
        .context
        .table(kind)
        .to_dto(kind)
        .map_err(compute_error_response)?;

    info!("Returning {} rows of {} data", dto.len(), kind);
    Ok(Json(ApiResponse::ok(dto, format!("{} retrieved successfully", kind.title()))))
}

/// Get the rows matching one year and month exactly
#[utoipa::path(
    get,
    path = "/api/v1/tables/{kind}/selection",
    tag = "tables",
    params(
        ("kind" = String, Path, description = "Table kind: agriculture or weather"),
        SelectionQuery
    ),
    responses(
        (status = 200, description = "Selection retrieved; may be empty", body = ApiResponse<ObservationTableDto>),
        (status = 400, description = "Invalid year or month", body = ErrorResponse),
        (status = 404, description = "Unknown table", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_selection(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Valid(Query(query)): Valid<Query<SelectionQuery>>,
) -> Result<Json<ApiResponse<ObservationTableDto>>, ApiError> {
    trace!("Entering get_selection function");
    let kind = parse_table_kind(&kind)?;

    let dto = select_exact(state.context.table(kind), query.year, query.month)
        .and_then(|selected| selected.to_dto(kind))
        .map_err(compute_error_response)?;

    let message = if dto.is_empty() {
        debug!("No {} rows for {}-{}", kind, query.year, query.month);
        no_selection_message(kind)
    } else {
        format!("Selected {} rows", dto.len())
    };

    Ok(Json(ApiResponse::ok(dto, message)))
}
