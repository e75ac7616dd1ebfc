use axum::{
    extract::{Query, State},
    response::Json,
};
use axum_valid::Valid;
use common::DashboardView;
use compute::build_dashboard;
use tracing::{info, instrument};

use crate::schemas::{ApiResponse, AppState, ErrorResponse, SelectionQuery};

/// Get the whole dashboard for one year and month
///
/// Selection placeholders and chart errors are reported inside the view, so
/// this endpoint answers 200 for every valid query.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "dashboard",
    params(SelectionQuery),
    responses(
        (status = 200, description = "Dashboard built", body = ApiResponse<DashboardView>),
        (status = 400, description = "Invalid year or month", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Valid(Query(query)): Valid<Query<SelectionQuery>>,
) -> Json<ApiResponse<DashboardView>> {
    let view = build_dashboard(&state.context, query.year, query.month);

    let failed = view.failed_charts();
    let message = if failed == 0 {
        "Dashboard built successfully".to_string()
    } else {
        format!("Dashboard built with {} failed charts", failed)
    };
    info!(year = query.year, month = query.month, failed, "Dashboard served");

    Json(ApiResponse::ok(view, message))
}
