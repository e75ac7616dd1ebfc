use common::{
    DashboardView, FieldInfo, MonthlySeries, MonthlySeriesPoint, ObservationRow,
    ObservationTableDto, SeriesOutcome, TableInfo, TableSection, TrendSection,
};
use compute::DataContext;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Generated tables, read-only after startup
    pub context: Arc<DataContext>,
}

/// Query parameters selecting one (year, month) key
#[derive(Debug, Deserialize, Serialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct SelectionQuery {
    /// Year to select (e.g., 2018)
    #[validate(range(min = 1, max = 9999))]
    pub year: i32,
    /// Month to select (1-12)
    #[validate(range(min = 1, max = 12))]
    pub month: u32,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Rows in the agriculture table
    pub agriculture_rows: usize,
    /// Rows in the weather table
    pub weather_rows: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::tables::list_tables,
        crate::handlers::tables::get_table,
        crate::handlers::tables::get_selection,
        crate::handlers::timeseries::get_monthly_series,
        crate::handlers::dashboard::get_dashboard,
    ),
    components(
        schemas(
            ApiResponse<ObservationTableDto>,
            ApiResponse<MonthlySeries>,
            ApiResponse<Vec<TableInfo>>,
            ApiResponse<DashboardView>,
            ErrorResponse,
            HealthResponse,
            SelectionQuery,
            TableInfo,
            FieldInfo,
            ObservationTableDto,
            ObservationRow,
            MonthlySeries,
            MonthlySeriesPoint,
            DashboardView,
            TableSection,
            TrendSection,
            SeriesOutcome,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "tables", description = "Agriculture and weather table endpoints"),
        (name = "timeseries", description = "Monthly mean series endpoints"),
        (name = "dashboard", description = "Combined dashboard view"),
    ),
    info(
        title = "Santa Cruz Dashboard API",
        description = "Synthetic Santa Cruz agriculture and weather data (2014-2023) with exact-match selection and monthly trends",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
