use crate::handlers::{
    dashboard::get_dashboard,
    health::health_check,
    tables::{get_selection, get_table, list_tables},
    timeseries::get_monthly_series,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{Router, routing::get};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Tables
        .route("/api/v1/tables", get(list_tables))
        .route("/api/v1/tables/:kind", get(get_table))
        .route("/api/v1/tables/:kind/selection", get(get_selection))
        // Monthly series
        .route("/api/v1/tables/:kind/series/:field", get(get_monthly_series))
        // Dashboard
        .route("/api/v1/dashboard", get(get_dashboard))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // The global metrics recorder can only be installed once per process,
    // so tests run without it.
    #[cfg(not(test))]
    let router = {
        let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();
        router
            .route("/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer)
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
