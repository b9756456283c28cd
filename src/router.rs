use crate::config::ServeConfig;
use crate::handlers::{health::health_check, predict::predict};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState, config: &ServeConfig) -> Router {
    let mut router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Forecast relay, same path as the forecasting service
        .route("/api/predict/", post(predict))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Built frontend; unknown paths fall back to the app shell
    if let Some(dir) = &config.static_dir {
        info!("Serving frontend from {}", dir.display());
        let index = dir.join("index.html");
        router = router.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    router
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(config.gateway_timeout()))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
