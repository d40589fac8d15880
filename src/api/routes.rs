//! Application route configuration.

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{book_routes, health_routes};
use super::middleware::track_requests;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::BOOKS_BASE_PATH;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check and counters (not tracked)
        .merge(health_routes())
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Book endpoints (counted, uniform failure status)
        .nest(
            BOOKS_BASE_PATH,
            book_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                track_requests,
            )),
        )
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
