pub mod api_client;
pub mod config;
pub mod handlers;
pub mod openapi;
pub mod store;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::AppState;

/// Builds the service router. Only `allowed_origin` may call with credentials.
pub fn app(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/health", get(handlers::health))
        .route("/weather", post(handlers::create_weather))
        .route("/weather/{id}", get(handlers::get_weather))
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
