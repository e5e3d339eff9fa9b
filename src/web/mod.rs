// src/web/mod.rs
// Web server layer for timecall

pub mod api;
pub mod pages;
pub mod state;

pub use state::AppState;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    let cors = match state.config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) if state.config.cors_origin != "*" => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    // API routes (REST)
    let api_router = Router::new()
        .route("/ask", post(api::ask))
        .route("/characters", get(api::list_characters))
        .with_state(state.clone());

    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(api::health))
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
