//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers;
use super::handlers::AppState;

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/advice", post(handlers::get_advice))
        .route("/updates", get(handlers::latest_updates))
        .with_state(state)
}

/// Full application router: `/health` plus everything under `/api`
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .with_state(state.clone())
        .nest("/api", api_routes(state))
}
