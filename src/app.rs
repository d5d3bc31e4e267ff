use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/metrics", get(handlers::get_metrics))
        .route("/api/render", post(handlers::render))
        .route("/api/event", post(handlers::event))
        .with_state(state)
}
