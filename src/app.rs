use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/timer/start", post(handlers::timer_start))
        .route("/timer/pause", post(handlers::timer_pause))
        .route("/timer/reset", post(handlers::timer_reset))
        .route("/api/status", get(handlers::get_status))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/timer", post(handlers::timer_action))
        .with_state(state)
}
