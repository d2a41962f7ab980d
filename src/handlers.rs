use crate::errors::AppError;
use crate::models::{StatsResponse, StatusResponse, TimerRequest};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let status = state.snapshot().await;
    Html(render_index(&status))
}

pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(state.status().await)
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.stats().await)
}

pub async fn timer_action(
    State(state): State<AppState>,
    Json(payload): Json<TimerRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    apply_action(&state, payload.action.trim()).await?;
    Ok(Json(state.status().await))
}

pub async fn timer_start(State(state): State<AppState>) -> Redirect {
    state.start().await;
    Redirect::to("/")
}

pub async fn timer_pause(State(state): State<AppState>) -> Redirect {
    state.pause().await;
    Redirect::to("/")
}

pub async fn timer_reset(State(state): State<AppState>) -> Redirect {
    state.reset().await;
    Redirect::to("/")
}

async fn apply_action(state: &AppState, action: &str) -> Result<(), AppError> {
    match action {
        "start" => state.start().await,
        "pause" => state.pause().await,
        "reset" => state.reset().await,
        _ => {
            return Err(AppError::bad_request(
                "action must be 'start', 'pause' or 'reset'",
            ))
        }
    }
    Ok(())
}
