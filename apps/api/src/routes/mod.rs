pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::modul::handlers as modul;
use crate::staging::handlers as staging;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Modul Ajar pipeline
        .route("/api/v1/modul/validate", post(modul::handle_validate))
        .route("/api/v1/modul/extract", post(modul::handle_extract))
        .route("/api/v1/modul/prompt", post(modul::handle_prompt))
        .route("/api/v1/modul/process", post(modul::handle_process))
        .route(
            "/api/v1/questions/check",
            post(modul::handle_check_question),
        )
        // Multi-stage test design
        .route("/api/v1/stages", get(staging::handle_list_stages))
        .route("/api/v1/stages/answer", post(staging::handle_answer))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
