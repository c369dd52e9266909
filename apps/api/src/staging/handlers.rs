//! Axum route handlers for the staging table and level routing.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::staging::{
    is_answer_correct, is_final, next_level, stage_level, total_questions, StageLevel,
    FIRST_LEVEL, LEVELS, QUESTIONS_PER_LEVEL,
};

#[derive(Debug, Serialize)]
pub struct StagesResponse {
    pub first_level: u8,
    pub questions_per_level: usize,
    pub total_questions: usize,
    pub levels: &'static [StageLevel],
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub current_level: u8,
    pub answer: String,
    pub expected_answer: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub is_correct: bool,
    /// `None` when the test ends at `current_level`.
    pub next_level: Option<u8>,
    pub is_final: bool,
}

/// GET /api/v1/stages
pub async fn handle_list_stages() -> Json<StagesResponse> {
    Json(StagesResponse {
        first_level: FIRST_LEVEL,
        questions_per_level: QUESTIONS_PER_LEVEL,
        total_questions: total_questions(),
        levels: &LEVELS,
    })
}

/// POST /api/v1/stages/answer
pub async fn handle_answer(
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    if stage_level(request.current_level).is_none() {
        return Err(AppError::Validation(format!(
            "Unknown level {}; expected 1 to {}",
            request.current_level,
            LEVELS.len()
        )));
    }

    let is_correct = is_answer_correct(&request.answer, &request.expected_answer);
    let next = next_level(request.current_level, is_correct);
    debug!(
        level = request.current_level,
        is_correct,
        next = ?next,
        "answer routed"
    );

    Ok(Json(AnswerResponse {
        is_correct,
        next_level: next,
        is_final: is_final(request.current_level),
    }))
}
