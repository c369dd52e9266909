//! Axum route handlers for the Modul Ajar API.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::modul::hedging::find_hedging_terms;
use crate::modul::models::{CurriculumComponents, ValidationResult};
use crate::modul::{compose_prompt, extract, validate};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DocumentRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub request_id: Uuid,
    pub processed_at: DateTime<Utc>,
    pub validation: ValidationResult,
    pub components: CurriculumComponents,
    pub prompt: String,
}

#[derive(Debug, Deserialize)]
pub struct QuestionCheckRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionCheckResponse {
    pub hedging_terms: Vec<&'static str>,
    pub is_definitive: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/modul/validate
///
/// Always 200: an unrecognised document is a normal outcome, reported in the body.
pub async fn handle_validate(Json(request): Json<DocumentRequest>) -> Json<ValidationResult> {
    Json(validate(&request.text))
}

/// POST /api/v1/modul/extract
pub async fn handle_extract(Json(request): Json<DocumentRequest>) -> Json<CurriculumComponents> {
    Json(extract(&request.text))
}

/// POST /api/v1/modul/prompt
pub async fn handle_prompt(Json(components): Json<CurriculumComponents>) -> Json<PromptResponse> {
    Json(PromptResponse {
        prompt: compose_prompt(&components),
    })
}

/// POST /api/v1/modul/process
///
/// Full pipeline: validate, then extract and compose. An invalid document
/// stops at validation with a 422 carrying the diagnostic.
pub async fn handle_process(
    Json(request): Json<DocumentRequest>,
) -> Result<Json<ProcessResponse>, AppError> {
    let request_id = Uuid::new_v4();

    let validation = validate(&request.text);
    if let Some(failure) = validation.failure {
        warn!(%request_id, code = failure.code(), "Modul Ajar rejected");
        return Err(AppError::InvalidModul(failure));
    }

    let components = extract(&request.text);
    let prompt = compose_prompt(&components);

    info!(
        %request_id,
        subject = %components.subject,
        objectives = components.learning_objectives.len(),
        prompt_chars = prompt.len(),
        "Modul Ajar processed"
    );

    Ok(Json(ProcessResponse {
        request_id,
        processed_at: Utc::now(),
        validation,
        components,
        prompt,
    }))
}

/// POST /api/v1/questions/check
///
/// Screens a generated question for hedging terms.
pub async fn handle_check_question(
    Json(request): Json<QuestionCheckRequest>,
) -> Result<Json<QuestionCheckResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let hedging_terms = find_hedging_terms(&request.text);
    Ok(Json(QuestionCheckResponse {
        is_definitive: hedging_terms.is_empty(),
        hedging_terms,
    }))
}
