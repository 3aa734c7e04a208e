//! Advice API handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use tracing::warn;

use super::AppState;
use crate::api::types::AdviceRequest;
use crate::api::types::ApiResponse;
use crate::models::Persona;
use crate::rag::AdviceResult;
use crate::translate::find_language;
use crate::translate::is_english;
use crate::translate::LANGUAGE_NOT_SUPPORTED_MESSAGE;

/// Message for a request without a question
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a question before getting advice.";

type AdviceResponse = (StatusCode, Json<ApiResponse<AdviceResult>>);

fn rejected(status: StatusCode, message: impl Into<String>) -> AdviceResponse {
    (status, Json(ApiResponse::error(message)))
}

/// Answer a financial question (POST /api/advice)
pub async fn get_advice(
    State(state): State<AppState>,
    payload: Result<Json<AdviceRequest>, JsonRejection>,
) -> AdviceResponse {
    info!("POST /api/advice");

    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!("Rejected advice request body: {}", rejection.body_text());
            return rejected(rejection.status(), rejection.body_text());
        }
    };

    if req.query.trim().is_empty() {
        return rejected(StatusCode::BAD_REQUEST, EMPTY_QUERY_MESSAGE);
    }

    let persona = match req.persona.as_deref() {
        None => Persona::Student,
        Some(raw) => match raw.parse::<Persona>() {
            Ok(persona) => persona,
            Err(e) => {
                warn!("Rejected advice request: {}", e);
                return rejected(StatusCode::BAD_REQUEST, e.to_string());
            }
        },
    };

    if let Some(language) = req.language.as_deref() {
        if !is_english(language) && find_language(language).is_none() {
            warn!("Rejected advice request: unsupported language {}", language);
            return rejected(StatusCode::BAD_REQUEST, LANGUAGE_NOT_SUPPORTED_MESSAGE);
        }
    }

    let advice = state.pipeline.get_advice(&req.query, persona).await;
    let advice = state
        .translation
        .localize(advice, req.language.as_deref())
        .await;
    (StatusCode::OK, Json(ApiResponse::success(advice)))
}
