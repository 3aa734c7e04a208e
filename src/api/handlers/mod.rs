//! API request handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api::types::ApiResponse;
use crate::api::types::HealthResponse;
use crate::app::ArthaVivek;
use crate::hub::KnowledgeHub;
use crate::rag::AdvicePipeline;
use crate::translate::TranslationService;
use crate::Result;

pub mod advice;
pub mod updates;

pub use advice::*;
pub use updates::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<AdvicePipeline>,
    pub hub: Arc<KnowledgeHub>,
    pub translation: Arc<TranslationService>,
}

impl AppState {
    /// # Errors
    /// - `ConfigError` when the generation client is not configured
    pub fn from_app(app: &ArthaVivek) -> Result<Self> {
        Ok(Self {
            pipeline: app.pipeline()?,
            hub: app.hub(),
            translation: app.translation()?,
        })
    }
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store_available: state.pipeline.store_available(),
    }))
}
