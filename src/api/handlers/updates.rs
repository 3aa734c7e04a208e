//! Knowledge hub API handlers

use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use tracing::info;

use super::AppState;
use crate::api::types::ApiResponse;
use crate::api::types::UpdatesQuery;
use crate::models::UpdateArticle;

/// Latest updates (GET /api/updates?limit=N)
pub async fn latest_updates(
    State(state): State<AppState>,
    Query(params): Query<UpdatesQuery>,
) -> Json<ApiResponse<Vec<UpdateArticle>>> {
    info!("GET /api/updates: limit={:?}", params.limit);
    Json(ApiResponse::success(state.hub.latest(params.limit).await))
}
