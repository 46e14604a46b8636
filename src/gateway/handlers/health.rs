//! Health check handler

use std::sync::Arc;

use axum::{
    Json,
    extract::{OriginalUri, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::ErrorDetails;

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
    /// Reservation store backend
    #[schema(example = "postgres")]
    pub store: &'static str,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_i64)]
    pub timestamp_ms: i64,
}

/// Health check endpoint
///
/// - Healthy: 200 OK + `{status, store, timestampMs}`
/// - Store unreachable: 503 + error body. Store details are logged only.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Reservation store unavailable", body = ErrorDetails)
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let store = state.store();
    match store.ping().await {
        Ok(()) => Json(HealthResponse {
            status: "ok",
            store: store.name(),
            timestamp_ms: Utc::now().timestamp_millis(),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("[HEALTH] {} store ping failed: {}", store.name(), e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDetails::new("unavailable", uri.path())),
            )
                .into_response()
        }
    }
}
