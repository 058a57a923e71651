use axum::extract::State;
use axum::Json;

use crate::check::requests::CheckLinkRequest;
use crate::check::responses::CheckLinkResponse;
use crate::error::ApiError;
use crate::AppState;

/// Classify a pasted URL. Nothing is persisted; the verdict is built
/// fresh for every request.
pub async fn check_link(
    State(state): State<AppState>,
    Json(body): Json<CheckLinkRequest>,
) -> Result<Json<CheckLinkResponse>, ApiError> {
    let verdict = state.classifier.classify(&body.url).await?;
    tracing::info!(label = verdict.label.as_str(), "link checked");
    Ok(Json(CheckLinkResponse::from(verdict)))
}
