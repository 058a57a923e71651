use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cysafe_common::error::CysafeError;

pub struct ApiError(pub CysafeError);

impl From<CysafeError> for ApiError {
    fn from(err: CysafeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CysafeError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            CysafeError::Validation(msg) | CysafeError::EmptyInput(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            CysafeError::Upstream(_) => (StatusCode::BAD_GATEWAY, self.0.to_string()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
