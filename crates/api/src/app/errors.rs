use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

/// API-boundary failure.
///
/// The engines themselves never fail on well-typed input, so the only
/// production variant is a request body the router could not parse.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::InvalidBody(rejection) => {
                let status = rejection.status();
                failure(status, rejection.body_text())
            }
        }
    }
}

/// Generic failure envelope: `{"success": false, "error": ...}`.
pub fn failure(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "error": message.into(),
        })),
    )
        .into_response()
}
