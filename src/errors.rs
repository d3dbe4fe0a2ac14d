use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures inside the booking proxy that the caller sees as a 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Payload(#[from] serde_json::Error),

    #[error("record store error: {0:#}")]
    Store(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Payload(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({
            "message": "Internal Server Error",
            "error": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}

/// Why a submission from the wizard did not go through. `Display` is the
/// detail appended to the user-facing failure message.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("malformed response from booking service: {0}")]
    MalformedResponse(String),
}
