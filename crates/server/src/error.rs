use std::error::Error as _;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::clients::predictor::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Failed to read request body: {0}")]
    UnreadableBody(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    /// Message placed in the `error` field of the envelope.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Underlying cause worth logging next to the message. Only upstream
    /// failures hide their cause behind a fixed message; the other variants
    /// already embed it.
    fn log_detail(&self) -> Option<String> {
        match self {
            AppError::Upstream(_) => self.source().map(|s| s.to_string()),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.message();

        match self.log_detail() {
            Some(detail) => tracing::error!("Proxy error: {message} ({detail})"),
            None => tracing::error!("Proxy error: {message}"),
        }

        // Every failure is a 500 carrying {"error": "message"}
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        )
            .into_response()
    }
}
