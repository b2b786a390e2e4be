use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    http::header,
    response::{IntoResponse, Response},
    Extension,
};
use serde_json::Value as JsonValue;

use crate::clients::predictor::{Endpoint, PredictorClient};
use crate::error::AppError;

/// Validate the inbound body as JSON, forward it untouched, and relay the
/// upstream body verbatim. Any failure becomes a 500 error envelope.
async fn forward(
    predictor: &PredictorClient,
    endpoint: Endpoint,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let body = body.map_err(|e| AppError::UnreadableBody(e.body_text()))?;

    // Parsed only to reject malformed input; the original bytes are what get sent,
    // so key order and number formatting survive.
    serde_json::from_slice::<JsonValue>(&body)?;

    tracing::debug!(%endpoint, bytes = body.len(), "Forwarding request upstream");
    let payload = predictor.forward(endpoint, body).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], payload).into_response())
}

/// POST /api/proxy, POST /api/predict
/// Game outcome prediction.
pub async fn predict(
    Extension(predictor): Extension<PredictorClient>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    forward(&predictor, Endpoint::Predict, body).await
}

/// POST /api/predict-moves
pub async fn predict_moves(
    Extension(predictor): Extension<PredictorClient>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    forward(&predictor, Endpoint::PredictMoves, body).await
}

/// POST /api/identify-opening
pub async fn identify_opening(
    Extension(predictor): Extension<PredictorClient>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    forward(&predictor, Endpoint::IdentifyOpening, body).await
}

/// POST /api/analyze-position
pub async fn analyze_position(
    Extension(predictor): Extension<PredictorClient>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    forward(&predictor, Endpoint::AnalyzePosition, body).await
}
