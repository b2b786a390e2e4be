use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::clients::predictor::{PredictorClient, UpstreamError};
use crate::config::Config;
use crate::routes;

/// Build the application router with its upstream client wired in.
pub fn build_router(config: &Config) -> Result<Router, UpstreamError> {
    let predictor = PredictorClient::from_config(config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        // Outcome prediction, reachable under both historical paths
        .route("/api/proxy", post(routes::proxy::predict))
        .route("/api/predict", post(routes::proxy::predict))
        .route("/api/predict-moves", post(routes::proxy::predict_moves))
        .route("/api/identify-opening", post(routes::proxy::identify_opening))
        .route("/api/analyze-position", post(routes::proxy::analyze_position))
        .layer(Extension(predictor))
        .layer(cors);

    Ok(app)
}
