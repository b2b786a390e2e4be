use std::fmt;
use std::time::Duration;

use axum::body::Bytes;
use reqwest::{header, Client};

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Backend error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Upstream did not respond within {} ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Connection failed")]
    Connection(#[source] reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Prediction service endpoints reachable through the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Predict,
    PredictMoves,
    IdentifyOpening,
    AnalyzePosition,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Predict => "predict",
            Endpoint::PredictMoves => "predict-moves",
            Endpoint::IdentifyOpening => "identify-opening",
            Endpoint::AnalyzePosition => "analyze-position",
        }
    }

    fn url(self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Client for the upstream prediction service.
///
/// Cheap to clone; the underlying connection pool is shared between clones.
#[derive(Clone)]
pub struct PredictorClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl PredictorClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent("ChessPredictor/1.0")
            .build()
            .map_err(UpstreamError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, UpstreamError> {
        Self::new(config.upstream_base_url.clone(), config.upstream_timeout)
    }

    /// POST a JSON document to `endpoint` and return the raw success body.
    ///
    /// The whole exchange (connect, send, body read) races the configured
    /// timeout. When the timer wins, the in-flight request future is dropped,
    /// which aborts the call.
    pub async fn forward(&self, endpoint: Endpoint, body: Bytes) -> Result<Bytes, UpstreamError> {
        let url = endpoint.url(&self.base_url);

        let call = async {
            let resp = self
                .client
                .post(&url)
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)
                .send()
                .await
                .map_err(UpstreamError::Connection)?;

            let status = resp.status();
            if !status.is_success() {
                let text = resp.text().await.unwrap_or_default();
                return Err(UpstreamError::Status {
                    status: status.as_u16(),
                    body: text,
                });
            }

            resp.bytes().await.map_err(UpstreamError::Connection)
        };

        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(UpstreamError::Timeout(self.timeout)),
        }
    }
}
