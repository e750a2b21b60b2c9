use thiserror::Error;
use url::Url;

use super::wire::{PredictRequest, PredictResponse, PredictResponseItem, StudentInput};
use crate::http_client;

/// Endpoint root used when no configuration overrides it.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Path appended to the base URL for every prediction.
pub const PREDICT_PATH: &str = "/predict";

const MAX_RESPONSE_BYTES: usize = 256 * 1024;

/// Everything that can go wrong between building the request and reading a score.
///
/// The `Display` text is what the form shows to the user.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Invalid URL.")]
    InvalidUrl(String),
    #[error("HTTP error {0}.")]
    BadStatus(u16),
    #[error("Empty response from server.")]
    EmptyResults,
    #[error("Failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

/// Anything able to score one student. The form controller only talks to this.
pub trait Predictor: Send + Sync {
    fn predict(&self, student: &StudentInput) -> Result<PredictResponseItem, PredictError>;
}

/// Blocking HTTP client for `POST {base_url}/predict`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionClient {
    base_url: String,
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Base URL (trailing slashes dropped) joined with [`PREDICT_PATH`].
    pub fn endpoint(&self) -> Result<Url, PredictError> {
        let raw = format!(
            "{}{PREDICT_PATH}",
            self.base_url.trim().trim_end_matches('/')
        );
        let url = Url::parse(&raw).map_err(|err| PredictError::InvalidUrl(format!("{raw} ({err})")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(PredictError::InvalidUrl(format!(
                "{raw} (unsupported scheme {scheme})"
            ))),
        }
    }

    fn send(&self, student: &StudentInput) -> Result<PredictResponseItem, PredictError> {
        let url = self.endpoint()?;
        tracing::debug!(%url, ?student, "Sending prediction request");
        let request = http_client::agent()
            .post(url.as_str())
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");

        let response = match request.send_json(PredictRequest::single(*student)) {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(PredictError::BadStatus(code)),
            Err(ureq::Error::Transport(err)) => return Err(PredictError::Other(err.to_string())),
        };
        // ureq only reports 4xx/5xx as errors; anything else outside 2xx is still a failure.
        let status = response.status();
        if !(200..=299).contains(&status) {
            return Err(PredictError::BadStatus(status));
        }

        let body = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
            .map_err(|err| PredictError::Other(err.to_string()))?;
        first_result(&body)
    }
}

impl Predictor for PredictionClient {
    fn predict(&self, student: &StudentInput) -> Result<PredictResponseItem, PredictError> {
        let outcome = self.send(student);
        match &outcome {
            Ok(item) => tracing::info!(
                risk_score = item.risk_score,
                model_version = %item.model_version,
                "Prediction received"
            ),
            Err(PredictError::InvalidUrl(detail)) => {
                tracing::warn!(base_url = %self.base_url, "Prediction failed: invalid URL {detail}")
            }
            Err(err) => tracing::warn!(base_url = %self.base_url, "Prediction failed: {err}"),
        }
        outcome
    }
}

/// Decode a response body and keep only its first entry.
fn first_result(body: &[u8]) -> Result<PredictResponseItem, PredictError> {
    let decoded: PredictResponse = serde_json::from_slice(body).map_err(PredictError::Decoding)?;
    decoded
        .results
        .into_iter()
        .next()
        .ok_or(PredictError::EmptyResults)
}
