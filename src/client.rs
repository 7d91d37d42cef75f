use std::time::Duration;

use tracing::{debug, info, warn};

use crate::form::PatientRecord;
use crate::survival::ResponseData;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/survival_analysis";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("prediction API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("prediction API unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("prediction API response is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

pub trait PredictionClient: std::fmt::Debug {
    fn predict(&self, record: &PatientRecord) -> Result<ResponseData, PredictError>;
}

#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpPredictionClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, PredictError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(PredictError::Transport)?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PredictionClient for HttpPredictionClient {
    fn predict(&self, record: &PatientRecord) -> Result<ResponseData, PredictError> {
        info!(
            endpoint = %self.endpoint,
            treatments = record.treatments().len(),
            "prediction request sent"
        );
        let resp = self
            .client
            .post(&self.endpoint)
            .json(record)
            .send()
            .map_err(|err| {
                warn!(endpoint = %self.endpoint, error = %err, "prediction request failed");
                PredictError::Transport(err)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|err| {
                debug!(error = %err, "failed to read error response body");
                String::new()
            });
            warn!(status = status.as_u16(), "prediction API returned an error status");
            return Err(PredictError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().map_err(PredictError::Transport)?;
        debug!(bytes = bytes.len(), "prediction response received");
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(PredictError::Decode)?;
        let response = ResponseData::from_value(value);
        if let Some(reason) = &response.malformed {
            warn!(reason = %reason, "prediction response has unexpected field types");
        }
        Ok(response)
    }
}
