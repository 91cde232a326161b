/// EmailJS email sending service
use crate::constants::{DEFAULT_UPSTREAM_TIMEOUT_SECS, EMAILJS_SEND_URL, ENV_TIMEOUT_SECS};
use crate::error::RelayError;
use crate::models::{EmailJsPayload, UpstreamResponse};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends the payload upstream
    ///
    /// Any HTTP answer, successful or not, is returned as `Ok`. `Err` means
    /// the request never produced a response.
    async fn send(&self, payload: &EmailJsPayload) -> Result<UpstreamResponse, RelayError>;
}

#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    endpoint: String,
}

impl EmailJsClient {
    /// Creates a client for the public EmailJS endpoint
    pub fn new(timeout: Duration) -> Result<Self, RelayError> {
        Self::with_endpoint(EMAILJS_SEND_URL, timeout)
    }

    /// Creates a client posting to an explicit endpoint
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Creates a client using `EMAILJS_TIMEOUT_SECS`, falling back to the default
    pub fn from_env() -> Result<Self, RelayError> {
        Self::new(timeout_from(std::env::var(ENV_TIMEOUT_SECS).ok()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn timeout_from(raw: Option<String>) -> Duration {
    let secs = match raw {
        Some(value) => match value.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                warn!(
                    value = %value,
                    default = DEFAULT_UPSTREAM_TIMEOUT_SECS,
                    "Invalid upstream timeout, using default"
                );
                DEFAULT_UPSTREAM_TIMEOUT_SECS
            }
        },
        None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
    };

    Duration::from_secs(secs)
}

#[async_trait]
impl EmailSender for EmailJsClient {
    async fn send(&self, payload: &EmailJsPayload) -> Result<UpstreamResponse, RelayError> {
        let body = serde_json::to_vec(payload)?;

        debug!(endpoint = %self.endpoint, bytes = body.len(), "Posting to EmailJS");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(UpstreamResponse::new(status, text))
    }
}
