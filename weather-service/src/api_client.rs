use common::errors::{AppError, FetchError};
use common::http_client::HttpClient;
use common::models::WeatherSnapshot;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument, warn};

const UNKNOWN_PROVIDER_ERROR: &str = "Unknown weather provider error";

/// Failure of a weather lookup against the provider
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The provider answered but rejected the query
    #[error("{0}")]
    Provider(String),

    /// The provider could not be reached or answered with a non-2xx status
    #[error("{0}")]
    Transport(String),

    #[error("unexpected provider response: {0}")]
    InvalidResponse(String),
}

impl From<FetchError> for GatewayError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Parse(e) => Self::InvalidResponse(e.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Provider(info) => AppError::provider(info),
            GatewayError::Transport(cause) => AppError::unavailable(cause),
            GatewayError::InvalidResponse(cause) => {
                AppError::internal(format!("unexpected provider response: {}", cause))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct WeatherstackResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    location: Option<Map<String, Value>>,
    #[serde(default)]
    current: Option<Map<String, Value>>,
}

/// Client for the weatherstack current-conditions endpoint
pub struct WeatherstackClient {
    http_client: HttpClient,
    base_url: String,
    access_key: String,
}

impl WeatherstackClient {
    pub fn new(
        base_url: impl Into<String>,
        access_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let http_client = HttpClient::new(timeout)?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            access_key: access_key.into(),
        })
    }

    #[instrument(skip(self), fields(location = %location))]
    pub async fn current(&self, location: &str) -> Result<WeatherSnapshot, GatewayError> {
        info!(
            timeout_ms = self.http_client.timeout().as_millis(),
            "Fetching current weather from provider"
        );

        let url = format!(
            "{}?access_key={}&query={}",
            self.base_url,
            urlencoding::encode(&self.access_key),
            urlencoding::encode(location)
        );

        let response: WeatherstackResponse = self.http_client.get_json(&url).await?;

        if response.error.is_some() || response.success == Some(false) {
            let info = provider_error_info(response.error.as_ref());
            warn!(info = %info, "Provider rejected query");
            return Err(GatewayError::Provider(info));
        }

        Ok(WeatherSnapshot {
            location: response.location.unwrap_or_default(),
            current: response.current.unwrap_or_default(),
        })
    }
}

/// Human-readable message from the provider's `error` member, whatever its shape.
fn provider_error_info(error: Option<&Value>) -> String {
    match error {
        Some(Value::String(info)) if !info.is_empty() => info.clone(),
        Some(error) => error
            .get("info")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_PROVIDER_ERROR)
            .to_string(),
        None => UNKNOWN_PROVIDER_ERROR.to_string(),
    }
}
