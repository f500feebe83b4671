use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Weather lookup submitted by a client
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WeatherRequest {
    /// Caller-supplied date, kept as given
    #[serde(default)]
    pub date: String,
    /// Place name or coordinates understood by the weather provider
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

/// Provider payload stored alongside the request metadata
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, ToSchema)]
pub struct WeatherSnapshot {
    /// Provider's normalized location echo
    #[schema(value_type = Object)]
    pub location: Map<String, Value>,
    /// Provider's current-conditions snapshot
    #[schema(value_type = Object)]
    pub current: Map<String, Value>,
}

/// Stored weather lookup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct WeatherRecord {
    pub id: String,
    pub date: String,
    pub location: String,
    pub notes: String,
    #[schema(value_type = String, format = DateTime)]
    pub submitted_at: DateTime<Utc>,
    pub weather: WeatherSnapshot,
}

/// Identifier handed back after a successful lookup
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateWeatherResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
