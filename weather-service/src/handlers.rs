use axum::{
    extract::{Path, State, rejection::JsonRejection},
    response::Json,
};
use chrono::Utc;
use common::errors::AppError;
use common::models::{CreateWeatherResponse, ErrorResponse, WeatherRecord, WeatherRequest};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api_client::WeatherstackClient;
use crate::store::RecordStore;

const NOT_FOUND_DETAIL: &str = "Weather data not found";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<WeatherstackClient>,
    pub store: Arc<RecordStore>,
}

impl AppState {
    pub fn new(client: Arc<WeatherstackClient>, store: Arc<RecordStore>) -> Self {
        Self { client, store }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check")
    )
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "weather-service" }))
}

#[utoipa::path(
    post,
    path = "/weather",
    request_body = WeatherRequest,
    responses(
        (status = 200, description = "Weather lookup stored", body = CreateWeatherResponse),
        (status = 400, description = "Invalid request or provider rejected the query", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse),
        (status = 503, description = "Weather provider unreachable", body = ErrorResponse)
    ),
    tag = "weather"
)]
pub async fn create_weather(
    State(state): State<AppState>,
    payload: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Json<CreateWeatherResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected malformed weather request");
        AppError::validation(rejection.body_text())
    })?;

    if request.location.trim().is_empty() {
        return Err(AppError::validation(
            "invalid location: location must not be empty",
        ));
    }

    let id = Uuid::new_v4().to_string();
    info!(id = %id, location = %request.location, "Weather request received");

    let weather = state.client.current(&request.location).await.map_err(|e| {
        warn!(id = %id, error = %e, "Weather lookup failed");
        AppError::from(e)
    })?;

    let record = WeatherRecord {
        id: id.clone(),
        date: request.date,
        location: request.location,
        notes: request.notes,
        submitted_at: Utc::now(),
        weather,
    };
    state.store.put(id.clone(), record).await;

    info!(id = %id, "Weather record stored");

    Ok(Json(CreateWeatherResponse { id }))
}

#[utoipa::path(
    get,
    path = "/weather/{id}",
    params(
        ("id" = String, Path, description = "Identifier returned by POST /weather")
    ),
    responses(
        (status = 200, description = "Stored weather record", body = WeatherRecord),
        (status = 404, description = "No record with this identifier", body = ErrorResponse)
    ),
    tag = "weather"
)]
pub async fn get_weather(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WeatherRecord>, AppError> {
    match state.store.get(&id).await {
        Some(record) => Ok(Json(record)),
        None => {
            info!(id = %id, "Weather record not found");
            Err(AppError::not_found(NOT_FOUND_DETAIL))
        }
    }
}
