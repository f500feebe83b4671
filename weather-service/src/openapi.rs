use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use common::models::{
    CreateWeatherResponse, ErrorResponse, WeatherRecord, WeatherRequest, WeatherSnapshot,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::create_weather,
        handlers::get_weather,
    ),
    components(schemas(
        WeatherRequest,
        WeatherRecord,
        WeatherSnapshot,
        CreateWeatherResponse,
        ErrorResponse,
    )),
    tags(
        (name = "weather", description = "Weather lookup and retrieval"),
    ),
)]
struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
