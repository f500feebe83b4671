use std::env;
use std::time::Duration;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub weatherstack_url: String,
    pub weatherstack_access_key: String,
    pub request_timeout: Duration,
    pub cors_allowed_origin: String,
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            weatherstack_url: var("WEATHERSTACK_URL")
                .unwrap_or_else(|| "http://api.weatherstack.com/current".to_string()),
            weatherstack_access_key: var("WEATHERSTACK_ACCESS_KEY").unwrap_or_default(),
            request_timeout: Duration::from_secs(
                var("WEATHER_API_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            cors_allowed_origin: var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            log_json: var("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        }
    }
}
