use crate::errors::FetchError;
use reqwest::Client;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// HTTP client for single-attempt JSON fetches bounded by a timeout
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch JSON from URL. Exactly one round-trip is made per call.
    #[instrument(skip(self, url), fields(url = %redact_query(url)))]
    pub async fn get_json<T>(&self, url: &str) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let target = redact_query(url);

        let response = tokio::time::timeout(self.timeout, self.client.get(url).send())
            .await
            .map_err(|_| FetchError::Timeout(target.to_string()))?
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout(target.to_string())
                } else {
                    // reqwest embeds the full URL, query included
                    FetchError::Network(e.without_url())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Upstream returned non-success status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: target.to_string(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))?;
        let json: T = serde_json::from_str(&text)?;

        info!("Request successful");
        Ok(json)
    }
}

/// Strips the query string, which may carry credentials.
fn redact_query(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[test]
    fn redact_query_drops_everything_after_question_mark() {
        assert_eq!(
            redact_query("http://host/current?access_key=secret&query=London"),
            "http://host/current"
        );
        assert_eq!(redact_query("http://host/current"), "http://host/current");
    }

    #[tokio::test]
    async fn get_json_decodes_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(Duration::from_secs(1)).expect("client should build");
        let body: Value = client
            .get_json(&format!("{}/current", mock_server.uri()))
            .await
            .expect("request should succeed");

        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn non_success_status_is_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(Duration::from_secs(1)).expect("client should build");
        let result: Result<Value, _> = client
            .get_json(&format!("{}/current?access_key=secret", mock_server.uri()))
            .await;

        match result {
            Err(FetchError::Status { status, url }) => {
                assert_eq!(status, 502);
                assert!(!url.contains("secret"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(Duration::from_millis(100)).expect("client should build");
        let result: Result<Value, _> = client
            .get_json(&format!("{}/current", mock_server.uri()))
            .await;

        assert!(matches!(result, Err(FetchError::Timeout(_))));
    }

    #[tokio::test]
    async fn invalid_json_is_a_parse_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client = HttpClient::new(Duration::from_secs(1)).expect("client should build");
        let result: Result<Value, _> = client
            .get_json(&format!("{}/current", mock_server.uri()))
            .await;

        assert!(matches!(result, Err(FetchError::Parse(_))));
    }
}
