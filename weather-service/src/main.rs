use axum::http::HeaderValue;
use common::tracing::{init_tracing, init_tracing_pretty};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

use weather_service::api_client::WeatherstackClient;
use weather_service::config::Config;
use weather_service::handlers::AppState;
use weather_service::store::RecordStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    if config.log_json {
        init_tracing();
    } else {
        init_tracing_pretty();
    }

    if config.weatherstack_access_key.is_empty() {
        warn!("WEATHERSTACK_ACCESS_KEY is not set; provider requests will be rejected");
    }

    let client = Arc::new(WeatherstackClient::new(
        config.weatherstack_url.clone(),
        config.weatherstack_access_key.clone(),
        config.request_timeout,
    )?);
    let store = Arc::new(RecordStore::new());
    let allowed_origin = HeaderValue::from_str(&config.cors_allowed_origin)?;

    let app = weather_service::app(AppState::new(client, store), allowed_origin);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Weather service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Weather service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT, starting graceful shutdown...");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown...");
        },
    }

    warn!("Shutting down gracefully, stored weather records will be discarded");
}
