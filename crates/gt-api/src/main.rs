//! # gt-api: Binary Entry Point
//!
//! Loads the content catalog, wires the optional dispatch client and the
//! Prometheus recorder, and serves the API on `PORT` (default 8080).

use gt_api::state::{AppConfig, AppState, LogFormat};
use gt_content::Catalog;
use gt_dispatch_client::DispatchClient;

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    init_tracing(config.log_format);

    let catalog = match &config.content_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading content from directory");
            Catalog::from_dir(dir)
        }
        None => Catalog::embedded(),
    }
    .map_err(|e| {
        tracing::error!("Content catalog failed to load: {e}");
        e
    })?;

    let mut state = AppState::new(catalog, config.clone());

    // Forms answer 503 when the dispatch client cannot be built.
    match DispatchClient::from_env() {
        Ok(client) => {
            tracing::info!(base_url = %client.config().base_url, "dispatch API client configured");
            state = state.with_dispatch(client);
        }
        Err(e) => {
            tracing::warn!("Dispatch API client failed to initialize: {e}. Form endpoints will return 503.");
        }
    }

    match gt_api::middleware::metrics::install_recorder() {
        Ok(handle) => state = state.with_metrics(handle),
        Err(e) => tracing::warn!("{e:#}. /metrics will return 503."),
    }

    let app = gt_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Grow Trucking API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
