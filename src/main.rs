mod archive;
mod chart;
mod config;
mod constants;
mod error;
mod formatters;
mod geocoder;
mod models;
mod pipeline;
mod series;
mod service;
mod summary;

use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::service::TemperatureTrend;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_temperature_trend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Starting MCP temperature trend server (geocoder: {}, archive: {})",
        config.geocoder_base_url,
        config.archive_base_url
    );

    let trend = TemperatureTrend::new(config)?;
    let server = trend.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
