//! One request's path from a place name to a rendered trend.

use reqwest::Client;
use std::sync::Arc;

use crate::archive::ArchiveClient;
use crate::chart::{build_chart, ChartSpec};
use crate::config::Config;
use crate::constants::MAP_ZOOM;
use crate::error::TrendError;
use crate::geocoder::Geocoder;
use crate::models::{GeocodedPlace, MapPin, TemperatureSeries, TrendSummary};
use crate::series::transform;
use crate::summary::{summarize, trend_records};

/// Everything the presentation layer needs for one place
#[derive(Debug, Clone)]
pub struct TrendReport {
    pub place: GeocodedPlace,
    pub series: TemperatureSeries,
    pub summary: TrendSummary,
    pub chart: ChartSpec,
}

impl TrendReport {
    pub fn map_pin(&self) -> MapPin {
        MapPin {
            latitude: self.place.latitude,
            longitude: self.place.longitude,
            zoom: MAP_ZOOM,
        }
    }
}

/// Stateless composition of geocoder, archive and transformations
#[derive(Debug, Clone)]
pub struct TrendPipeline {
    geocoder: Geocoder,
    archive: ArchiveClient,
    config: Config,
}

impl TrendPipeline {
    pub fn new(client: Arc<Client>, config: Config) -> Self {
        Self {
            geocoder: Geocoder::new(client.clone(), &config.geocoder_base_url),
            archive: ArchiveClient::new(client, &config.archive_base_url),
            config,
        }
    }

    /// Runs geocode, fetch, transform, summarize and chart in order
    pub async fn run(&self, place: &str) -> Result<TrendReport, TrendError> {
        let place = place.trim();
        if place.is_empty() {
            return Err(TrendError::InvalidQuery("place name is empty".to_string()));
        }

        let resolved = self.geocoder.resolve(place).await?;
        let raw = self
            .archive
            .fetch(
                resolved.latitude,
                resolved.longitude,
                &self.config.start_date,
                &self.config.end_date,
            )
            .await?;

        let series = transform(raw, self.config.window)?;
        let summary = summarize(&series)?;
        let chart = build_chart(trend_records(&series))?;
        tracing::debug!(
            "Chart has {} points, y domain {:?}",
            chart.data.values.len(),
            chart.y_domain()
        );

        tracing::info!(
            "Trend for {}: {} \u{00b0}C ({}{} \u{00b0}C)",
            resolved.name,
            summary.end_value,
            summary.sign,
            summary.delta
        );

        Ok(TrendReport {
            place: resolved,
            series,
            summary,
            chart,
        })
    }
}
