//! Forward geocoding of free-text place names via Nominatim.

use reqwest::Client;
use std::sync::Arc;

use crate::error::TrendError;
use crate::models::{GeocodedPlace, NominatimPlace};

#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Arc<Client>,
    base_url: String,
}

impl Geocoder {
    pub fn new(client: Arc<Client>, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Resolves `place` to the provider's best match
    pub async fn resolve(&self, place: &str) -> Result<GeocodedPlace, TrendError> {
        let url = format!("{}/search", self.base_url);
        tracing::debug!("Geocoding '{}' via {}", place, url);

        let body = self
            .client
            .get(&url)
            .query(&[("q", place), ("limit", "1"), ("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let matches: Vec<NominatimPlace> = serde_json::from_str(&body)
            .map_err(|e| TrendError::Lookup(format!("unreadable geocoder payload: {}", e)))?;

        let best = matches
            .into_iter()
            .next()
            .ok_or_else(|| TrendError::Lookup(format!("no results for '{}'", place)))?;

        let latitude = parse_coordinate(&best.lat, "latitude")?;
        let longitude = parse_coordinate(&best.lon, "longitude")?;
        let (name, country) = split_display_name(&best.display_name);

        tracing::info!("Resolved '{}' to {}, {} ({}, {})", place, name, country, latitude, longitude);

        Ok(GeocodedPlace {
            name,
            country,
            latitude,
            longitude,
        })
    }
}

fn parse_coordinate(raw: &str, field: &str) -> Result<f64, TrendError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| TrendError::Lookup(format!("invalid {} '{}'", field, raw)))
}

/// Splits a display name into (place label, country).
///
/// First comma segment is the label, last one the country. Names whose
/// administrative parts contain commas of their own can mis-split.
pub fn split_display_name(display_name: &str) -> (String, String) {
    let name = display_name.split(',').next().unwrap_or_default().trim();
    let country = display_name.rsplit(',').next().unwrap_or_default().trim();
    (name.to_string(), country.to_string())
}
