//! Client for the Open-Meteo historical weather archive.

use reqwest::Client;
use std::sync::Arc;

use crate::error::TrendError;
use crate::models::{ArchiveResponse, RawSeries};

#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: Arc<Client>,
    base_url: String,
}

impl ArchiveClient {
    pub fn new(client: Arc<Client>, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Fetches daily max/min temperatures for the coordinates and date range
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        start_date: &str,
        end_date: &str,
    ) -> Result<RawSeries, TrendError> {
        let url = format!("{}/archive", self.base_url);
        tracing::debug!(
            "Fetching archive for {}, {} from {} to {}",
            latitude,
            longitude,
            start_date,
            end_date
        );

        let latitude = latitude.to_string();
        let longitude = longitude.to_string();
        let body = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("start_date", start_date),
                ("end_date", end_date),
                ("timezone", "auto"),
                ("daily", "temperature_2m_max"),
                ("daily", "temperature_2m_min"),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let response: ArchiveResponse = serde_json::from_str(&body)
            .map_err(|e| TrendError::MalformedResponse(format!("archive payload: {}", e)))?;
        let series = response.daily;

        if series.temperature_max.len() != series.len()
            || series.temperature_min.len() != series.len()
        {
            return Err(TrendError::MalformedResponse(format!(
                "daily arrays differ in length (time: {}, max: {}, min: {})",
                series.len(),
                series.temperature_max.len(),
                series.temperature_min.len()
            )));
        }

        if series.is_empty() {
            tracing::warn!("Archive returned no daily records for {}, {}", latitude, longitude);
        } else {
            tracing::info!("Archive returned {} daily records", series.len());
        }
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn archive(server: &MockServer) -> ArchiveClient {
        ArchiveClient::new(Arc::new(Client::new()), &server.uri())
    }

    #[tokio::test]
    async fn test_fetch_daily_series() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/archive"))
            .and(query_param("latitude", "47.37"))
            .and(query_param("longitude", "8.54"))
            .and(query_param("start_date", "1940-01-01"))
            .and(query_param("end_date", "2023-01-01"))
            .and(query_param("timezone", "auto"))
            .and(query_param("daily", "temperature_2m_max"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "latitude": 47.37,
                "longitude": 8.54,
                "timezone": "Europe/Zurich",
                "daily_units": {"time": "iso8601", "temperature_2m_max": "°C"},
                "daily": {
                    "time": ["1940-01-01", "1940-01-02", "1940-01-03"],
                    "temperature_2m_max": [1.5, null, 3.0],
                    "temperature_2m_min": [-2.5, -1.0, 0.0]
                }
            })))
            .mount(&server)
            .await;

        let series = archive(&server)
            .fetch(47.37, 8.54, "1940-01-01", "2023-01-01")
            .await
            .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.time[0], "1940-01-01");
        assert_eq!(series.temperature_max, vec![Some(1.5), None, Some(3.0)]);
        assert_eq!(series.temperature_min, vec![Some(-2.5), Some(-1.0), Some(0.0)]);
    }

    #[tokio::test]
    async fn test_fetch_requests_both_daily_variables() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/archive"))
            .and(query_param("daily", "temperature_2m_min"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "daily": {"time": [], "temperature_2m_max": [], "temperature_2m_min": []}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let series = archive(&server)
            .fetch(0.0, 0.0, "1940-01-01", "2023-01-01")
            .await
            .unwrap();
        assert!(series.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_missing_daily_object() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/archive"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": true,
                "reason": "Parameter 'start_date' is out of allowed range"
            })))
            .mount(&server)
            .await;

        let result = archive(&server)
            .fetch(47.37, 8.54, "1940-01-01", "2023-01-01")
            .await;
        assert!(matches!(result, Err(TrendError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_fetch_unequal_arrays() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/archive"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "daily": {
                    "time": ["1940-01-01", "1940-01-02"],
                    "temperature_2m_max": [1.0],
                    "temperature_2m_min": [0.0, 0.5]
                }
            })))
            .mount(&server)
            .await;

        let result = archive(&server)
            .fetch(47.37, 8.54, "1940-01-01", "2023-01-01")
            .await;
        assert!(matches!(result, Err(TrendError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_fetch_bad_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/archive"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let result = archive(&server)
            .fetch(47.37, 8.54, "1940-01-01", "2023-01-01")
            .await;
        assert!(matches!(result, Err(TrendError::Transport(_))));
    }
}
