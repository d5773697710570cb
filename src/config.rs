use crate::constants::{
    ARCHIVE_API_BASE, ARCHIVE_END_DATE, ARCHIVE_START_DATE, GEOCODER_API_BASE,
    MOVING_AVERAGE_WINDOW,
};

/// Environment variable overriding the geocoder endpoint
pub const GEOCODER_URL_VAR: &str = "TREND_GEOCODER_URL";

/// Environment variable overriding the archive endpoint
pub const ARCHIVE_URL_VAR: &str = "TREND_ARCHIVE_URL";

/// Runtime settings for the trend pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub geocoder_base_url: String,
    pub archive_base_url: String,
    pub start_date: String,
    pub end_date: String,
    pub window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoder_base_url: GEOCODER_API_BASE.to_string(),
            archive_base_url: ARCHIVE_API_BASE.to_string(),
            start_date: ARCHIVE_START_DATE.to_string(),
            end_date: ARCHIVE_END_DATE.to_string(),
            window: MOVING_AVERAGE_WINDOW,
        }
    }
}

impl Config {
    /// Builds the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration, resolving overrides through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(GEOCODER_URL_VAR) {
            config.geocoder_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = non_empty(ARCHIVE_URL_VAR) {
            config.archive_base_url = url.trim_end_matches('/').to_string();
        }
        config
    }

    /// Points both clients at the given base URLs
    #[cfg(test)]
    pub fn with_base_urls(geocoder_base_url: &str, archive_base_url: &str) -> Self {
        Self {
            geocoder_base_url: geocoder_base_url.to_string(),
            archive_base_url: archive_base_url.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.geocoder_base_url, "https://nominatim.openstreetmap.org");
        assert_eq!(config.archive_base_url, "https://archive-api.open-meteo.com/v1");
        assert_eq!(config.start_date, "1940-01-01");
        assert_eq!(config.end_date, "2023-01-01");
        assert_eq!(config.window, 1080);
    }

    #[test]
    fn test_overrides_strip_trailing_slash() {
        let config = Config::from_lookup(|key| match key {
            GEOCODER_URL_VAR => Some("http://localhost:8080/".to_string()),
            ARCHIVE_URL_VAR => Some("http://localhost:9090/v1".to_string()),
            _ => None,
        });
        assert_eq!(config.geocoder_base_url, "http://localhost:8080");
        assert_eq!(config.archive_base_url, "http://localhost:9090/v1");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
    }
}
