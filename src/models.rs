use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Nominatim Geocoding API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

// ============================================================================
// Open-Meteo Archive API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ArchiveResponse {
    pub daily: RawSeries,
}

/// Parallel daily arrays as delivered by the archive.
///
/// The archive reports a missing observation as `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSeries {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
}

impl RawSeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

// ============================================================================
// Domain Models
// ============================================================================

/// A place resolved from a free-text query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodedPlace {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Where the map widget drops its single pin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPin {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

/// One day of the series with its derived averages.
///
/// `None` marks a value that is missing or not yet defined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub year: i32,
    pub t_max: Option<f64>,
    pub t_min: Option<f64>,
    pub t_avg: Option<f64>,
    pub t_avg_year: Option<f64>,
    pub moving_average: Option<f64>,
}

/// Daily records in chronological order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemperatureSeries {
    records: Vec<DailyRecord>,
}

impl TemperatureSeries {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.records.first().map(|r| r.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.records.last().map(|r| r.year)
    }
}

/// Start and end of the smoothed series, rounded to one decimal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub start_value: f64,
    pub end_value: f64,
    pub delta: f64,
    /// `"+"` for a warming trend, empty otherwise
    pub sign: &'static str,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetTemperatureTrendRequest {
    /// Free-text place name, e.g. "Zurich" or "Lisbon, Portugal"
    pub place: Option<String>,
}
