/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-temperature-trend/0.1.0";

/// Nominatim (OpenStreetMap) geocoding API base URL
pub const GEOCODER_API_BASE: &str = "https://nominatim.openstreetmap.org";

/// Open-Meteo historical archive API base URL
pub const ARCHIVE_API_BASE: &str = "https://archive-api.open-meteo.com/v1";

/// First day requested from the archive
pub const ARCHIVE_START_DATE: &str = "1940-01-01";

/// Last day requested from the archive
pub const ARCHIVE_END_DATE: &str = "2023-01-01";

/// Trailing window of the moving average, in records (about three years of days)
pub const MOVING_AVERAGE_WINDOW: usize = 1080;

/// Place shown when the caller does not name one
pub const DEFAULT_PLACE: &str = "Zurich";

/// Zoom level of the map pin
pub const MAP_ZOOM: u8 = 8;

pub const X_AXIS_LABEL: &str = "Date";
pub const Y_AXIS_LABEL: &str = "Average Temperature [\u{00b0}C]";
