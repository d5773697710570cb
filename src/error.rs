/// Errors raised while building a temperature trend
///
/// Nothing in the pipeline retries or recovers; every variant aborts the
/// request it occurred in.
#[derive(Debug, thiserror::Error)]
pub enum TrendError {
    #[error("Invalid place query: {0}")]
    InvalidQuery(String),
    #[error("Place lookup failed: {0}")]
    Lookup(String),
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("No records with a defined moving average")]
    EmptySeries,
}
