use crate::error::TrendError;
use crate::models::{DailyRecord, TemperatureSeries, TrendSummary};

/// Records that carry a usable moving average.
///
/// Only strictly positive averages count, so a rolling mean at or below
/// zero is dropped along with the undefined leading window.
pub fn trend_records(series: &TemperatureSeries) -> Vec<&DailyRecord> {
    series
        .records()
        .iter()
        .filter(|r| r.moving_average.is_some_and(|v| v > 0.0))
        .collect()
}

/// Compares the moving average at the first and last usable dates
pub fn summarize(series: &TemperatureSeries) -> Result<TrendSummary, TrendError> {
    let records = trend_records(series);

    let first = records.iter().min_by_key(|r| r.date);
    let last = records.iter().max_by_key(|r| r.date);
    let (Some(first), Some(last)) = (first, last) else {
        return Err(TrendError::EmptySeries);
    };

    let start_value = round1(first.moving_average.unwrap_or_default());
    let end_value = round1(last.moving_average.unwrap_or_default());
    let delta = round1(end_value - start_value);
    let sign = if delta > 0.0 { "+" } else { "" };

    tracing::debug!(
        "Trend from {} ({}) to {} ({}): {}{}",
        first.date,
        start_value,
        last.date,
        end_value,
        sign,
        delta
    );

    Ok(TrendSummary {
        start_value,
        end_value,
        delta,
        sign,
    })
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
