//! Reshapes raw archive arrays into typed daily records with yearly and
//! moving averages.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

use crate::error::TrendError;
use crate::models::{DailyRecord, RawSeries, TemperatureSeries};

/// Builds the temperature series from the raw archive arrays.
///
/// Records keep the order of `raw`, which the moving average relies on.
pub fn transform(raw: RawSeries, window: usize) -> Result<TemperatureSeries, TrendError> {
    let mut records = Vec::with_capacity(raw.len());

    for ((time, t_max), t_min) in raw
        .time
        .iter()
        .zip(raw.temperature_max)
        .zip(raw.temperature_min)
    {
        let date = NaiveDate::parse_from_str(time, "%Y-%m-%d")
            .map_err(|e| TrendError::MalformedResponse(format!("invalid date '{}': {}", time, e)))?;

        records.push(DailyRecord {
            date,
            year: date.year(),
            t_max,
            t_min,
            t_avg: daily_average(t_max, t_min),
            t_avg_year: None,
            moving_average: None,
        });
    }

    let yearly = yearly_averages(&records);
    for record in &mut records {
        record.t_avg_year = yearly.get(&record.year).copied().flatten();
    }

    let averages: Vec<Option<f64>> = records.iter().map(|r| r.t_avg).collect();
    for (record, value) in records.iter_mut().zip(moving_average(&averages, window)) {
        record.moving_average = value;
    }

    let series = TemperatureSeries::new(records);
    tracing::debug!("Transformed {} records with window {}", series.len(), window);
    Ok(series)
}

fn daily_average(t_max: Option<f64>, t_min: Option<f64>) -> Option<f64> {
    Some((t_max? + t_min?) / 2.0)
}

/// Mean of the defined daily averages per year; `None` for a year without any
fn yearly_averages(records: &[DailyRecord]) -> BTreeMap<i32, Option<f64>> {
    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = sums.entry(record.year).or_insert((0.0, 0));
        if let Some(t_avg) = record.t_avg {
            entry.0 += t_avg;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(year, (sum, count))| {
            let mean = (count > 0).then(|| sum / count as f64);
            (year, mean)
        })
        .collect()
}

/// Trailing simple moving average over `window` consecutive values.
///
/// The first `window - 1` positions, and any window holding a missing
/// value, have no average.
pub fn moving_average(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    if window == 0 || values.len() < window {
        return vec![None; values.len()];
    }

    let mut out = vec![None; window - 1];
    out.extend(values.windows(window).map(|w| {
        w.iter()
            .copied()
            .sum::<Option<f64>>()
            .map(|sum| sum / window as f64)
    }));
    out
}
