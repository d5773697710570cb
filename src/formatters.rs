use crate::chart::ChartSpec;
use crate::pipeline::TrendReport;

/// Formats a trend report as the dashboard's text panel
pub fn format_trend(report: &TrendReport) -> String {
    let first_year = report.series.first_year().unwrap_or_default();
    let last_year = report.series.last_year().unwrap_or_default();
    let place = &report.place;
    let summary = &report.summary;
    let pin = report.map_pin();

    let mut output = format!("Temperature Change {}-{}\n\n", first_year, last_year);
    output.push_str(&format!("Place: {}, {}\n", place.name, place.country));
    output.push_str(&format!(
        "Map: {:.4}, {:.4} (zoom {})\n\n",
        pin.latitude, pin.longitude, pin.zoom
    ));
    output.push_str(&format!(
        "Average temperature {}: {:.1}\u{00b0}C ({:.1}\u{00b0}C since {})\n",
        last_year, summary.end_value, summary.delta, first_year
    ));
    output.push_str(&format!(
        "The average temperature in {} changed by {}{:.1}\u{00b0}C since {}.\n\n",
        place.name, summary.sign, summary.delta, first_year
    ));
    output.push_str("Definitions: As average, the three year moving average is shown.\n");
    output
}

/// Serializes the chart for the rendering client
pub fn format_chart(chart: &ChartSpec) -> serde_json::Result<String> {
    serde_json::to_string_pretty(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_chart;
    use crate::models::{DailyRecord, GeocodedPlace, TemperatureSeries, TrendSummary};
    use chrono::{Datelike, NaiveDate};

    fn record(year: i32, moving_average: f64) -> DailyRecord {
        let date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        DailyRecord {
            date,
            year: date.year(),
            t_max: None,
            t_min: None,
            t_avg: None,
            t_avg_year: None,
            moving_average: Some(moving_average),
        }
    }

    fn report(start: f64, end: f64, delta: f64, sign: &'static str) -> TrendReport {
        let series = TemperatureSeries::new(vec![record(1940, start), record(2023, end)]);
        let chart = build_chart(series.records()).unwrap();
        TrendReport {
            place: GeocodedPlace {
                name: "Zürich".to_string(),
                country: "Schweiz/Suisse/Svizzera/Svizra".to_string(),
                latitude: 47.3744489,
                longitude: 8.5410422,
            },
            series,
            summary: TrendSummary {
                start_value: start,
                end_value: end,
                delta,
                sign,
            },
            chart,
        }
    }

    #[test]
    fn test_format_warming_trend() {
        let text = format_trend(&report(8.6, 10.4, 1.8, "+"));

        assert!(text.starts_with("Temperature Change 1940-2023\n"));
        assert!(text.contains("Place: Zürich, Schweiz/Suisse/Svizzera/Svizra\n"));
        assert!(text.contains("Map: 47.3744, 8.5410 (zoom 8)"));
        assert!(text.contains("Average temperature 2023: 10.4°C (1.8°C since 1940)"));
        assert!(text.contains("The average temperature in Zürich changed by +1.8°C since 1940."));
        assert!(text.contains("three year moving average"));
    }

    #[test]
    fn test_format_cooling_trend() {
        let text = format_trend(&report(10.0, 9.5, -0.5, ""));

        assert!(text.contains("(-0.5°C since 1940)"));
        assert!(text.contains("changed by -0.5°C since 1940."));
    }

    #[test]
    fn test_format_chart_is_json() {
        let chart = report(8.6, 10.4, 1.8, "+").chart;
        let json: serde_json::Value = serde_json::from_str(&format_chart(&chart).unwrap()).unwrap();

        assert_eq!(json["mark"], "line");
        assert_eq!(json["data"]["values"].as_array().map(Vec::len), Some(2));
    }
}
