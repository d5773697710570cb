//! Declarative line chart of the moving average, emitted as Vega-Lite.

use serde::Serialize;

use crate::constants::{X_AXIS_LABEL, Y_AXIS_LABEL};
use crate::error::TrendError;
use crate::models::DailyRecord;

const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub data: ChartData,
    pub mark: &'static str,
    pub encoding: Encoding,
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub values: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub moving_average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Encoding {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<Scale>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    pub domain: [f64; 2],
    pub zero: bool,
}

/// Interval selection bound to the scales: pan and zoom
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Param {
    pub name: &'static str,
    pub select: Selection,
    pub bind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub encodings: Vec<&'static str>,
}

impl ChartSpec {
    pub fn y_domain(&self) -> Option<[f64; 2]> {
        self.encoding.y.scale.as_ref().map(|s| s.domain)
    }
}

/// Builds the chart over every record with a defined moving average.
///
/// The y domain is widened to whole degrees around the plotted values.
pub fn build_chart<'a, I>(records: I) -> Result<ChartSpec, TrendError>
where
    I: IntoIterator<Item = &'a DailyRecord>,
{
    let values: Vec<ChartPoint> = records
        .into_iter()
        .filter_map(|r| {
            r.moving_average.map(|moving_average| ChartPoint {
                date: r.date.format("%Y-%m-%d").to_string(),
                moving_average,
            })
        })
        .collect();

    if values.is_empty() {
        return Err(TrendError::EmptySeries);
    }

    let (min, max) = values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.moving_average), hi.max(p.moving_average))
    });

    Ok(ChartSpec {
        schema: VEGA_LITE_SCHEMA,
        data: ChartData { values },
        mark: "line",
        encoding: Encoding {
            x: Axis {
                field: "date",
                kind: "temporal",
                title: X_AXIS_LABEL,
                scale: None,
            },
            y: Axis {
                field: "moving_average",
                kind: "quantitative",
                title: Y_AXIS_LABEL,
                scale: Some(Scale {
                    domain: [min.floor(), max.ceil()],
                    zero: false,
                }),
            },
        },
        params: vec![Param {
            name: "zoom",
            select: Selection {
                kind: "interval",
                encodings: vec!["x", "y"],
            },
            bind: "scales",
        }],
    })
}
