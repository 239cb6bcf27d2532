use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::series::RollingWindowSeries;

/// Legend labels longer than this are truncated with an ellipsis.
pub const LEGEND_LABEL_MAX: usize = 8;

/// Bar/line chart payload. Labels and values pass through untouched;
/// `has_data` separates "no data yet" from a genuinely zero series so
/// the screen can show an empty state instead of a flat chart.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub has_data: bool,
}

impl ChartData {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        let has_data = values.iter().any(|v| *v != 0.0);
        Self {
            labels,
            values,
            has_data,
        }
    }
}

impl From<RollingWindowSeries> for ChartData {
    fn from(series: RollingWindowSeries) -> Self {
        Self::new(series.labels, series.values)
    }
}

/// A categorical breakdown as the backend reports it, e.g. expenses by
/// category: `{ labels, amounts }`, parallel arrays.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CategoryBreakdown {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub amounts: Vec<f64>,
}

/// Pie chart payload: truncated legend labels, raw values, and each
/// slice's share as a rounded integer percentage.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PieChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub percentages: Vec<i64>,
    pub has_data: bool,
}

impl PieChartData {
    /// Build a pie payload. A zero-sum input yields 0% for every slice
    /// rather than dividing by zero, and is flagged as having no data.
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        let sum: f64 = values.iter().sum();
        let percentages = values
            .iter()
            .map(|v| {
                if sum == 0.0 {
                    0
                } else {
                    (v / sum * 100.0).round() as i64
                }
            })
            .collect();
        let has_data = values.iter().any(|v| *v != 0.0);
        let labels = labels.iter().map(|l| truncate_label(l)).collect();
        Self {
            labels,
            values,
            percentages,
            has_data,
        }
    }
}

impl From<CategoryBreakdown> for PieChartData {
    fn from(breakdown: CategoryBreakdown) -> Self {
        Self::new(breakdown.labels, breakdown.amounts)
    }
}

/// Truncate a legend label to [`LEGEND_LABEL_MAX`] characters plus an
/// ellipsis. Counts characters, not bytes, so multi-byte category names
/// cannot split mid-character.
pub fn truncate_label(name: &str) -> String {
    if name.chars().count() > LEGEND_LABEL_MAX {
        let prefix: String = name.chars().take(LEGEND_LABEL_MAX).collect();
        format!("{prefix}...")
    } else {
        name.to_string()
    }
}
