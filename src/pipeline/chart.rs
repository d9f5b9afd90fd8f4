//! Chart Data Adapter
//!
//! Maps [`AggregateStatistics`] to the two chart shapes shown on the results
//! view. The serialized form matches what chart.js consumes, so the JSON
//! output can be fed to a browser renderer unchanged.

use serde::Serialize;

use super::aggregate::AggregateStatistics;
use crate::constants::chart::{
    BAR_DATASET_LABEL, NEGATIVE_CATEGORY, NEGATIVE_COLOR, NEGATIVE_HOVER_COLOR,
    POSITIVE_CATEGORY, POSITIVE_COLOR,
};

pub const CATEGORIES: [&str; 2] = [POSITIVE_CATEGORY, NEGATIVE_CATEGORY];
pub const BACKGROUND_COLORS: [&str; 2] = [POSITIVE_COLOR, NEGATIVE_COLOR];
pub const HOVER_COLORS: [&str; 2] = [POSITIVE_COLOR, NEGATIVE_HOVER_COLOR];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Categorical proportion chart
    Pie,
    /// Magnitude comparison chart
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub data: [u64; 2],
    pub background_color: [&'static str; 2],
    pub hover_background_color: [&'static str; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    #[serde(skip)]
    pub kind: ChartKind,
    pub labels: [&'static str; 2],
    pub datasets: Vec<ChartDataset>,
}

impl ChartSeries {
    fn new(kind: ChartKind, label: Option<&'static str>, data: [u64; 2]) -> Self {
        Self {
            kind,
            labels: CATEGORIES,
            datasets: vec![ChartDataset {
                label,
                data,
                background_color: BACKGROUND_COLORS,
                hover_background_color: HOVER_COLORS,
            }],
        }
    }

    /// Value vector of the single dataset
    pub fn values(&self) -> [u64; 2] {
        self.datasets.first().map(|d| d.data).unwrap_or_default()
    }
}

/// Both chart views derived from one statistics value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub pie: ChartSeries,
    pub bar: ChartSeries,
}

impl ChartData {
    pub fn from_statistics(stats: &AggregateStatistics) -> Self {
        let data = [stats.positive_count, stats.negative_count];
        Self {
            pie: ChartSeries::new(ChartKind::Pie, None, data),
            bar: ChartSeries::new(ChartKind::Bar, Some(BAR_DATASET_LABEL), data),
        }
    }
}

impl Default for ChartData {
    fn default() -> Self {
        Self::from_statistics(&AggregateStatistics::default())
    }
}
