//! Label Aggregation
//!
//! Counts positive and negative labels and derives percentages.
//! `total` is the number of recognized labels only; unrecognized rows never
//! reach the denominator.

use serde::{Deserialize, Serialize};

use super::parser::LabelValue;

/// Aggregate counts and percentages for one result set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateStatistics {
    pub total: u64,
    pub positive_count: u64,
    pub negative_count: u64,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
}

impl AggregateStatistics {
    /// Build statistics from recognized counts
    pub fn from_counts(positive_count: u64, negative_count: u64) -> Self {
        let total = positive_count + negative_count;
        Self {
            total,
            positive_count,
            negative_count,
            positive_percentage: percentage(positive_count, total),
            negative_percentage: percentage(negative_count, total),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// Incremental label counter
#[derive(Debug, Clone, Default)]
pub struct LabelAggregator {
    positive: u64,
    negative: u64,
    unrecognized: u64,
}

impl LabelAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a label sequence once and produce statistics
    pub fn aggregate<I>(labels: I) -> AggregateStatistics
    where
        I: IntoIterator<Item = LabelValue>,
    {
        let mut aggregator = Self::new();
        for label in labels {
            aggregator.record(label);
        }
        aggregator.finish()
    }

    pub fn record(&mut self, label: LabelValue) {
        match label {
            LabelValue::Positive => self.positive += 1,
            LabelValue::Negative => self.negative += 1,
            LabelValue::Unrecognized => self.unrecognized += 1,
        }
    }

    /// Rows seen that were neither positive nor negative
    pub fn unrecognized(&self) -> u64 {
        self.unrecognized
    }

    pub fn finish(&self) -> AggregateStatistics {
        AggregateStatistics::from_counts(self.positive, self.negative)
    }
}
