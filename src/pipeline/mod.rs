//! Result Pipeline
//!
//! Raw result CSV text → labels → statistics → chart data.
//! Every stage is total: any input produces a value.

pub mod aggregate;
pub mod chart;
pub mod parser;

pub use aggregate::{AggregateStatistics, LabelAggregator};
pub use chart::{ChartData, ChartDataset, ChartKind, ChartSeries};
pub use parser::{LabelValue, Labels, parse_labels};

/// Everything the results view derives from one result CSV
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub statistics: AggregateStatistics,
    pub charts: ChartData,
    /// Rows that were neither "1" nor "0" (blank trailing lines included)
    pub unrecognized: u64,
}

/// Run the full pipeline over result CSV text
pub fn summarize(text: &str) -> Summary {
    let mut aggregator = LabelAggregator::new();
    for label in parse_labels(text) {
        aggregator.record(label);
    }
    let statistics = aggregator.finish();

    Summary {
        charts: ChartData::from_statistics(&statistics),
        statistics,
        unrecognized: aggregator.unrecognized(),
    }
}
