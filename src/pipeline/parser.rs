//! Result CSV Label Parser
//!
//! Turns the classifier's labeled CSV into a lazy sequence of [`LabelValue`].
//! Plain comma splitting only: the result CSV never needs quote handling, and
//! malformed rows resolve to [`LabelValue::Unrecognized`] instead of failing.

use serde::{Deserialize, Serialize};
use std::str::Split;

use crate::constants::csv::{DELIMITER, LABEL_COLUMN, NEGATIVE_LABEL, POSITIVE_LABEL};

/// Binary classification label of one result row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelValue {
    /// Cyberbullying
    Positive,
    /// Non-cyberbullying
    Negative,
    /// Blank line, missing field or unexpected value
    Unrecognized,
}

impl LabelValue {
    /// Map a raw label field to a value. Surrounding whitespace is ignored.
    pub fn from_field(field: Option<&str>) -> Self {
        match field.map(str::trim) {
            Some(POSITIVE_LABEL) => Self::Positive,
            Some(NEGATIVE_LABEL) => Self::Negative,
            _ => Self::Unrecognized,
        }
    }
}

/// Lazy label sequence over result CSV text.
///
/// Clones iterate independently from the position they were taken at, so a
/// clone taken before iteration replays the whole sequence.
#[derive(Debug, Clone)]
pub struct Labels<'a> {
    lines: Split<'a, char>,
}

impl Iterator for Labels<'_> {
    type Item = LabelValue;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .next()
            .map(|line| LabelValue::from_field(line.split(DELIMITER).nth(LABEL_COLUMN)))
    }
}

/// Parse result CSV text into labels, skipping the header line.
///
/// Header-only or empty input yields an empty sequence. A trailing newline
/// yields one final [`LabelValue::Unrecognized`] for the blank line, so
/// `"text,label\n"` is not empty: it yields that single blank-line label.
/// Aggregation ignores it, and the statistics match the empty sequence.
pub fn parse_labels(text: &str) -> Labels<'_> {
    let mut lines = text.split('\n');
    // header is always present
    lines.next();
    Labels { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_literal_labels() {
        assert_eq!(LabelValue::from_field(Some("1")), LabelValue::Positive);
        assert_eq!(LabelValue::from_field(Some(" 0\r")), LabelValue::Negative);
        assert_eq!(LabelValue::from_field(Some("")), LabelValue::Unrecognized);
        assert_eq!(LabelValue::from_field(Some("yes")), LabelValue::Unrecognized);
        assert_eq!(LabelValue::from_field(Some("10")), LabelValue::Unrecognized);
        assert_eq!(LabelValue::from_field(None), LabelValue::Unrecognized);
    }

    #[test]
    fn test_skips_header() {
        let labels: Vec<_> = parse_labels("text,label\nhello,1\nworld,0").collect();
        assert_eq!(labels, vec![LabelValue::Positive, LabelValue::Negative]);
    }

    #[test]
    fn test_header_only_is_empty() {
        assert_eq!(parse_labels("text,label").count(), 0);
        assert_eq!(parse_labels("").count(), 0);
    }

    #[test]
    fn test_trailing_newline_is_unrecognized() {
        let labels: Vec<_> = parse_labels("text,label\n").collect();
        assert_eq!(labels, vec![LabelValue::Unrecognized]);
    }

    #[test]
    fn test_header_with_newline_aggregates_like_empty() {
        use crate::pipeline::{AggregateStatistics, LabelAggregator};

        let with_newline = LabelAggregator::aggregate(parse_labels("text,label\n"));
        let without = LabelAggregator::aggregate(parse_labels("text,label"));
        assert_eq!(with_newline, without);
        assert_eq!(with_newline, AggregateStatistics::default());
    }

    #[test]
    fn test_malformed_row_does_not_raise() {
        let labels: Vec<_> = parse_labels("text,label\nhello,1\nbroken\nworld,0\n").collect();
        assert_eq!(
            labels,
            vec![
                LabelValue::Positive,
                LabelValue::Unrecognized,
                LabelValue::Negative,
                LabelValue::Unrecognized,
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let labels: Vec<_> = parse_labels("Text,CB_Label\r\nfoo,1\r\nbar,0\r\n").collect();
        assert_eq!(
            labels,
            vec![
                LabelValue::Positive,
                LabelValue::Negative,
                LabelValue::Unrecognized
            ]
        );
    }

    #[test]
    fn test_extra_columns_use_second_field() {
        let labels: Vec<_> = parse_labels("a,b,c\nx,0,1").collect();
        assert_eq!(labels, vec![LabelValue::Negative]);
    }

    #[test]
    fn test_parsing_is_restartable() {
        let text = "text,label\nhello,1\nworld,0\nfoo,1\n";
        let labels = parse_labels(text);
        let first: Vec<_> = labels.clone().collect();
        let second: Vec<_> = labels.collect();
        assert_eq!(first, second);
        assert_eq!(first, parse_labels(text).collect::<Vec<_>>());
    }
}
