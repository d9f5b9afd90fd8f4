//! Terminal rendering of the results view: summary lines plus the
//! proportion (pie) and magnitude (bar) charts drawn as text.

use console::{Style, style};

use crate::pipeline::{AggregateStatistics, ChartSeries};

const FILLED: &str = "█";
const HOLLOW: &str = "░";

/// Terminal style for each category, following the chart palette
/// (solid green, neutral white)
fn category_styles() -> [Style; 2] {
    [Style::new().green(), Style::new().white()]
}

pub fn render_summary(stats: &AggregateStatistics) -> String {
    [
        style("Cyberbullying Analysis").bold().to_string(),
        format!("Total Tweets: {}", stats.total),
        format!(
            "Cyberbullying: {} ({:.2}%)",
            stats.positive_count, stats.positive_percentage
        ),
        format!(
            "Non-Cyberbullying: {} ({:.2}%)",
            stats.negative_count, stats.negative_percentage
        ),
    ]
    .join("\n")
}

/// One strip split by share, followed by a legend
pub fn render_proportion(series: &ChartSeries, width: usize) -> String {
    let values = series.values();
    let total: u64 = values.iter().sum();
    let styles = category_styles();

    let strip = if total == 0 {
        HOLLOW.repeat(width)
    } else {
        let first = ((values[0] as f64 / total as f64) * width as f64).round() as usize;
        let first = first.min(width);
        format!(
            "{}{}",
            styles[0].apply_to(FILLED.repeat(first)),
            styles[1].apply_to(FILLED.repeat(width - first))
        )
    };

    let legend: Vec<String> = series
        .labels
        .iter()
        .zip(values)
        .zip(&styles)
        .map(|((label, value), style)| {
            let share = if total == 0 {
                0.0
            } else {
                value as f64 / total as f64 * 100.0
            };
            format!("{} {} {:.1}%", style.apply_to(FILLED), label, share)
        })
        .collect();

    format!("[{}]\n{}", strip, legend.join("   "))
}

/// One horizontal bar per category scaled to the largest value
pub fn render_bars(series: &ChartSeries, width: usize) -> String {
    let values = series.values();
    let max = values.iter().copied().max().unwrap_or(0);
    let label_width = series.labels.iter().map(|l| l.len()).max().unwrap_or(0);
    let styles = category_styles();

    series
        .labels
        .iter()
        .zip(values)
        .zip(&styles)
        .map(|((label, value), style)| {
            let len = if max == 0 {
                0
            } else {
                ((value as f64 / max as f64) * width as f64).round() as usize
            };
            format!(
                "{:<label_width$} │{} {}",
                label,
                style.apply_to(FILLED.repeat(len)),
                value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ChartData;
    use console::strip_ansi_codes;

    #[test]
    fn test_summary_lines() {
        let stats = AggregateStatistics::from_counts(2, 1);
        let out = strip_ansi_codes(&render_summary(&stats)).to_string();
        assert!(out.contains("Total Tweets: 3"));
        assert!(out.contains("Cyberbullying: 2 (66.67%)"));
        assert!(out.contains("Non-Cyberbullying: 1 (33.33%)"));
    }

    #[test]
    fn test_zero_summary() {
        let out = strip_ansi_codes(&render_summary(&AggregateStatistics::default())).to_string();
        assert!(out.contains("Total Tweets: 0"));
        assert!(out.contains("Cyberbullying: 0 (0.00%)"));
    }

    #[test]
    fn test_proportion_strip_width() {
        let charts = ChartData::from_statistics(&AggregateStatistics::from_counts(1, 3));
        let out = strip_ansi_codes(&render_proportion(&charts.pie, 20)).to_string();
        let strip = out.lines().next().unwrap();
        assert_eq!(strip.chars().filter(|c| *c == '█').count(), 20);
        assert!(out.contains("Cyberbullying 25.0%"));
        assert!(out.contains("Non-Cyberbullying 75.0%"));
    }

    #[test]
    fn test_empty_proportion_is_hollow() {
        let charts = ChartData::default();
        let out = strip_ansi_codes(&render_proportion(&charts.pie, 10)).to_string();
        assert!(out.starts_with(&format!("[{}]", "░".repeat(10))));
    }

    #[test]
    fn test_bars_scale_to_max() {
        let charts = ChartData::from_statistics(&AggregateStatistics::from_counts(4, 2));
        let out = strip_ansi_codes(&render_bars(&charts.bar, 10)).to_string();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(lines[1].chars().filter(|c| *c == '█').count(), 5);
        assert!(lines[0].ends_with(" 4"));
    }

    #[test]
    fn test_bars_with_zero_counts() {
        let charts = ChartData::default();
        let out = strip_ansi_codes(&render_bars(&charts.bar, 10)).to_string();
        assert!(!out.contains('█'));
    }
}
