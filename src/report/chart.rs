//! Terminal bar chart and JSON report for timing results

use crate::bench::SizeTimingMap;
use console::style;
use serde::Serialize;

/// Maximum bar width in characters
const BAR_WIDTH: usize = 50;

/// One row of a timing report, as serialized in JSON output
#[derive(Debug, Clone, Serialize)]
pub struct TimingEntry {
    /// Input size in characters
    pub size: usize,
    /// Elapsed wall-clock seconds for one digest computation
    pub seconds: f64,
}

/// Flatten a timing map into serializable rows, preserving supply order
pub fn timing_entries(results: &SizeTimingMap) -> Vec<TimingEntry> {
    results
        .iter()
        .map(|(size, elapsed)| TimingEntry {
            size,
            seconds: elapsed.as_secs_f64(),
        })
        .collect()
}

/// Render timing results as a JSON array of `{size, seconds}` rows
pub fn render_json(results: &SizeTimingMap) -> serde_json::Value {
    serde_json::json!(timing_entries(results))
}

/// Render timing results as a horizontal bar chart.
///
/// One row per size, bars scaled so the slowest computation fills
/// [`BAR_WIDTH`] characters. Sizes appear in supply order.
pub fn render_bar_chart(results: &SizeTimingMap, algorithm: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        style(format!("Digest timing by input size ({algorithm})")).bold()
    ));

    if results.is_empty() {
        out.push_str("  (no samples)\n");
        return out;
    }

    let max = results
        .max_elapsed()
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);

    for (size, elapsed) in results.iter() {
        let seconds = elapsed.as_secs_f64();
        let width = if max > 0.0 {
            ((seconds / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "#".repeat(width.max(1));
        out.push_str(&format!("  {size:>10}  {bar:<BAR_WIDTH$}  {seconds:.6}s\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample_map() -> SizeTimingMap {
        let mut map = SizeTimingMap::new();
        map.insert(1000, Duration::from_micros(120));
        map.insert(2000, Duration::from_micros(240));
        map
    }

    #[test]
    fn test_chart_contains_rows_in_order() {
        let chart = render_bar_chart(&sample_map(), "sha256");
        let pos_1000 = chart.find("1000").unwrap();
        let pos_2000 = chart.find("2000").unwrap();
        assert!(pos_1000 < pos_2000);
        assert!(chart.contains("sha256"));
        assert!(chart.contains('#'));
    }

    #[test]
    fn test_chart_handles_empty_map() {
        let chart = render_bar_chart(&SizeTimingMap::new(), "sha256");
        assert!(chart.contains("no samples"));
    }

    #[test]
    fn test_json_rows() {
        let json = render_json(&sample_map());
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["size"], 1000);
        assert!(rows[0]["seconds"].as_f64().unwrap() > 0.0);
    }
}
