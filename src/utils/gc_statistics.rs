// Descriptive statistics over the GC values of a windowed scan.

use super::windowed_scan::WindowedScan;
use statrs::statistics::Statistics;

/// Mean, median and population standard deviation of a scan's GC values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsSummary {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    /// number of windows the summary was computed from
    pub windows: usize,
}

/// Summarizes the GC values of `scan`.
///
/// Returns `None` when the scan has no samples, so "no data" is never
/// confused with a summary whose values happen to be zero.
///
/// The median is the sorted value at index `N / 2`: for an even number of
/// windows this is the upper of the two middle values, never their average.
/// The standard deviation divides by the number of windows.
pub fn summarize(scan: &WindowedScan) -> Option<StatisticsSummary> {
    if scan.is_empty() {
        return None;
    }
    let mut values: Vec<f64> = scan.gc_values().collect();
    let mean = values.iter().mean();
    let std_dev = values.iter().population_std_dev();

    values.sort_by(f64::total_cmp);
    let median = values[values.len() / 2];

    Some(StatisticsSummary {
        mean,
        median,
        std_dev,
        windows: values.len(),
    })
}
