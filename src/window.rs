//! Windowed aggregates
//!
//! Fixed-size trailing windows over the history, plus the
//! period-over-period mood deviation used for trend reporting. Windows are
//! positional: the history's append-order/timestamp-order precondition
//! stands in for a re-sort.

use serde::{Deserialize, Serialize};

use crate::types::CheckIn;

/// Last `n` entries by position; the whole history when it is shorter.
pub fn trailing_window(history: &[CheckIn], n: usize) -> &[CheckIn] {
    let start = history.len().saturating_sub(n);
    &history[start..]
}

/// Arithmetic mean, 0.0 for an empty slice by convention.
///
/// The empty-input default keeps window callers branch-free; they gate on
/// history length themselves when "no data" must be distinguished.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Period-over-period mood deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodDeviation {
    /// Percentage change of the current window's mood average against the
    /// preceding window's; meaningless when `has_baseline` is false
    pub percent: f64,
    /// False when no entries precede the current window
    pub has_baseline: bool,
}

/// Compare the mood average of the last `window_size` entries against the
/// `window_size` entries immediately before them.
///
/// With no preceding entries at all there is no baseline and `percent` is
/// left at 0. A baseline average of exactly 0 is compared against a
/// denominator of 1 so the deviation stays finite.
pub fn period_deviation(history: &[CheckIn], window_size: usize) -> PeriodDeviation {
    if window_size == 0 || history.len() <= window_size {
        // Everything fits in the current window; nothing precedes it.
        return PeriodDeviation {
            percent: 0.0,
            has_baseline: false,
        };
    }

    let split = history.len() - window_size;
    let current = &history[split..];
    let baseline = &history[split.saturating_sub(window_size)..split];

    let current_avg = average(&moods(current));
    let baseline_avg = average(&moods(baseline));

    let denom = if baseline_avg == 0.0 { 1.0 } else { baseline_avg };
    PeriodDeviation {
        percent: (current_avg - baseline_avg) / denom * 100.0,
        has_baseline: true,
    }
}

/// Per-entry chart series handed to presentation collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Local-date label per entry (YYYY-MM-DD)
    pub labels: Vec<String>,
    pub mood: Vec<u8>,
    pub stress: Vec<u8>,
}

/// Extract the raw mood/stress series with date labels, in store order.
pub fn trend_series(history: &[CheckIn]) -> TrendSeries {
    TrendSeries {
        labels: history
            .iter()
            .map(|e| e.local_day().format("%Y-%m-%d").to_string())
            .collect(),
        mood: history.iter().map(|e| e.mood).collect(),
        stress: history.iter().map(|e| e.stress).collect(),
    }
}

pub(crate) fn moods(entries: &[CheckIn]) -> Vec<f64> {
    entries.iter().map(|e| e.mood as f64).collect()
}

pub(crate) fn stresses(entries: &[CheckIn]) -> Vec<f64> {
    entries.iter().map(|e| e.stress as f64).collect()
}
