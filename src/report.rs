//! Report assembly
//!
//! Bundles the pure analytics results for one history into a single
//! payload the UI collaborator can render directly: latest score with its
//! breakdown, streaks, insight text, trend aggregates, and chart series.
//! The builder holds nothing but provenance identity; every build is a
//! pure function of the history passed in.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::insight::insight;
use crate::score::{ScoreBreakdown, ScoreEngine};
use crate::streak::{longest_streak, streak};
use crate::types::{CheckIn, ScoreLabel};
use crate::window::{
    average, moods, period_deviation, stresses, trailing_window, trend_series, PeriodDeviation,
    TrendSeries,
};

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Trailing window used for the report's moving averages and deviation
pub const TREND_WINDOW: usize = 7;

/// Report producer metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Snapshot of the most recent entry and its score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestSnapshot {
    pub score: u8,
    pub label: ScoreLabel,
    pub breakdown: ScoreBreakdown,
    pub mood: u8,
    pub stress: u8,
    pub sleep: f64,
}

/// Consistency summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
}

/// Trailing-window aggregates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Mood average over the last [`TREND_WINDOW`] entries
    pub mood_avg: f64,
    /// Stress average over the last [`TREND_WINDOW`] entries
    pub stress_avg: f64,
    /// Period-over-period mood deviation at [`TREND_WINDOW`]
    pub deviation: PeriodDeviation,
}

/// Complete wellbeing report for one history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellbeingReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub generated_at_utc: String,
    /// Absent for an empty history
    pub latest: Option<LatestSnapshot>,
    pub streak: StreakSummary,
    pub insight: String,
    pub trend: TrendSummary,
    pub series: TrendSeries,
}

/// Assembles [`WellbeingReport`] payloads
pub struct ReportBuilder {
    instance_id: String,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    /// Create a builder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create a builder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Build the report for a timestamp-ordered history
    pub fn build(&self, history: &[CheckIn]) -> WellbeingReport {
        let latest = history.last().map(|entry| {
            let breakdown = ScoreEngine::breakdown(entry);
            LatestSnapshot {
                score: breakdown.total,
                label: ScoreLabel::for_score(breakdown.total),
                breakdown,
                mood: entry.mood,
                stress: entry.stress,
                sleep: entry.sleep,
            }
        });

        let recent = trailing_window(history, TREND_WINDOW);
        let trend = TrendSummary {
            mood_avg: average(&moods(recent)),
            stress_avg: average(&stresses(recent)),
            deviation: period_deviation(history, TREND_WINDOW),
        };

        WellbeingReport {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: crate::PRODUCER_NAME.to_string(),
                version: crate::ENGINE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            generated_at_utc: Utc::now().to_rfc3339(),
            latest,
            streak: StreakSummary {
                current: streak(history),
                longest: longest_streak(history),
            },
            insight: insight(history),
            trend,
            series: trend_series(history),
        }
    }

    /// Build and serialize to pretty JSON
    pub fn build_json(&self, history: &[CheckIn]) -> Result<String, EngineError> {
        let report = self.build(history);
        serde_json::to_string_pretty(&report).map_err(EngineError::JsonError)
    }
}
