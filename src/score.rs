//! Wellbeing score computation
//!
//! This module maps one check-in to a 0-100 integer score by combining
//! three normalized components with fixed weights:
//! - mood, scaled from its 0-4 selection to 0-100
//! - inverted stress (lower stress scores higher)
//! - sleep, a triangular function peaking at the ideal night

use serde::{Deserialize, Serialize};

use crate::types::{CheckIn, MOOD_MAX, STRESS_MAX};

/// Weight of the mood component
pub const MOOD_WEIGHT: f64 = 0.50;

/// Weight of the inverted-stress component
pub const STRESS_WEIGHT: f64 = 0.35;

/// Weight of the sleep component
pub const SLEEP_WEIGHT: f64 = 0.15;

/// Sleep duration that scores a full sleep component
pub const IDEAL_SLEEP_HOURS: f64 = 7.5;

/// Sleep hours above this are treated as equal to it
pub const SLEEP_CAP_HOURS: f64 = 12.0;

/// Weighted components behind a score, each on a 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub mood_component: f64,
    pub stress_component: f64,
    pub sleep_component: f64,
    pub total: u8,
}

/// Score engine: a pure mapping from one check-in to a 0-100 score
pub struct ScoreEngine;

impl ScoreEngine {
    /// Compute the wellbeing score for a single entry.
    ///
    /// Out-of-range mood/stress values are clamped into their domains
    /// before scoring, so malformed stored data degrades instead of
    /// failing. The result is always in 0..=100.
    pub fn score(entry: &CheckIn) -> u8 {
        Self::breakdown(entry).total
    }

    /// Compute the score together with its weighted components
    pub fn breakdown(entry: &CheckIn) -> ScoreBreakdown {
        let mood_component = mood_component(entry.mood);
        let stress_component = stress_component(entry.stress);
        let sleep_component = sleep_component(entry.sleep);

        let weighted = mood_component * MOOD_WEIGHT
            + stress_component * STRESS_WEIGHT
            + sleep_component * SLEEP_WEIGHT;
        let total = weighted.round().clamp(0.0, 100.0) as u8;

        ScoreBreakdown {
            mood_component,
            stress_component,
            sleep_component,
            total,
        }
    }
}

/// Mood 0..=4 scaled to 0-100
fn mood_component(mood: u8) -> f64 {
    (mood.min(MOOD_MAX) as f64 / MOOD_MAX as f64) * 100.0
}

/// Inverted stress: 0 stress scores 100, 100 stress scores 0
fn stress_component(stress: u8) -> f64 {
    (STRESS_MAX - stress.min(STRESS_MAX)) as f64
}

/// Triangular sleep score peaking at [`IDEAL_SLEEP_HOURS`].
///
/// Sleep is clamped to [0, 12] first, so anything past 12 hours scores the
/// same as 12; the ramp reaches 0 at 0 hours and would reach 0 again at 15.
fn sleep_component(sleep: f64) -> f64 {
    if !sleep.is_finite() {
        return 0.0;
    }
    let clamped = sleep.clamp(0.0, SLEEP_CAP_HOURS);
    let diff = (clamped - IDEAL_SLEEP_HOURS).abs();
    ((1.0 - diff / IDEAL_SLEEP_HOURS) * 100.0).round().clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(mood: u8, stress: u8, sleep: f64) -> CheckIn {
        CheckIn {
            timestamp: Utc::now(),
            mood,
            stress,
            sleep,
            note: String::new(),
        }
    }

    #[test]
    fn test_great_day_scores_97() {
        // round(100*0.5 + 90*0.35 + 100*0.15) = round(96.5) = 97
        assert_eq!(ScoreEngine::score(&entry(4, 10, 7.5)), 97);
    }

    #[test]
    fn test_worst_day_scores_zero() {
        assert_eq!(ScoreEngine::score(&entry(0, 100, 0.0)), 0);
    }

    #[test]
    fn test_score_stays_in_range_across_domain() {
        for mood in 0..=4u8 {
            for stress in (0..=100u8).step_by(10) {
                for sleep in [0.0, 3.0, 6.0, 7.5, 9.0, 12.0, 20.0] {
                    let score = ScoreEngine::score(&entry(mood, stress, sleep));
                    assert!(score <= 100);
                }
            }
        }
    }

    #[test]
    fn test_monotone_in_mood() {
        let mut prev = 0;
        for mood in 0..=4u8 {
            let score = ScoreEngine::score(&entry(mood, 50, 7.0));
            assert!(score >= prev, "mood {mood} dropped the score");
            prev = score;
        }
    }

    #[test]
    fn test_monotone_in_stress() {
        let mut prev = 100;
        for stress in (0..=100u8).step_by(5) {
            let score = ScoreEngine::score(&entry(2, stress, 7.0));
            assert!(score <= prev, "stress {stress} raised the score");
            prev = score;
        }
    }

    #[test]
    fn test_sleep_peaks_at_ideal() {
        let at_peak = ScoreEngine::score(&entry(2, 50, IDEAL_SLEEP_HOURS));
        for sleep in [0.0, 2.0, 5.0, 6.5, 8.5, 10.0, 12.0] {
            assert!(ScoreEngine::score(&entry(2, 50, sleep)) <= at_peak);
        }
    }

    #[test]
    fn test_oversleep_indistinguishable_from_cap() {
        let at_cap = ScoreEngine::breakdown(&entry(2, 50, 12.0));
        let past_cap = ScoreEngine::breakdown(&entry(2, 50, 16.0));
        assert_eq!(at_cap.sleep_component, past_cap.sleep_component);
    }

    #[test]
    fn test_breakdown_components() {
        let b = ScoreEngine::breakdown(&entry(4, 10, 7.5));
        assert_eq!(b.mood_component, 100.0);
        assert_eq!(b.stress_component, 90.0);
        assert_eq!(b.sleep_component, 100.0);
        assert_eq!(b.total, 97);
    }
}
