//! Rule-based trend insights
//!
//! A deterministic text classifier over the recent history: fixed
//! thresholds are evaluated against the trailing-window mood and stress
//! averages plus the latest entry's sleep, and the text of every firing
//! rule is concatenated. No learning, no stored state.

use crate::types::CheckIn;
use crate::window::{average, moods, stresses, trailing_window};

/// Entries required before any substantive insight is produced
pub const MIN_ENTRIES: usize = 3;

/// Trailing window the mood/stress averages are taken over
pub const INSIGHT_WINDOW: usize = 3;

/// Average mood below this fires the low-mood rule
pub const LOW_MOOD_THRESHOLD: f64 = 2.0;

/// Average stress above this fires the high-stress rule
pub const HIGH_STRESS_THRESHOLD: f64 = 70.0;

/// Latest sleep below this many hours fires the low-sleep rule
pub const LOW_SLEEP_THRESHOLD: f64 = 6.0;

const NEED_MORE_DATA: &str = "Need more entries to generate insights.";
const LOW_MOOD_MSG: &str = "Your mood has been low lately. Consider rest or talking to someone. ";
const HIGH_STRESS_MSG: &str =
    "Stress has been high recently. Try breathing exercises or short breaks. ";
const LOW_SLEEP_MSG: &str = "Recent sleep is low — consider adjusting bedtime. ";
const BALANCED_MSG: &str = "You're maintaining a balanced trend. Keep it up!";

/// Summarize the recent trend as a short message.
///
/// Histories shorter than [`MIN_ENTRIES`] always get the fixed
/// need-more-data message; otherwise every rule that fires contributes its
/// text, in rule order, and a quiet history gets the balanced message.
pub fn insight(history: &[CheckIn]) -> String {
    if history.len() < MIN_ENTRIES {
        return NEED_MORE_DATA.to_string();
    }

    let recent = trailing_window(history, INSIGHT_WINDOW);
    let avg_mood = average(&moods(recent));
    let avg_stress = average(&stresses(recent));
    // history is non-empty here
    let latest = &history[history.len() - 1];

    let mut msg = String::new();
    if avg_mood < LOW_MOOD_THRESHOLD {
        msg.push_str(LOW_MOOD_MSG);
    }
    if avg_stress > HIGH_STRESS_THRESHOLD {
        msg.push_str(HIGH_STRESS_MSG);
    }
    if latest.sleep < LOW_SLEEP_THRESHOLD {
        msg.push_str(LOW_SLEEP_MSG);
    }

    if msg.is_empty() {
        BALANCED_MSG.to_string()
    } else {
        msg
    }
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
    fn test_short_history_needs_more_data() {
        assert_eq!(insight(&[]), NEED_MORE_DATA);
        // Extreme values must not change the answer below the minimum.
        let two = vec![entry(0, 100, 0.0), entry(0, 100, 0.0)];
        assert_eq!(insight(&two), NEED_MORE_DATA);
    }

    #[test]
    fn test_balanced_trend() {
        let history = vec![entry(3, 30, 7.5), entry(3, 40, 8.0), entry(4, 20, 7.0)];
        assert_eq!(insight(&history), BALANCED_MSG);
    }

    #[test]
    fn test_low_mood_rule_fires() {
        let history = vec![entry(1, 30, 7.5), entry(1, 30, 8.0), entry(2, 30, 7.0)];
        assert_eq!(insight(&history), LOW_MOOD_MSG);
    }

    #[test]
    fn test_high_stress_rule_fires() {
        let history = vec![entry(3, 80, 7.5), entry(3, 75, 8.0), entry(3, 90, 7.0)];
        assert_eq!(insight(&history), HIGH_STRESS_MSG);
    }

    #[test]
    fn test_low_sleep_uses_latest_entry_only() {
        // Earlier short nights do not fire the rule; the latest one does.
        let rested_last = vec![entry(3, 30, 4.0), entry(3, 30, 4.0), entry(3, 30, 8.0)];
        assert_eq!(insight(&rested_last), BALANCED_MSG);

        let short_last = vec![entry(3, 30, 8.0), entry(3, 30, 8.0), entry(3, 30, 5.0)];
        assert_eq!(insight(&short_last), LOW_SLEEP_MSG);
    }

    #[test]
    fn test_all_rules_concatenate_in_order() {
        let history = vec![entry(0, 90, 4.0), entry(1, 85, 4.5), entry(1, 95, 3.0)];
        let text = insight(&history);
        assert_eq!(
            text,
            format!("{LOW_MOOD_MSG}{HIGH_STRESS_MSG}{LOW_SLEEP_MSG}")
        );
    }

    #[test]
    fn test_window_ignores_older_entries() {
        // Three calm recent entries mask an older stressful stretch.
        let mut history: Vec<CheckIn> = (0..5).map(|_| entry(0, 100, 3.0)).collect();
        history.extend((0..3).map(|_| entry(3, 20, 8.0)));
        assert_eq!(insight(&history), BALANCED_MSG);
    }
}
