//! Core types for the MindWatch analytics engine
//!
//! This module defines the check-in record that flows through every engine
//! component, plus the raw form input it is constructed from and the
//! coarse label given to a computed score.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Maximum mood value (0 = very low, 4 = great)
pub const MOOD_MAX: u8 = 4;

/// Maximum stress value (0 = calm, 100 = maximally stressed)
pub const STRESS_MAX: u8 = 100;

/// One user-submitted wellbeing record.
///
/// Records are immutable once created; every derived value (score, streak,
/// insight, aggregates) is recomputed from the full history on demand.
///
/// A history is an ordered sequence of `CheckIn` with non-decreasing
/// timestamps (append order). All "last N" / "most recent" operations in
/// this crate are positional and rely on that precondition; the store
/// adapter sorts on load so callers can trust it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    /// Submission instant, persisted as epoch milliseconds
    #[serde(rename = "ts", with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Mood selection, 0..=4
    pub mood: u8,
    /// Stress slider value, 0..=100
    pub stress: u8,
    /// Hours slept the previous night
    pub sleep: f64,
    /// Free-form note; not used by any analytics, preserved for export
    #[serde(default)]
    pub note: String,
}

impl CheckIn {
    /// Create a record, clamping mood and stress into their domains and
    /// flooring sleep at zero. Stored data edited out-of-band may arrive
    /// out of range; the engine clamps rather than fails.
    pub fn new(timestamp: DateTime<Utc>, mood: u8, stress: u8, sleep: f64, note: String) -> Self {
        Self {
            timestamp,
            mood: mood.min(MOOD_MAX),
            stress: stress.min(STRESS_MAX),
            sleep: if sleep.is_finite() { sleep.max(0.0) } else { 0.0 },
            note,
        }
    }

    /// Local calendar day this record belongs to (time of day discarded)
    pub fn local_day(&self) -> NaiveDate {
        self.timestamp.with_timezone(&Local).date_naive()
    }
}

/// Raw check-in form input as it comes from the UI collaborator.
///
/// Mood arrives from one of five discrete buttons and may be missing when
/// the user never picked one; the sleep field is free text that may not
/// parse as a number.
#[derive(Debug, Clone, Default)]
pub struct CheckInForm {
    pub mood: Option<u8>,
    pub stress: u8,
    pub sleep: String,
    pub note: String,
}

impl CheckInForm {
    /// Build a `CheckIn` stamped at `now`.
    ///
    /// A missing mood rejects the save with [`EngineError::MissingMood`].
    /// An unparsable or negative sleep field defaults to 0 hours; the note
    /// is trimmed.
    pub fn into_check_in(self, now: DateTime<Utc>) -> Result<CheckIn, EngineError> {
        let mood = self.mood.ok_or(EngineError::MissingMood)?;
        let sleep = self.sleep.trim().parse::<f64>().unwrap_or(0.0);
        Ok(CheckIn::new(
            now,
            mood,
            self.stress,
            sleep,
            self.note.trim().to_string(),
        ))
    }
}

/// Coarse wellbeing band for a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLabel {
    Good,
    Fair,
    Low,
}

impl ScoreLabel {
    /// Classify a score: above 70 is Good, above 40 is Fair, else Low
    pub fn for_score(score: u8) -> Self {
        if score > 70 {
            ScoreLabel::Good
        } else if score > 40 {
            ScoreLabel::Fair
        } else {
            ScoreLabel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreLabel::Good => "good",
            ScoreLabel::Fair => "fair",
            ScoreLabel::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_clamps_out_of_range_fields() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 10, 8, 0, 0).unwrap();
        let entry = CheckIn::new(ts, 9, 250, -3.0, String::new());

        assert_eq!(entry.mood, MOOD_MAX);
        assert_eq!(entry.stress, STRESS_MAX);
        assert_eq!(entry.sleep, 0.0);
    }

    #[test]
    fn test_form_rejects_missing_mood() {
        let form = CheckInForm {
            mood: None,
            stress: 40,
            sleep: "7".to_string(),
            note: String::new(),
        };

        let result = form.into_check_in(Utc::now());
        assert!(matches!(result, Err(EngineError::MissingMood)));
    }

    #[test]
    fn test_form_defaults_unparsable_sleep_to_zero() {
        let form = CheckInForm {
            mood: Some(3),
            stress: 20,
            sleep: "eight-ish".to_string(),
            note: "  slept ok  ".to_string(),
        };

        let entry = form.into_check_in(Utc::now()).unwrap();
        assert_eq!(entry.sleep, 0.0);
        assert_eq!(entry.note, "slept ok");
    }

    #[test]
    fn test_serde_round_trip_uses_epoch_millis() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap();
        let entry = CheckIn::new(ts, 3, 25, 7.5, "fine".to_string());

        let json = serde_json::to_string(&entry).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ts"], serde_json::json!(ts.timestamp_millis()));

        let back: CheckIn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_score_labels() {
        assert_eq!(ScoreLabel::for_score(97), ScoreLabel::Good);
        assert_eq!(ScoreLabel::for_score(71), ScoreLabel::Good);
        assert_eq!(ScoreLabel::for_score(70), ScoreLabel::Fair);
        assert_eq!(ScoreLabel::for_score(41), ScoreLabel::Fair);
        assert_eq!(ScoreLabel::for_score(40), ScoreLabel::Low);
        assert_eq!(ScoreLabel::for_score(0), ScoreLabel::Low);
    }
}
