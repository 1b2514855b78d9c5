//! Consistency streak tracking
//!
//! A streak counts consecutive local calendar days with at least one
//! check-in. The history is collapsed to its set of distinct days, so
//! multiple entries on one day count once, and the walk backward stops at
//! the first day-sized gap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::types::CheckIn;

/// Current streak, anchored at the most recent entry's local day.
///
/// Anchoring at the latest entry rather than wall-clock today keeps the
/// result a pure function of the history; callers that want a streak that
/// decays overnight pass today to [`streak_as_of`]. Empty history is 0.
pub fn streak(history: &[CheckIn]) -> u32 {
    match history.last() {
        Some(latest) => streak_as_of(history, latest.local_day()),
        None => 0,
    }
}

/// Streak ending at an explicit calendar day.
///
/// Walks backward from `as_of` one day at a time, counting days present in
/// the history; a day without entries ends the walk. If `as_of` itself has
/// no entry the streak is 0.
pub fn streak_as_of(history: &[CheckIn], as_of: NaiveDate) -> u32 {
    let days = day_set(history);

    let mut count = 0;
    let mut cursor = as_of;
    while days.contains(&cursor) {
        count += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    count
}

/// Longest run of consecutive days anywhere in the history
pub fn longest_streak(history: &[CheckIn]) -> u32 {
    let days = day_set(history);

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for day in days {
        run = match prev {
            Some(p) if p.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }
    longest
}

/// Distinct local calendar days containing at least one entry
fn day_set(history: &[CheckIn]) -> BTreeSet<NaiveDate> {
    history.iter().map(|e| e.local_day()).collect()
}

/// Mood band shown for one calendar-day cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodBand {
    /// No check-in that day
    None,
    /// Mood 0 or 1
    Low,
    /// Mood 2
    Neutral,
    /// Mood 3 or 4
    Good,
}

impl MoodBand {
    fn for_mood(mood: u8) -> Self {
        match mood {
            0 | 1 => MoodBand::Low,
            2 => MoodBand::Neutral,
            _ => MoodBand::Good,
        }
    }
}

/// One cell of the mood calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub band: MoodBand,
}

/// Mood calendar for the `days` days ending at `end` (inclusive), oldest
/// first. Days with several entries take the band of the latest one.
pub fn mood_calendar(history: &[CheckIn], end: NaiveDate, days: u32) -> Vec<CalendarDay> {
    // Last entry per day wins; history is in append order.
    let mut mood_by_day: BTreeMap<NaiveDate, u8> = BTreeMap::new();
    for entry in history {
        mood_by_day.insert(entry.local_day(), entry.mood);
    }

    let mut cells = Vec::with_capacity(days as usize);
    for offset in (0..days as i64).rev() {
        let date = end - chrono::Duration::days(offset);
        let band = mood_by_day
            .get(&date)
            .map(|&m| MoodBand::for_mood(m))
            .unwrap_or(MoodBand::None);
        cells.push(CalendarDay { date, band });
    }
    cells
}
