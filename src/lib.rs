//! MindWatch Core - Analytics engine for personal wellbeing check-ins
//!
//! Transforms an append-only history of check-in records (mood, stress,
//! sleep, note) into derived wellbeing signals through pure, deterministic
//! functions: a 0-100 score per entry, a consecutive-day streak, windowed
//! trend aggregates, and a short rule-based insight.
//!
//! ## Modules
//!
//! - **score**: single-entry wellbeing score with weighted components
//! - **streak**: consecutive-day streaks and the mood calendar
//! - **window**: trailing windows, averages, period-over-period deviation
//! - **insight**: threshold rules over the recent trend
//! - **store**: the record store adapter, the only stateful boundary
//! - **export**: CSV serialization of the history
//! - **report**: one payload bundling every derived signal for rendering

pub mod error;
pub mod export;
pub mod insight;
pub mod report;
pub mod score;
pub mod store;
pub mod streak;
pub mod types;
pub mod window;

pub use error::EngineError;
pub use insight::insight;
pub use report::{ReportBuilder, WellbeingReport};
pub use score::{ScoreBreakdown, ScoreEngine};
pub use store::{JsonFileStore, MemoryStore, RecordStore};
pub use streak::{longest_streak, mood_calendar, streak, streak_as_of};
pub use types::{CheckIn, CheckInForm, ScoreLabel};
pub use window::{average, period_deviation, trailing_window, trend_series};

/// Engine version embedded in report payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "mindwatch-core";
