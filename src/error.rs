//! Error types for MindWatch Core

use thiserror::Error;

/// Errors that can occur at the engine's boundaries.
///
/// The analytics functions themselves never fail: out-of-range fields are
/// clamped and short histories resolve to documented defaults. Errors only
/// arise when constructing entries from raw input, moving records through
/// the store, or serializing data.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No mood selected for check-in")]
    MissingMood,

    #[error("Malformed persisted data: {0}")]
    MalformedData(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Store I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed CSV export: {0}")]
    CsvError(String),
}
