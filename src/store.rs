//! Record store adapter
//!
//! The engine's only stateful boundary. The store holds one ordered list
//! of check-in records under a fixed key; the analytics modules take the
//! loaded history by slice and never touch storage themselves.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EngineError;
use crate::types::CheckIn;

/// Fixed storage identifier the record list lives under
pub const STORAGE_KEY: &str = "mindwatch_data_v1";

/// Contract between the engine and whatever holds the record list.
///
/// `load_all` returns the history sorted by timestamp so downstream
/// positional operations ("last N", "most recent") can trust the order
/// even when the backing store was edited out-of-band.
pub trait RecordStore {
    /// Load the full history, oldest first. A missing store is an empty
    /// history, not an error.
    fn load_all(&self) -> Result<Vec<CheckIn>, EngineError>;

    /// Append one record to the history.
    fn append(&mut self, entry: CheckIn) -> Result<(), EngineError>;

    /// Replace the whole history (used by "clear data" flows).
    fn replace_all(&mut self, entries: Vec<CheckIn>) -> Result<(), EngineError>;
}

fn sort_by_timestamp(entries: &mut [CheckIn]) {
    // Stable: entries sharing a timestamp keep their insertion order.
    entries.sort_by_key(|e| e.timestamp);
}

/// In-memory store for tests and embedded callers
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Vec<CheckIn>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<CheckIn>) -> Self {
        Self { entries }
    }
}

impl RecordStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<CheckIn>, EngineError> {
        let mut entries = self.entries.clone();
        sort_by_timestamp(&mut entries);
        Ok(entries)
    }

    fn append(&mut self, entry: CheckIn) -> Result<(), EngineError> {
        self.entries.push(entry);
        Ok(())
    }

    fn replace_all(&mut self, entries: Vec<CheckIn>) -> Result<(), EngineError> {
        self.entries = entries;
        Ok(())
    }
}

/// File-backed store persisting the record list as a JSON array.
///
/// The file is named after [`STORAGE_KEY`] inside the given directory,
/// mirroring the single-key layout of the original local storage.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store rooted in `dir`; the file is created on first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load, treating a malformed payload as an empty history.
    ///
    /// Defensive defaulting is acceptable only here at the adapter
    /// boundary; `load_all` itself still surfaces the parse failure.
    pub fn load_or_default(&self) -> Vec<CheckIn> {
        self.load_all().unwrap_or_default()
    }

    fn read_entries(&self) -> Result<Vec<CheckIn>, EngineError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw)
            .map_err(|e| EngineError::MalformedData(format!("{}: {e}", self.path.display())))
    }

    fn write_entries(&self, entries: &[CheckIn]) -> Result<(), EngineError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<CheckIn>, EngineError> {
        let mut entries = self.read_entries()?;
        sort_by_timestamp(&mut entries);
        Ok(entries)
    }

    fn append(&mut self, entry: CheckIn) -> Result<(), EngineError> {
        let mut entries = self.read_entries()?;
        entries.push(entry);
        self.write_entries(&entries)
    }

    fn replace_all(&mut self, entries: Vec<CheckIn>) -> Result<(), EngineError> {
        self.write_entries(&entries)
    }
}
