//! CSV export
//!
//! Flat tabular serialization of the history for user export. Notes are
//! always quote-wrapped with internal quotes doubled (standard CSV
//! quoting) so embedded commas, quotes, and line breaks survive the trip.

use chrono::{TimeZone, Utc};

use crate::error::EngineError;
use crate::types::CheckIn;

/// Column header of the export format
pub const CSV_HEADER: &str = "timestamp,mood,stress,sleep,note";

/// Serialize the history in store order.
///
/// Timestamps are written as epoch milliseconds; sleep uses the shortest
/// round-trip float representation, so [`from_csv`] reproduces the
/// original tuples exactly.
pub fn to_csv(history: &[CheckIn]) -> String {
    let mut out = String::from(CSV_HEADER);
    for entry in history {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{},{}",
            entry.timestamp.timestamp_millis(),
            entry.mood,
            entry.stress,
            entry.sleep,
            quote(&entry.note)
        ));
    }
    out
}

/// Parse a previously exported document back into records.
///
/// The header row is required. Mood and stress are clamped into their
/// domains on the way in, like any other stored data.
pub fn from_csv(text: &str) -> Result<Vec<CheckIn>, EngineError> {
    let mut records = parse_records(text)?.into_iter();

    match records.next() {
        Some(header) if header.join(",") == CSV_HEADER => {}
        _ => return Err(EngineError::CsvError("missing header row".to_string())),
    }

    let mut history = Vec::new();
    for (i, record) in records.enumerate() {
        let row = i + 2; // 1-based, after the header
        if record.len() != 5 {
            return Err(EngineError::CsvError(format!(
                "row {row}: expected 5 fields, got {}",
                record.len()
            )));
        }

        let millis: i64 = record[0]
            .parse()
            .map_err(|_| EngineError::CsvError(format!("row {row}: bad timestamp")))?;
        let timestamp = Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| EngineError::CsvError(format!("row {row}: bad timestamp")))?;
        let mood: u8 = record[1]
            .parse()
            .map_err(|_| EngineError::CsvError(format!("row {row}: bad mood")))?;
        let stress: u8 = record[2]
            .parse()
            .map_err(|_| EngineError::CsvError(format!("row {row}: bad stress")))?;
        let sleep: f64 = record[3]
            .parse()
            .map_err(|_| EngineError::CsvError(format!("row {row}: bad sleep")))?;

        history.push(CheckIn::new(
            timestamp,
            mood,
            stress,
            sleep,
            record[4].clone(),
        ));
    }
    Ok(history)
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Split the document into records of fields, honoring quoted fields that
/// may contain commas, doubled quotes, and newlines.
fn parse_records(text: &str) -> Result<Vec<Vec<String>>, EngineError> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut record));
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(EngineError::CsvError("unterminated quoted field".to_string()));
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}
