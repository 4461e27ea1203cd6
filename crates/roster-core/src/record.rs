//! Record — one registered person, plus the collection that holds them.
//!
//! A [`Record`] is only ever constructed from a [`RawEntry`] via
//! [`RawEntry::normalize`], after validation has passed. Once built it is
//! never updated in place; the collection supports append and full clear
//! only.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The fixed column set of the persisted file, in order.
pub const COLUMNS: [&str; 4] =
  ["full_name", "identifier", "manager_name", "registered_at"];

// ─── Record ──────────────────────────────────────────────────────────────────

/// One registered person. Field names double as the CSV column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
  /// Trimmed, title-cased; letters and spaces only.
  pub full_name:     String,
  /// Trimmed, upper-cased; always `[A-Z]{3}[0-9]{4}`. A soft unique key:
  /// uniqueness is encouraged by the format, not enforced.
  pub identifier:    String,
  /// Trimmed, title-cased; empty string when the person has no manager.
  pub manager_name:  String,
  /// Local time, second precision, assigned once at creation. `None` only
  /// for legacy rows read from disk with an empty timestamp field.
  #[serde(with = "timestamp_format")]
  pub registered_at: Option<NaiveDateTime>,
}

// ─── RawEntry ────────────────────────────────────────────────────────────────

/// Unvalidated user-supplied field values, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct RawEntry {
  pub full_name:    String,
  pub identifier:   String,
  /// Optional; treated as absent when empty or whitespace-only.
  pub manager_name: String,
}

impl RawEntry {
  /// Produce the canonical [`Record`] for this entry, registered at `at`.
  ///
  /// Performs no validation — callers must have run
  /// [`validate_entry`](crate::validate::validate_entry) first. `at` is
  /// truncated to second precision to match the stored format.
  pub fn normalize(&self, at: NaiveDateTime) -> Record {
    use chrono::Timelike as _;

    Record {
      full_name:     title_case(self.full_name.trim()),
      identifier:    self.identifier.trim().to_uppercase(),
      manager_name:  title_case(self.manager_name.trim()),
      registered_at: Some(at.with_nanosecond(0).unwrap_or(at)),
    }
  }
}

/// Upper-case the first letter of each space-separated word and lower-case
/// the rest, preserving the spacing as given.
fn title_case(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut at_word_start = true;
  for c in s.chars() {
    if c == ' ' {
      out.push(c);
      at_word_start = true;
    } else if at_word_start {
      out.extend(c.to_uppercase());
      at_word_start = false;
    } else {
      out.extend(c.to_lowercase());
    }
  }
  out
}

// ─── RecordCollection ────────────────────────────────────────────────────────

/// The full set of records for a session: an insertion-ordered sequence,
/// held entirely in memory and reloaded from storage at session start.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordCollection {
  records: Vec<Record>,
}

impl RecordCollection {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_records(records: Vec<Record>) -> Self {
    Self { records }
  }

  pub fn records(&self) -> &[Record] {
    &self.records
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Record> {
    self.records.iter()
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  /// Append a record, preserving insertion order.
  pub fn push(&mut self, record: Record) {
    self.records.push(record);
  }

  /// Undo the most recent append. Used to roll back when persistence fails.
  pub(crate) fn pop(&mut self) -> Option<Record> {
    self.records.pop()
  }
}

impl<'a> IntoIterator for &'a RecordCollection {
  type IntoIter = std::slice::Iter<'a, Record>;
  type Item = &'a Record;

  fn into_iter(self) -> Self::IntoIter {
    self.records.iter()
  }
}

// ─── Timestamp encoding ──────────────────────────────────────────────────────

/// Serde adapter for the stored timestamp format: `YYYY-MM-DD HH:MM:SS`,
/// local time, no offset. An empty field means "missing", never an error.
pub mod timestamp_format {
  use chrono::NaiveDateTime;
  use serde::{Deserialize as _, Deserializer, Serializer, de};

  pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

  pub fn serialize<S: Serializer>(
    value: &Option<NaiveDateTime>,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    match value {
      Some(ts) => serializer.serialize_str(&ts.format(FORMAT).to_string()),
      None => serializer.serialize_str(""),
    }
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<Option<NaiveDateTime>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if raw.trim().is_empty() {
      return Ok(None);
    }
    NaiveDateTime::parse_from_str(raw.trim(), FORMAT)
      .map(Some)
      .map_err(de::Error::custom)
  }
}
