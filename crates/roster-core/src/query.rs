//! Read-time queries over a [`RecordCollection`]: filtered views, summary
//! statistics, and the distinct value listings that filter pickers are
//! populated from.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::record::{Record, RecordCollection, timestamp_format};

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Parameters for [`RecordCollection::filtered`].
///
/// Each list is an inclusion set for its field. An empty list means "no
/// restriction on this field", never "match nothing"; the three constraints
/// are AND-combined.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
  pub names:       Vec<String>,
  pub identifiers: Vec<String>,
  pub managers:    Vec<String>,
}

impl RecordFilter {
  pub fn is_unconstrained(&self) -> bool {
    self.names.is_empty()
      && self.identifiers.is_empty()
      && self.managers.is_empty()
  }

  fn matches(&self, record: &Record) -> bool {
    fn field_ok(allowed: &[String], value: &str) -> bool {
      allowed.is_empty() || allowed.iter().any(|v| v == value)
    }

    field_ok(&self.names, &record.full_name)
      && field_ok(&self.identifiers, &record.identifier)
      && field_ok(&self.managers, &record.manager_name)
  }
}

// ─── Stats ───────────────────────────────────────────────────────────────────

/// Summary statistics over a collection, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
  pub total:                usize,
  pub distinct_identifiers: usize,
  /// Distinct non-empty manager names.
  pub distinct_managers:    usize,
  /// Most recent registration; `None` when the collection is empty or no
  /// row carries a timestamp.
  #[serde(with = "timestamp_format")]
  pub latest_registration:  Option<NaiveDateTime>,
}

// ─── Queries ─────────────────────────────────────────────────────────────────

impl RecordCollection {
  /// The sub-sequence of records matching `filter`, in original relative
  /// order.
  pub fn filtered(&self, filter: &RecordFilter) -> RecordCollection {
    RecordCollection::from_records(
      self.iter().filter(|r| filter.matches(r)).cloned().collect(),
    )
  }

  pub fn stats(&self) -> Stats {
    Stats {
      total:                self.len(),
      distinct_identifiers: self.distinct_identifiers().len(),
      distinct_managers:    self.distinct_managers().len(),
      latest_registration:  self.iter().filter_map(|r| r.registered_at).max(),
    }
  }

  /// Sorted distinct full names.
  pub fn distinct_names(&self) -> Vec<String> {
    distinct(self.iter().map(|r| r.full_name.as_str()))
  }

  /// Sorted distinct identifiers.
  pub fn distinct_identifiers(&self) -> Vec<String> {
    distinct(self.iter().map(|r| r.identifier.as_str()))
  }

  /// Sorted distinct non-empty manager names.
  pub fn distinct_managers(&self) -> Vec<String> {
    distinct(
      self
        .iter()
        .map(|r| r.manager_name.as_str())
        .filter(|m| !m.is_empty()),
    )
  }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
  values
    .collect::<BTreeSet<_>>()
    .into_iter()
    .map(str::to_owned)
    .collect()
}
