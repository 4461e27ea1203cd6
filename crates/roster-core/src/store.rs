//! The `RecordStore` trait.
//!
//! Implemented by storage backends (e.g. `roster-store-csv`). Higher layers
//! depend on this abstraction, not on any concrete backend. The model is
//! deliberately synchronous and single-writer: every save is a full rewrite
//! of the small record set.

use crate::record::RecordCollection;

/// Abstraction over a durable home for the record collection.
pub trait RecordStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the full collection. An absent backing file yields an empty
  /// collection; a present but malformed one must yield an error rather
  /// than silently discarding data.
  fn load(&self) -> Result<RecordCollection, Self::Error>;

  /// Persist the full collection, replacing whatever was stored before.
  /// Must be atomic from the caller's perspective: a crash mid-write never
  /// leaves a partially-written file in place of a valid one.
  fn save(&self, collection: &RecordCollection) -> Result<(), Self::Error>;

  /// Drop every record. All-or-nothing; there is no per-record delete.
  fn clear(&self) -> Result<(), Self::Error> {
    self.save(&RecordCollection::new())
  }
}
