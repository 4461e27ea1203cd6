//! `register` — the single transition from unvalidated input to persisted
//! record.

use chrono::Local;

use crate::{
  error::RegisterError,
  record::{RawEntry, Record, RecordCollection},
  store::RecordStore,
  validate::validate_entry,
};

/// Validate `entry`, normalize it, append it to `collection`, and persist
/// the whole collection through `store`.
///
/// All-or-nothing: on validation failure nothing is mutated and every
/// failing field is reported; on storage failure the append is rolled back
/// so `collection` matches what is on disk and the caller can retry.
pub fn register<S: RecordStore>(
  store: &S,
  collection: &mut RecordCollection,
  entry: &RawEntry,
) -> Result<Record, RegisterError<S::Error>> {
  let reasons = validate_entry(entry);
  if !reasons.is_empty() {
    return Err(RegisterError::Validation(reasons));
  }

  let record = entry.normalize(Local::now().naive_local());
  collection.push(record.clone());

  if let Err(e) = store.save(collection) {
    collection.pop();
    return Err(RegisterError::Storage(e));
  }

  Ok(record)
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use super::*;
  use crate::error::FieldError;

  /// In-memory store that can be told to fail its next save.
  #[derive(Default)]
  struct MemStore {
    saved:     RefCell<Option<RecordCollection>>,
    fail_save: bool,
  }

  #[derive(Debug, thiserror::Error)]
  #[error("save refused")]
  struct SaveRefused;

  impl RecordStore for MemStore {
    type Error = SaveRefused;

    fn load(&self) -> Result<RecordCollection, SaveRefused> {
      Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, collection: &RecordCollection) -> Result<(), SaveRefused> {
      if self.fail_save {
        return Err(SaveRefused);
      }
      *self.saved.borrow_mut() = Some(collection.clone());
      Ok(())
    }
  }

  fn entry(name: &str, id: &str, manager: &str) -> RawEntry {
    RawEntry {
      full_name:    name.into(),
      identifier:   id.into(),
      manager_name: manager.into(),
    }
  }

  #[test]
  fn valid_entry_is_normalized_appended_and_persisted() {
    let store = MemStore::default();
    let mut collection = RecordCollection::new();

    let record =
      register(&store, &mut collection, &entry("Ana Paula", "XYZ0001", "Carlos Souza"))
        .unwrap();

    assert_eq!(record.full_name, "Ana Paula");
    assert_eq!(record.identifier, "XYZ0001");
    assert_eq!(record.manager_name, "Carlos Souza");
    assert!(record.registered_at.is_some());

    assert_eq!(collection.len(), 1);
    assert_eq!(store.load().unwrap(), collection);
  }

  #[test]
  fn lowercase_identifier_fails_citing_identifier() {
    let store = MemStore::default();
    let mut collection = RecordCollection::new();

    let err = register(&store, &mut collection, &entry("joão da silva", "xyz9999", ""))
      .unwrap_err();

    match err {
      RegisterError::Validation(reasons) => {
        assert_eq!(reasons, vec![FieldError::InvalidIdentifier]);
        assert_eq!(reasons[0].field(), "identifier");
      }
      other => panic!("unexpected: {other:?}"),
    }
    assert!(collection.is_empty());
    assert!(store.saved.borrow().is_none());
  }

  #[test]
  fn validation_outcome_is_idempotent() {
    let store = MemStore::default();
    let mut collection = RecordCollection::new();
    let bad = entry("Ana1", "oops", "");

    let first = register(&store, &mut collection, &bad).unwrap_err();
    let second = register(&store, &mut collection, &bad).unwrap_err();
    assert_eq!(format!("{first}"), format!("{second}"));
  }

  #[test]
  fn storage_failure_rolls_back_the_append() {
    let store = MemStore { fail_save: true, ..Default::default() };
    let mut collection = RecordCollection::new();

    let err = register(&store, &mut collection, &entry("Ana Paula", "XYZ0001", ""))
      .unwrap_err();

    assert!(matches!(err, RegisterError::Storage(_)));
    assert!(collection.is_empty());
  }

  #[test]
  fn duplicate_identifiers_are_permitted() {
    // Identifier uniqueness is a soft convention, not a hard invariant.
    let store = MemStore::default();
    let mut collection = RecordCollection::new();

    register(&store, &mut collection, &entry("Ana Paula", "XYZ0001", "")).unwrap();
    register(&store, &mut collection, &entry("Outra Pessoa", "XYZ0001", "")).unwrap();
    assert_eq!(collection.len(), 2);
  }
}
