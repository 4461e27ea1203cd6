//! Field format rules.
//!
//! Validation runs against the raw, untrimmed input; canonical casing and
//! trimming happen later in [`RawEntry::normalize`](crate::record::RawEntry).

use crate::{error::FieldError, record::RawEntry};

/// True iff `text` is non-empty and every character is a Unicode letter or a
/// space. Rejects digits, punctuation, and the empty string.
pub fn validate_name(text: &str) -> bool {
  !text.is_empty() && text.chars().all(|c| c.is_alphabetic() || c == ' ')
}

/// True iff `text` is exactly 3 uppercase ASCII letters followed by exactly
/// 4 ASCII digits — a full-string match, not a substring search.
pub fn validate_identifier(text: &str) -> bool {
  let bytes = text.as_bytes();
  bytes.len() == 7
    && bytes[..3].iter().all(u8::is_ascii_uppercase)
    && bytes[3..].iter().all(u8::is_ascii_digit)
}

/// Check every field of `entry`, returning all failing-field reasons.
///
/// `full_name` and `identifier` are required; `manager_name` is optional but
/// must satisfy the name rules when present. An empty vector means the entry
/// may be normalized and persisted.
pub fn validate_entry(entry: &RawEntry) -> Vec<FieldError> {
  let mut reasons = Vec::new();

  if entry.full_name.trim().is_empty() {
    reasons.push(FieldError::MissingFullName);
  } else if !validate_name(&entry.full_name) {
    reasons.push(FieldError::InvalidFullName);
  }

  if entry.identifier.trim().is_empty() {
    reasons.push(FieldError::MissingIdentifier);
  } else if !validate_identifier(entry.identifier.trim()) {
    reasons.push(FieldError::InvalidIdentifier);
  }

  if !entry.manager_name.trim().is_empty()
    && !validate_name(&entry.manager_name)
  {
    reasons.push(FieldError::InvalidManagerName);
  }

  reasons
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn valid_names_pass() {
    for name in ["Ana", "Ana Paula", "joão da silva", "Érico Veríssimo"] {
      assert!(validate_name(name), "{name:?} should be valid");
    }
  }

  #[test]
  fn names_with_digits_or_punctuation_fail() {
    for name in ["", "Ana1", "Ana-Paula", "Ana.", "O'Brien", "Ana,"] {
      assert!(!validate_name(name), "{name:?} should be invalid");
    }
  }

  #[test]
  fn identifier_exact_format_passes() {
    for id in ["ABC1234", "XYZ0001", "AAA0000", "ZZZ9999"] {
      assert!(validate_identifier(id), "{id:?} should be valid");
    }
  }

  #[test]
  fn identifier_near_misses_fail() {
    for id in ["abc1234", "AB1234", "ABC12345", "ABC123A", "ABC123", " ABC1234", ""] {
      assert!(!validate_identifier(id), "{id:?} should be invalid");
    }
  }

  #[test]
  fn identifier_rejects_non_ascii_prefix() {
    assert!(!validate_identifier("ÃBC1234"));
  }

  #[test]
  fn entry_reasons_enumerate_every_failing_field() {
    let entry = RawEntry {
      full_name:    "Ana2".into(),
      identifier:   "nope".into(),
      manager_name: "b0ss".into(),
    };
    let reasons = validate_entry(&entry);
    assert_eq!(reasons, vec![
      FieldError::InvalidFullName,
      FieldError::InvalidIdentifier,
      FieldError::InvalidManagerName,
    ]);
  }

  #[test]
  fn entry_missing_required_fields() {
    let reasons = validate_entry(&RawEntry::default());
    assert_eq!(reasons, vec![
      FieldError::MissingFullName,
      FieldError::MissingIdentifier,
    ]);
  }

  #[test]
  fn entry_empty_manager_is_fine() {
    let entry = RawEntry {
      full_name:    "Ana Paula".into(),
      identifier:   "XYZ0001".into(),
      manager_name: String::new(),
    };
    assert!(validate_entry(&entry).is_empty());
  }

  #[test]
  fn field_names_map_to_columns() {
    assert_eq!(FieldError::InvalidIdentifier.field(), "identifier");
    assert_eq!(FieldError::MissingFullName.field(), "full_name");
    assert_eq!(FieldError::InvalidManagerName.field(), "manager_name");
  }
}
