//! Error types for `roster-core`.

use thiserror::Error;

/// A single field-level validation failure.
///
/// Each variant carries a user-facing message; [`FieldError::field`] names
/// the offending column so callers can attach the message to the right
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
  #[error("full name is required")]
  MissingFullName,

  #[error("full name may contain only letters and spaces")]
  InvalidFullName,

  #[error("identifier is required")]
  MissingIdentifier,

  #[error("identifier must be 3 uppercase letters followed by 4 digits (e.g. ABC1234)")]
  InvalidIdentifier,

  #[error("manager name may contain only letters and spaces")]
  InvalidManagerName,
}

impl FieldError {
  /// The column this failure refers to.
  pub fn field(&self) -> &'static str {
    match self {
      Self::MissingFullName | Self::InvalidFullName => "full_name",
      Self::MissingIdentifier | Self::InvalidIdentifier => "identifier",
      Self::InvalidManagerName => "manager_name",
    }
  }
}

/// Outcome of a failed [`register`](crate::register::register) call.
///
/// `Validation` enumerates every failing field, not just the first; nothing
/// has been mutated when it is returned. `Storage` means validation passed
/// but the backend could not persist — the in-memory collection is rolled
/// back so the caller may retry.
#[derive(Debug, Error)]
pub enum RegisterError<E: std::error::Error> {
  #[error("validation failed: {}", join_reasons(.0))]
  Validation(Vec<FieldError>),

  #[error("storage write failed: {0}")]
  Storage(#[from] E),
}

fn join_reasons(reasons: &[FieldError]) -> String {
  reasons
    .iter()
    .map(FieldError::to_string)
    .collect::<Vec<_>>()
    .join("; ")
}
