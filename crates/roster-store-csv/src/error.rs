//! Error type for `roster-store-csv`.

use std::path::PathBuf;

use thiserror::Error;

/// Read-side variants (`WrongColumns`, `MalformedRow`) mean the file exists
/// but cannot be trusted; the load aborts instead of falling back to an
/// empty collection. Write-side variants (`Io`, `Lock`, `Persist`, `Encode`)
/// leave the previous file contents intact.
#[derive(Debug, Error)]
pub enum Error {
  #[error("{}: expected columns {expected:?}, found {found:?}", .path.display())]
  WrongColumns {
    path:     PathBuf,
    expected: Vec<String>,
    found:    Vec<String>,
  },

  #[error("{}: malformed row: {source}", .path.display())]
  MalformedRow {
    path:   PathBuf,
    source: csv::Error,
  },

  #[error("{}: {source}", .path.display())]
  Io {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("could not lock {}: {source}", .path.display())]
  Lock {
    path:   PathBuf,
    source: std::io::Error,
  },

  #[error("could not replace {}: {source}", .path.display())]
  Persist {
    path:   PathBuf,
    source: tempfile::PersistError,
  },

  #[error("could not encode row for {}: {source}", .path.display())]
  Encode {
    path:   PathBuf,
    source: csv::Error,
  },
}

impl Error {
  /// True for failures of the read/parse side, i.e. the stored file is
  /// present but not in the expected shape.
  pub fn is_read_error(&self) -> bool {
    matches!(self, Self::WrongColumns { .. } | Self::MalformedRow { .. })
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
