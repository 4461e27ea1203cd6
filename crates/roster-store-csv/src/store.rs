//! [`CsvStore`] — the flat-file implementation of [`RecordStore`].

use std::{
  ffi::OsString,
  fs::{File, OpenOptions},
  io,
  path::{Path, PathBuf},
};

use fs2::FileExt as _;
use tempfile::NamedTempFile;

use roster_core::{
  record::{COLUMNS, Record, RecordCollection},
  store::RecordStore,
};

use crate::{Error, Result};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster store backed by a single CSV file.
///
/// The file does not have to exist yet; the first save creates it.
#[derive(Debug, Clone)]
pub struct CsvStore {
  path: PathBuf,
}

impl CsvStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Sibling lock file, e.g. `roster.csv.lock`. Kept separate from the data
  /// file because the data file itself is replaced by rename on save.
  fn lock_path(&self) -> PathBuf {
    let mut name = OsString::from(self.path.as_os_str());
    name.push(".lock");
    PathBuf::from(name)
  }

  fn io_error(&self, source: io::Error) -> Error {
    Error::Io { path: self.path.clone(), source }
  }
}

// ─── Write lock ──────────────────────────────────────────────────────────────

/// Scoped exclusive advisory lock; released on drop, so every exit path of a
/// save — including error paths — unlocks.
struct WriteLock {
  file: File,
}

impl WriteLock {
  fn acquire(path: &Path) -> io::Result<Self> {
    let file = OpenOptions::new()
      .create(true)
      .truncate(false)
      .write(true)
      .open(path)?;
    file.lock_exclusive()?;
    Ok(Self { file })
  }
}

impl Drop for WriteLock {
  fn drop(&mut self) {
    let _ = fs2::FileExt::unlock(&self.file);
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for CsvStore {
  type Error = Error;

  fn load(&self) -> Result<RecordCollection> {
    let file = match File::open(&self.path) {
      Ok(f) => f,
      // Absent file is the legitimate "start empty" case, distinct from
      // corruption.
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        return Ok(RecordCollection::new());
      }
      Err(e) => return Err(self.io_error(e)),
    };

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|source| Error::MalformedRow {
      path: self.path.clone(),
      source,
    })?;
    if headers != &csv::StringRecord::from(COLUMNS.to_vec()) {
      return Err(Error::WrongColumns {
        path:     self.path.clone(),
        expected: COLUMNS.iter().map(|c| c.to_string()).collect(),
        found:    headers.iter().map(str::to_owned).collect(),
      });
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<Record>() {
      records.push(row.map_err(|source| Error::MalformedRow {
        path: self.path.clone(),
        source,
      })?);
    }
    Ok(RecordCollection::from_records(records))
  }

  fn save(&self, collection: &RecordCollection) -> Result<()> {
    let _lock = WriteLock::acquire(&self.lock_path()).map_err(|source| {
      Error::Lock { path: self.lock_path(), source }
    })?;

    // Temp file in the target's directory so the final rename stays on one
    // filesystem.
    let dir = self
      .path
      .parent()
      .filter(|p| !p.as_os_str().is_empty())
      .unwrap_or(Path::new("."));
    let tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;

    {
      // The header is written explicitly so an empty collection still
      // produces a well-formed file.
      let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(tmp.as_file());
      writer.write_record(COLUMNS).map_err(|source| Error::Encode {
        path: self.path.clone(),
        source,
      })?;
      for record in collection {
        writer.serialize(record).map_err(|source| Error::Encode {
          path: self.path.clone(),
          source,
        })?;
      }
      writer.flush().map_err(|e| self.io_error(e))?;
    }

    tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
    tmp.persist(&self.path).map_err(|source| Error::Persist {
      path: self.path.clone(),
      source,
    })?;
    Ok(())
  }
}
