//! CSV flat-file backend for the roster record store.
//!
//! The whole collection lives in one human-readable file with a fixed
//! header. Saves are full rewrites, made atomic by writing to a temp file in
//! the same directory and renaming it over the target, and serialized across
//! processes by an advisory lock on a sibling `.lock` file.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::CsvStore;
