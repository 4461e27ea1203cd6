//! Core types and trait definitions for the roster record store.
//!
//! This crate is deliberately free of file and terminal dependencies.
//! All other crates depend on it; it depends on nothing but chrono/serde.

pub mod error;
pub mod query;
pub mod record;
pub mod register;
pub mod store;
pub mod validate;

pub use error::{FieldError, RegisterError};
pub use record::{RawEntry, Record, RecordCollection};
pub use register::register;
