//! hrid: human readable IDs.
//!
//! Converts `u64` numbers, e.g. database keys, into short strings over a configurable alphabet and
//! back. [`conv::Conv`] is the bare codec with optional checksum symbols, [`id::IdConverter`] adds
//! padding, grouping and case folding on top of it.

pub mod conv;
pub mod error;
pub mod id;

pub use conv::Conv;
pub use error::{ConvError, Result};
pub use id::{IdConverter, Options};
