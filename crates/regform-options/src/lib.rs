//! Asynchronous option-list loading.
//!
//! Fetches the remote country enumeration under a bounded timeout, collates
//! the names, and falls back to an embedded list on any failure. Failure is
//! silent to the end user beyond the fallback placeholder text.

pub mod collate;
pub mod error;
pub mod loader;
pub mod source;

pub use collate::{collation_key, sort_collated};
pub use error::{LoadError, Result};
pub use loader::{CountryLoader, LoadPhase, fallback_countries};
pub use source::{HttpSource, OptionSource};
