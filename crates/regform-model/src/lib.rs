//! Shared data model for the registration form engine.
//!
//! Holds the types every other crate agrees on: field identifiers, the
//! validation outcome, engine configuration, the submission summary, and the
//! presentation-adapter seam ([`FormView`]).

pub mod config;
pub mod ids;
pub mod outcome;
pub mod summary;
pub mod view;

pub use config::FormConfig;
pub use ids::{FieldId, fields};
pub use outcome::ValidationOutcome;
pub use summary::{SubmissionSummary, SummaryEntry};
pub use view::{FormView, MemoryView};
