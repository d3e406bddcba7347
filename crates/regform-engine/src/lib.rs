//! Validation-and-state engine for the registration form.
//!
//! Evaluates field values against declarative rules, memoizes verdicts so
//! predicates are not re-run for unchanged input, coalesces rapid input
//! events, and guards submission against re-entrancy. Presentation is an
//! external collaborator behind the [`regform_model::FormView`] seam.

pub mod checks;
pub mod controller;
pub mod debounce;
pub mod engine;
pub mod normalize;
pub mod rules;
pub mod submit;

pub use controller::FormController;
pub use debounce::Debouncer;
pub use engine::{CacheEntry, CachePolicy, FormEngine};
pub use normalize::{InputFormat, Normalize, format_national_id, format_phone};
pub use rules::{Rule, RuleKind, RuleRegistry};
pub use submit::{IDLE_LABEL, SUBMITTING_LABEL, SubmissionState};
