//! Submission state machine.

/// Trigger text while the simulated submission runs.
pub const SUBMITTING_LABEL: &str = "Enviando datos...";

/// Trigger text at rest.
pub const IDLE_LABEL: &str = "Registrarse";

/// States of the submission lifecycle.
///
/// All work runs on one event-processing thread, so this single flag
/// suffices as the mutual-exclusion guard against overlapping submissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}
