//! Presentation-adapter seam.
//!
//! The engine never touches a widget tree directly: everything it needs from
//! the presentation layer goes through [`FormView`]. [`MemoryView`] is a
//! headless implementation over in-memory state, used by the tests of every
//! crate in this workspace and usable anywhere no real UI exists.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::ids::FieldId;
use crate::outcome::ValidationOutcome;
use crate::summary::SubmissionSummary;

/// What the engine asks of the presentation layer.
///
/// Methods take `&self`: views are single-threaded UI handles and use
/// interior mutability where they hold state.
pub trait FormView {
    /// Current raw value of a field.
    fn raw_value(&self, field: &FieldId) -> String;

    /// Overwrite a field's displayed value (input formatting, form reset).
    fn set_value(&self, field: &FieldId, value: &str);

    /// Render a field's validity state.
    fn render(&self, field: &FieldId, outcome: &ValidationOutcome);

    /// Remove a field's validity state entirely (focus, reset).
    fn clear(&self, field: &FieldId);

    /// Enable or disable the submission trigger.
    fn set_submit_enabled(&self, enabled: bool);

    /// Update the submission trigger's visible text.
    fn set_submit_label(&self, label: &str);

    /// Number of options currently populated in a select control.
    fn option_count(&self, field: &FieldId) -> usize;

    /// Enable or disable an individual control.
    fn set_field_enabled(&self, field: &FieldId, enabled: bool);

    /// Replace a select control's options with a placeholder plus one option
    /// per name. The placeholder carries no value and is never a selection.
    fn populate_options(&self, field: &FieldId, placeholder: &str, names: &[String]);

    /// Report the success summary to the user.
    fn present_summary(&self, summary: &SubmissionSummary);
}

/// Options currently shown by a select control.
#[derive(Debug, Clone, Default)]
struct SelectState {
    placeholder: String,
    names: Vec<String>,
}

/// In-memory [`FormView`] implementation.
#[derive(Debug, Default)]
pub struct MemoryView {
    values: RefCell<HashMap<FieldId, String>>,
    rendered: RefCell<HashMap<FieldId, ValidationOutcome>>,
    render_counts: RefCell<HashMap<FieldId, usize>>,
    selects: RefCell<HashMap<FieldId, SelectState>>,
    disabled: RefCell<HashMap<FieldId, bool>>,
    submit_enabled: Cell<bool>,
    submit_label: RefCell<String>,
    summaries: RefCell<Vec<SubmissionSummary>>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The validity state a field currently shows, if any.
    pub fn outcome(&self, field: &FieldId) -> Option<ValidationOutcome> {
        self.rendered.borrow().get(field).cloned()
    }

    /// How many times `render` ran for a field.
    pub fn render_count(&self, field: &FieldId) -> usize {
        self.render_counts.borrow().get(field).copied().unwrap_or(0)
    }

    pub fn is_field_enabled(&self, field: &FieldId) -> bool {
        !self.disabled.borrow().get(field).copied().unwrap_or(false)
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled.get()
    }

    pub fn submit_label(&self) -> String {
        self.submit_label.borrow().clone()
    }

    /// Option names of a select control, placeholder excluded.
    pub fn options(&self, field: &FieldId) -> Vec<String> {
        self.selects
            .borrow()
            .get(field)
            .map(|state| state.names.clone())
            .unwrap_or_default()
    }

    pub fn placeholder(&self, field: &FieldId) -> Option<String> {
        self.selects
            .borrow()
            .get(field)
            .map(|state| state.placeholder.clone())
    }

    /// Summaries presented so far.
    pub fn summaries(&self) -> Vec<SubmissionSummary> {
        self.summaries.borrow().clone()
    }
}

impl FormView for MemoryView {
    fn raw_value(&self, field: &FieldId) -> String {
        self.values.borrow().get(field).cloned().unwrap_or_default()
    }

    fn set_value(&self, field: &FieldId, value: &str) {
        self.values
            .borrow_mut()
            .insert(field.clone(), value.to_string());
    }

    fn render(&self, field: &FieldId, outcome: &ValidationOutcome) {
        self.rendered
            .borrow_mut()
            .insert(field.clone(), outcome.clone());
        *self
            .render_counts
            .borrow_mut()
            .entry(field.clone())
            .or_insert(0) += 1;
    }

    fn clear(&self, field: &FieldId) {
        self.rendered.borrow_mut().remove(field);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.submit_enabled.set(enabled);
    }

    fn set_submit_label(&self, label: &str) {
        *self.submit_label.borrow_mut() = label.to_string();
    }

    fn option_count(&self, field: &FieldId) -> usize {
        self.selects
            .borrow()
            .get(field)
            .map(|state| 1 + state.names.len())
            .unwrap_or(0)
    }

    fn set_field_enabled(&self, field: &FieldId, enabled: bool) {
        self.disabled.borrow_mut().insert(field.clone(), !enabled);
    }

    fn populate_options(&self, field: &FieldId, placeholder: &str, names: &[String]) {
        self.selects.borrow_mut().insert(
            field.clone(),
            SelectState {
                placeholder: placeholder.to_string(),
                names: names.to_vec(),
            },
        );
    }

    fn present_summary(&self, summary: &SubmissionSummary) {
        self.summaries.borrow_mut().push(summary.clone());
    }
}
