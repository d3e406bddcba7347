//! The memoized validation engine.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use tracing::debug;

use regform_model::{
    FieldId, FormConfig, FormView, SubmissionSummary, SummaryEntry, ValidationOutcome,
};

use crate::checks::evaluate;
use crate::rules::RuleRegistry;
use crate::submit::SubmissionState;

/// Memoized verdict for one field.
///
/// Valid only while `value` equals the field's current normalized value; any
/// change replaces the entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Normalized value the verdict was computed for.
    pub value: String,
    pub outcome: ValidationOutcome,
}

/// Whether a validation may reuse the memoized verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Reuse the cached verdict while the normalized value is unchanged.
    Use,
    /// Re-evaluate unconditionally, refreshing the entry. Submission uses
    /// this: a programmatic value change may have bypassed input events.
    Bypass,
}

/// Validation engine: rule registry, validity cache, and submission flag in
/// one instance, constructed at startup and passed by reference to handlers.
#[derive(Debug)]
pub struct FormEngine {
    registry: RuleRegistry,
    config: FormConfig,
    cache: HashMap<FieldId, CacheEntry>,
    state: SubmissionState,
}

impl FormEngine {
    pub fn new(registry: RuleRegistry, config: FormConfig) -> Self {
        Self {
            registry,
            config,
            cache: HashMap::new(),
            state: SubmissionState::Idle,
        }
    }

    /// Engine over the registration form's default rule set.
    pub fn with_default_form(config: FormConfig) -> Self {
        Self::new(RuleRegistry::default_form(), config)
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.state
    }

    /// The memoized entry for a field, if any.
    pub fn cached(&self, field: &FieldId) -> Option<&CacheEntry> {
        self.cache.get(field)
    }

    /// Try to enter the `Submitting` state.
    ///
    /// Returns `false` while a submission is already in flight; the caller
    /// must treat that as a silent no-op.
    pub fn begin_submission(&mut self) -> bool {
        if self.state == SubmissionState::Submitting {
            return false;
        }
        self.state = SubmissionState::Submitting;
        true
    }

    /// Return to `Idle` after a submission cycle.
    pub fn end_submission(&mut self) {
        self.state = SubmissionState::Idle;
    }

    /// Validate a raw value for a field.
    ///
    /// A field without a registered rule is trivially valid, so unknown
    /// fields never block submission.
    pub fn validate_value(
        &mut self,
        field: &FieldId,
        raw: &str,
        policy: CachePolicy,
    ) -> ValidationOutcome {
        self.validate_inner(field, raw, policy).0
    }

    /// Read, validate, and render one field. Returns its validity.
    ///
    /// Rendering happens only on fresh computation: a cache hit leaves the
    /// already-correct display untouched.
    pub fn check_field(
        &mut self,
        view: &impl FormView,
        field: &FieldId,
        policy: CachePolicy,
    ) -> bool {
        let raw = view.raw_value(field);
        let (outcome, fresh) = self.validate_inner(field, &raw, policy);
        if fresh {
            view.render(field, &outcome);
        }
        outcome.is_valid()
    }

    /// Aggregate validity over every registered field.
    ///
    /// Refreshes the cache for every field as a byproduct. Does not render:
    /// readiness queries must not paint errors on untouched fields.
    pub fn overall_valid(&mut self, view: &impl FormView) -> bool {
        let ids: Vec<FieldId> = self.registry.iter().map(|rule| rule.id.clone()).collect();
        let mut all = true;
        for id in &ids {
            let raw = view.raw_value(id);
            let (outcome, _) = self.validate_inner(id, &raw, CachePolicy::Use);
            all &= outcome.is_valid();
        }
        all
    }

    /// Derive the submission trigger's enabled state from aggregate validity.
    pub fn refresh_submit_state(&mut self, view: &impl FormView) {
        let enabled = self.overall_valid(view);
        view.set_submit_enabled(enabled);
    }

    /// Clear a field's visual state and drop its memoized verdict.
    pub fn clear_field(&mut self, view: &impl FormView, field: &FieldId) {
        self.cache.remove(field);
        view.clear(field);
    }

    /// Reset every registered field to its untouched state: empty value, no
    /// visual state, no memoized verdict.
    pub fn reset(&mut self, view: &impl FormView) {
        for rule in self.registry.iter() {
            view.set_value(&rule.id, "");
            view.clear(&rule.id);
        }
        self.cache.clear();
        debug!("form reset");
    }

    /// Collect the labeled values for the success summary, in registry
    /// order. Fields without a rule are excluded.
    pub fn collect_summary(&self, view: &impl FormView) -> SubmissionSummary {
        let entries = self
            .registry
            .iter()
            .map(|rule| SummaryEntry {
                field: rule.id.clone(),
                label: rule.label.clone(),
                value: view.raw_value(&rule.id),
            })
            .collect();
        SubmissionSummary { entries }
    }

    fn validate_inner(
        &mut self,
        field: &FieldId,
        raw: &str,
        policy: CachePolicy,
    ) -> (ValidationOutcome, bool) {
        let Some(rule) = self.registry.get(field) else {
            return (ValidationOutcome::Valid, false);
        };
        let normalized = rule.normalize.apply(raw);

        if policy == CachePolicy::Use {
            if let Some(entry) = self.cache.get(field) {
                if entry.value == normalized {
                    debug!(field = %field, "validity cache hit");
                    return (entry.outcome.clone(), false);
                }
            }
        }

        let evaluated = evaluate(&rule.kind, &normalized, &rule.message, today());
        // A required field with an empty normalized value is always invalid,
        // whatever the rule itself would accept.
        let outcome = if rule.required && normalized.is_empty() && evaluated.is_valid() {
            ValidationOutcome::invalid(rule.message.clone())
        } else {
            evaluated
        };

        self.cache.insert(
            field.clone(),
            CacheEntry {
                value: normalized,
                outcome: outcome.clone(),
            },
        );
        (outcome, true)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
