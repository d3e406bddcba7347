//! Event-facing controller.
//!
//! Wires the engine, the country loader, and the presentation adapter
//! together: input, blur, change, focus, and submit events all enter here.
//! Shared state lives behind `Rc<RefCell<…>>`: debounced tasks and
//! concurrent submit futures all run on the one event-processing thread.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use regform_model::{FieldId, FormView, SubmissionSummary};
use regform_options::{CountryLoader, HttpSource, LoadPhase, OptionSource};

use crate::debounce::Debouncer;
use crate::engine::{CachePolicy, FormEngine};
use crate::submit::{IDLE_LABEL, SUBMITTING_LABEL};

/// Controller binding one engine instance to one view.
pub struct FormController<V, S = HttpSource> {
    engine: Rc<RefCell<FormEngine>>,
    view: Rc<V>,
    loader: RefCell<CountryLoader<S>>,
    debouncer: RefCell<Debouncer>,
}

impl<V: FormView + 'static> FormController<V, HttpSource> {
    /// Controller over the default HTTP-backed country source.
    pub fn new(engine: FormEngine, view: Rc<V>) -> Self {
        let source = HttpSource::new(engine.config().countries_url.clone());
        Self::with_source(engine, view, source)
    }
}

impl<V: FormView + 'static, S: OptionSource> FormController<V, S> {
    /// Controller over an explicit option source.
    pub fn with_source(engine: FormEngine, view: Rc<V>, source: S) -> Self {
        let loader = CountryLoader::new(source, engine.config());
        let debouncer = Debouncer::new(engine.config().debounce());
        Self {
            engine: Rc::new(RefCell::new(engine)),
            view,
            loader: RefCell::new(loader),
            debouncer: RefCell::new(debouncer),
        }
    }

    /// Handle on the shared engine instance.
    pub fn engine(&self) -> Rc<RefCell<FormEngine>> {
        Rc::clone(&self.engine)
    }

    /// Initialize the form: derive submit readiness, then populate the
    /// country options (which re-derives it once the list is in).
    pub async fn start(&self) {
        self.view.set_submit_label(IDLE_LABEL);
        self.refresh();
        self.load_options().await;
    }

    /// Validate one field immediately (no debounce) and re-derive readiness.
    fn validate_now(&self, field: &FieldId) {
        let mut engine = self.engine.borrow_mut();
        engine.check_field(self.view.as_ref(), field, CachePolicy::Use);
        engine.refresh_submit_state(self.view.as_ref());
    }

    /// High-frequency input event.
    ///
    /// Fields with input formatting are re-formatted and validated
    /// immediately; everything else is coalesced through the debouncer, and
    /// the value is read back from the view when the timer fires, so the
    /// latest event in a burst always wins.
    pub fn on_input(&self, field: &FieldId) {
        let format = self
            .engine
            .borrow()
            .registry()
            .get(field)
            .and_then(|rule| rule.format_on_input);

        if let Some(format) = format {
            let raw = self.view.raw_value(field);
            self.view.set_value(field, &format.apply(&raw));
            self.validate_now(field);
            return;
        }

        let engine = Rc::clone(&self.engine);
        let view = Rc::clone(&self.view);
        let field = field.clone();
        self.debouncer.borrow_mut().trigger(move || {
            let mut engine = engine.borrow_mut();
            engine.check_field(view.as_ref(), &field, CachePolicy::Use);
            engine.refresh_submit_state(view.as_ref());
        });
    }

    /// Leaving a field reflects its true current validity without delay.
    pub fn on_blur(&self, field: &FieldId) {
        self.validate_now(field);
    }

    /// Discrete value change (selects, date control); bypasses the debouncer.
    pub fn on_change(&self, field: &FieldId) {
        self.validate_now(field);
    }

    /// Focus clears the field's error display until the next validation.
    pub fn on_focus(&self, field: &FieldId) {
        self.engine
            .borrow_mut()
            .clear_field(self.view.as_ref(), field);
    }

    /// Re-derive the submission trigger's enabled state.
    pub fn refresh(&self) {
        self.engine
            .borrow_mut()
            .refresh_submit_state(self.view.as_ref());
    }

    /// Populate the country options, then re-derive submission readiness.
    pub async fn load_options(&self) -> LoadPhase {
        // A load already in flight holds the borrow; repeated calls are
        // answered without starting a second protocol run.
        let phase = match self.loader.try_borrow_mut() {
            Ok(mut loader) => loader.load(self.view.as_ref()).await,
            Err(_) => return LoadPhase::Loading,
        };
        self.refresh();
        phase
    }

    /// Run one submission cycle.
    ///
    /// Returns the success summary, or `None` when the call re-entered a
    /// running cycle or when validation failed.
    pub async fn submit(&self) -> Option<SubmissionSummary> {
        if !self.engine.borrow_mut().begin_submission() {
            debug!("submission already in flight, ignoring");
            return None;
        }

        self.view.set_submit_enabled(false);
        self.view.set_submit_label(SUBMITTING_LABEL);

        // Correctness over the cached result: every registered field is
        // re-validated unconditionally, errors rendered.
        let all_valid = {
            let mut engine = self.engine.borrow_mut();
            let ids: Vec<FieldId> = engine.registry().iter().map(|rule| rule.id.clone()).collect();
            let mut all = true;
            for id in &ids {
                all &= engine.check_field(self.view.as_ref(), id, CachePolicy::Bypass);
            }
            all
        };

        let summary = if all_valid {
            let summary = self.engine.borrow().collect_summary(self.view.as_ref());
            let delay = self.engine.borrow().config().submit_delay();
            // Simulated network call; no engine borrow is held here.
            tokio::time::sleep(delay).await;
            self.view.present_summary(&summary);
            self.engine.borrow_mut().reset(self.view.as_ref());
            Some(summary)
        } else {
            None
        };

        self.engine.borrow_mut().end_submission();
        self.view.set_submit_label(IDLE_LABEL);
        self.view.set_submit_enabled(true);
        // The (possibly reset) form re-derives the trigger state.
        self.refresh();

        summary
    }
}
