//! Country-list loading with timeout and fallback.

use std::time::Duration;

use tracing::{debug, warn};

use regform_model::{FieldId, FormConfig, FormView, fields};

use crate::collate::sort_collated;
use crate::error::LoadError;
use crate::source::OptionSource;

/// Placeholder shown while the fetch is in flight.
const LOADING_PLACEHOLDER: &str = "Obteniendo países...";

/// Placeholder once the remote list is populated.
const LOADED_PLACEHOLDER: &str = "Elige tu país";

/// Placeholder for the embedded fallback list.
const FALLBACK_PLACEHOLDER: &str = "Países (modo manual)";

/// Offline substitute for a failed remote fetch.
const FALLBACK_COUNTRIES: &[&str] = &[
    "Ecuador",
    "Colombia",
    "Perú",
    "Chile",
    "Argentina",
    "México",
    "España",
    "Venezuela",
    "Bolivia",
];

/// The embedded fallback list, collated.
pub fn fallback_countries() -> Vec<String> {
    let mut names: Vec<String> = FALLBACK_COUNTRIES
        .iter()
        .map(|name| (*name).to_string())
        .collect();
    sort_collated(&mut names);
    names
}

/// Phases of the load protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Populated,
    FallbackPopulated,
}

/// Loads the country option list into the consuming select control.
///
/// The whole protocol runs through the [`FormView`] seam: disable the
/// control, show a transient placeholder, populate either the fetched or the
/// fallback list, re-enable the control. The caller re-derives submission
/// readiness afterwards, because submit gating depends on this field.
#[derive(Debug)]
pub struct CountryLoader<S> {
    source: S,
    field: FieldId,
    timeout_ms: u64,
    phase: LoadPhase,
}

impl<S: OptionSource> CountryLoader<S> {
    pub fn new(source: S, config: &FormConfig) -> Self {
        Self {
            source,
            field: FieldId::from(fields::PAIS),
            timeout_ms: config.timeout_ms,
            phase: LoadPhase::Idle,
        }
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Run the load protocol once.
    ///
    /// A control that already carries options beyond its placeholder is left
    /// untouched, so repeated calls are idempotent.
    pub async fn load(&mut self, view: &impl FormView) -> LoadPhase {
        if view.option_count(&self.field) > 1 {
            debug!("select already populated, skipping load");
            return self.phase;
        }

        self.phase = LoadPhase::Loading;
        view.set_field_enabled(&self.field, false);
        view.populate_options(&self.field, LOADING_PLACEHOLDER, &[]);

        let deadline = Duration::from_millis(self.timeout_ms);
        let fetched = match tokio::time::timeout(deadline, self.source.fetch()).await {
            Ok(result) => result,
            // The elapsed deadline drops the fetch future, cancelling any
            // in-flight request.
            Err(_) => Err(LoadError::Timeout(self.timeout_ms)),
        };

        self.phase = match fetched {
            Ok(mut names) => {
                sort_collated(&mut names);
                debug!(count = names.len(), "remote country list populated");
                view.populate_options(&self.field, LOADED_PLACEHOLDER, &names);
                LoadPhase::Populated
            }
            Err(err) => {
                warn!("country fetch failed, using fallback list: {err}");
                view.populate_options(&self.field, FALLBACK_PLACEHOLDER, &fallback_countries());
                LoadPhase::FallbackPopulated
            }
        };

        // Both outcomes re-enable the control.
        view.set_field_enabled(&self.field, true);
        self.phase
    }
}
