//! Loader protocol tests with deterministic time.

use std::time::Duration;

use regform_model::{FieldId, FormConfig, FormView, MemoryView, fields};
use regform_options::{CountryLoader, LoadError, LoadPhase, OptionSource, Result, fallback_countries};

fn pais() -> FieldId {
    FieldId::from(fields::PAIS)
}

struct StaticSource(Vec<&'static str>);

impl OptionSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<String>> {
        Ok(self.0.iter().map(|name| (*name).to_string()).collect())
    }
}

struct FailingSource;

impl OptionSource for FailingSource {
    async fn fetch(&self) -> Result<Vec<String>> {
        Err(LoadError::Status(500))
    }
}

/// Resolves only far past any configured deadline.
struct SlowSource;

impl OptionSource for SlowSource {
    async fn fetch(&self) -> Result<Vec<String>> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(vec!["Atlantis".to_string()])
    }
}

#[tokio::test(flavor = "current_thread")]
async fn test_success_populates_collated_options() {
    let view = MemoryView::new();
    let source = StaticSource(vec!["Perú", "Argentina", "México", "Bolivia"]);
    let mut loader = CountryLoader::new(source, &FormConfig::default());

    let phase = loader.load(&view).await;

    assert_eq!(phase, LoadPhase::Populated);
    assert_eq!(view.placeholder(&pais()).as_deref(), Some("Elige tu país"));
    assert_eq!(
        view.options(&pais()),
        vec!["Argentina", "Bolivia", "México", "Perú"]
    );
    assert!(view.is_field_enabled(&pais()));
}

#[tokio::test(flavor = "current_thread")]
async fn test_failure_substitutes_fallback_list() {
    let view = MemoryView::new();
    let mut loader = CountryLoader::new(FailingSource, &FormConfig::default());

    let phase = loader.load(&view).await;

    assert_eq!(phase, LoadPhase::FallbackPopulated);
    assert_eq!(
        view.placeholder(&pais()).as_deref(),
        Some("Países (modo manual)")
    );
    assert_eq!(view.options(&pais()), fallback_countries());
    assert!(view.is_field_enabled(&pais()));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn test_timeout_cancels_and_falls_back() {
    let view = MemoryView::new();
    let config = FormConfig::default();
    let mut loader = CountryLoader::new(SlowSource, &config);

    // The 60 s source never beats the 4.5 s deadline.
    let phase = loader.load(&view).await;

    assert_eq!(phase, LoadPhase::FallbackPopulated);
    assert_eq!(view.options(&pais()), fallback_countries());
    assert!(view.is_field_enabled(&pais()));
}

#[tokio::test(flavor = "current_thread")]
async fn test_populated_control_is_left_untouched() {
    let view = MemoryView::new();
    let existing = vec!["Ecuador".to_string(), "Chile".to_string()];
    view.populate_options(&pais(), "Elige tu país", &existing);

    let mut loader = CountryLoader::new(FailingSource, &FormConfig::default());
    let phase = loader.load(&view).await;

    assert_eq!(phase, LoadPhase::Idle);
    assert_eq!(view.options(&pais()), existing);
}
