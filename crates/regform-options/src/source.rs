//! Remote option sources.

use serde::Deserialize;

use crate::error::{LoadError, Result};

/// A provider of the remote option list.
///
/// Implementations run on the single-threaded runtime; no `Send` bound is
/// required of the returned future.
#[allow(async_fn_in_trait)]
pub trait OptionSource {
    /// Fetch the display names, unordered and unfiltered for order.
    async fn fetch(&self) -> Result<Vec<String>>;
}

/// Record shape of the country endpoint: `[{ "name": { "common": … } }]`.
///
/// Both levels are optional so records lacking a name are filtered out
/// instead of failing the whole payload.
#[derive(Debug, Deserialize)]
struct CountryRecord {
    #[serde(default)]
    name: Option<CountryName>,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    #[serde(default)]
    common: Option<String>,
}

/// Extract the common display names from a country-listing payload.
fn parse_country_names(body: &str) -> Result<Vec<String>> {
    let records: Vec<CountryRecord> = serde_json::from_str(body)?;
    Ok(records
        .into_iter()
        .filter_map(|record| record.name.and_then(|name| name.common))
        .filter(|name| !name.is_empty())
        .collect())
}

/// HTTP source backed by the country-listing endpoint.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl OptionSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.url.as_str()).send().await?;
        if !response.status().is_success() {
            return Err(LoadError::Status(response.status().as_u16()));
        }
        let body = response.text().await?;
        parse_country_names(&body)
    }
}
