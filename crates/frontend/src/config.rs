//! Runtime configuration of the dashboard.
//!
//! The only setting is the backend base URL. It is taken from the
//! `BACKEND_URL` environment variable at build time (`BACKEND_URL=... trunk build`)
//! and falls back to the origin the page was served from, because the
//! backend also serves the compiled UI.

use crate::shared::api_utils::api_base;
use contracts::domain::a001_gas_meter_reading::{GasMeterReading, ListQuery, ReadingId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    backend_url: String,
}

impl AppConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let url: String = backend_url.into();
        Self {
            backend_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        match option_env!("BACKEND_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(api_base()),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// `GET {backend}/gasmeterreadings?_sort=..&_order=..`
    pub fn readings_url(&self, query: &ListQuery) -> String {
        format!(
            "{}/{}?{}",
            self.backend_url,
            GasMeterReading::collection_name(),
            query.to_query_string()
        )
    }

    /// `{backend}/gasmeterreadings/{id}` (read and delete)
    pub fn reading_url(&self, id: &ReadingId) -> String {
        format!(
            "{}/{}/{}",
            self.backend_url,
            GasMeterReading::collection_name(),
            id.as_string()
        )
    }

    /// `GET {backend}/fetchwithnew`
    pub fn ingestion_url(&self) -> String {
        format!("{}/fetchwithnew", self.backend_url)
    }
}

/// Config provided by [`crate::app::App`].
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::new("http://meter.local:8080/ ");
        assert_eq!(config.backend_url(), "http://meter.local:8080");
    }

    #[test]
    fn test_urls() {
        let config = AppConfig::new("http://meter.local:8080");
        assert_eq!(
            config.readings_url(&ListQuery::chart()),
            "http://meter.local:8080/gasmeterreadings?_sort=date&_order=DESC&_end=800"
        );
        assert_eq!(
            config.reading_url(&ReadingId::new("7")),
            "http://meter.local:8080/gasmeterreadings/7"
        );
        assert_eq!(config.ingestion_url(), "http://meter.local:8080/fetchwithnew");
    }

    #[test]
    fn test_empty_base_gives_relative_urls() {
        let config = AppConfig::new("");
        assert_eq!(config.ingestion_url(), "/fetchwithnew");
    }
}
