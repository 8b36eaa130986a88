//! API utilities for frontend-backend communication
//!
//! Provides the default backend origin and the error type shared by all
//! request helpers.

use thiserror::Error;

/// Get the default base URL for API requests
///
/// The backend serves the compiled UI itself, so the page origin is the
/// backend origin unless `BACKEND_URL` was set at build time
/// (see [`crate::config::AppConfig`]).
///
/// # Returns
/// - Origin like "http://192.168.1.20:8080"
/// - Empty string if window is not available (URLs become relative)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Ошибка запроса к backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Ошибка сети: {0}")]
    Network(String),

    /// Запрос отменён через AbortController (компонент размонтирован)
    #[error("Запрос отменён")]
    Aborted,

    #[error("Ошибка сервера: HTTP {status} ({url})")]
    Status { status: u16, url: String },

    #[error("Ошибка парсинга: {0}")]
    Decode(String),
}

impl ApiError {
    /// Ошибка отправки запроса; отмена распознаётся по имени DOMException
    pub fn from_send(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
            other => ApiError::Network(other.to_string()),
        }
    }

    pub fn from_decode(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => ApiError::Aborted,
            other => ApiError::Decode(other.to_string()),
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, ApiError::Aborted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status {
            status: 404,
            url: "/gasmeterreadings/9".into(),
        };
        assert_eq!(err.to_string(), "Ошибка сервера: HTTP 404 (/gasmeterreadings/9)");
        assert!(ApiError::Aborted.is_aborted());
        assert!(!ApiError::Decode("eof".into()).is_aborted());
    }
}
