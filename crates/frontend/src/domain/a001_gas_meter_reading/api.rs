//! HTTP-вызовы к backend показаний счётчика.
//!
//! Все функции получают [`AppConfig`] явно и возвращают [`ApiError`].

use crate::config::AppConfig;
use crate::shared::api_utils::ApiError;
use contracts::domain::a001_gas_meter_reading::{GasMeterReading, ListQuery, ReadingId};
use gloo_net::http::{Request, Response};
use web_sys::AbortSignal;

/// Страница грида вместе с общим числом записей
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingsPage {
    pub items: Vec<GasMeterReading>,
    pub total: usize,
}

/// Общее число записей из `X-Total-Count`; без заголовка считаем,
/// что сервер вернул всё.
pub fn parse_total(header: Option<String>, fallback: usize) -> usize {
    header
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(fallback)
}

fn ensure_ok(response: &Response, url: &str) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        })
    }
}

/// `GET /gasmeterreadings?_sort&_order&_start&_end` для грида
pub async fn fetch_readings_page(
    config: &AppConfig,
    query: &ListQuery,
) -> Result<ReadingsPage, ApiError> {
    let url = config.readings_url(query);
    log::debug!("Loading readings page: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(ApiError::from_send)?;
    ensure_ok(&response, &url)?;

    let total_header = response.headers().get("X-Total-Count");
    let items: Vec<GasMeterReading> = response.json().await.map_err(ApiError::from_decode)?;
    let total = parse_total(total_header, items.len());

    log::debug!("Received {} readings (total {})", items.len(), total);
    Ok(ReadingsPage { items, total })
}

/// Выборка для графика: последние записи по дате, отменяемая через `signal`
pub async fn fetch_chart_readings(
    config: &AppConfig,
    signal: Option<&AbortSignal>,
) -> Result<Vec<GasMeterReading>, ApiError> {
    let url = config.readings_url(&ListQuery::chart());
    log::debug!("Loading chart readings: {}", url);

    let response = Request::get(&url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(ApiError::from_send)?;
    ensure_ok(&response, &url)?;

    let items: Vec<GasMeterReading> = response.json().await.map_err(ApiError::from_decode)?;
    log::debug!("Received {} chart readings", items.len());
    Ok(items)
}

pub async fn fetch_reading(config: &AppConfig, id: &ReadingId) -> Result<GasMeterReading, ApiError> {
    let url = config.reading_url(id);
    log::debug!("Loading reading: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(ApiError::from_send)?;
    ensure_ok(&response, &url)?;

    response.json().await.map_err(ApiError::from_decode)
}

pub async fn delete_reading(config: &AppConfig, id: &ReadingId) -> Result<(), ApiError> {
    let url = config.reading_url(id);
    log::info!("Deleting reading: {}", url);

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(ApiError::from_send)?;
    ensure_ok(&response, &url)
}

/// Запуск внеочередного снятия показаний (`GET /fetchwithnew`).
///
/// Тело ответа не читается; вызывающий код в любом случае перезагружает страницу.
pub async fn trigger_ingestion(config: &AppConfig) -> Result<(), ApiError> {
    let url = config.ingestion_url();
    log::info!("Triggering ingestion: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(ApiError::from_send)?;
    ensure_ok(&response, &url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_total() {
        assert_eq!(parse_total(Some("42".into()), 10), 42);
        assert_eq!(parse_total(Some(" 7 ".into()), 10), 7);
        assert_eq!(parse_total(Some("n/a".into()), 3), 3);
        assert_eq!(parse_total(None, 5), 5);
    }
}
