//! Разбор и форматирование дат, приходящих с сервера
//!
//! Сервер отдаёт RFC 3339 с локальным смещением
//! (`2024-03-15T14:02:26.123456+01:00`), но старые записи и ручные импорты
//! встречаются и в других видах, поэтому разбор терпим к формату.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Подпись для даты, которую не удалось разобрать
pub const INVALID_DATE: &str = "Invalid Date";

/// Разбирает дату в абсолютный момент времени (UTC)
///
/// Поддерживаются:
/// - RFC 3339 с любым смещением
/// - `YYYY-MM-DD` (полночь UTC)
/// - `YYYY-MM-DDTHH:MM:SS[.fff]` без смещения (считается UTC)
/// - строка из цифр: миллисекунды от эпохи
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        let millis = raw.parse::<i64>().ok()?;
        return Utc.timestamp_millis_opt(millis).single();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    None
}

/// Нормализует дату в UTC с миллисекундами: `2024-01-01T00:00:00.000Z`
///
/// Неразбираемое значение превращается в [`INVALID_DATE`].
pub fn to_utc_millis(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => INVALID_DATE.to_string(),
    }
}

/// Format datetime to DD.MM.YYYY HH:MM:SS, keeping the offset the server sent
/// Example: "2024-03-15T14:02:26.123+01:00" -> "15.03.2024 14:02:26"
pub fn format_datetime(raw: &str) -> String {
    format_with(raw, "%d.%m.%Y %H:%M:%S")
}

/// Format date to DD.MM.YYYY
/// Example: "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(raw: &str) -> String {
    format_with(raw, "%d.%m.%Y")
}

fn format_with(raw: &str, pattern: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
        return dt.format(pattern).to_string();
    }
    match parse_timestamp(raw) {
        Some(dt) => dt.format(pattern).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_utc_millis() {
        assert_eq!(to_utc_millis("2024-01-01T00:00:00Z"), "2024-01-01T00:00:00.000Z");
        assert_eq!(
            to_utc_millis("2024-03-15T14:02:26.123456789+01:00"),
            "2024-03-15T13:02:26.123Z"
        );
        assert_eq!(to_utc_millis("2024-01-02"), "2024-01-02T00:00:00.000Z");
        assert_eq!(to_utc_millis("2024-01-02T10:30:00"), "2024-01-02T10:30:00.000Z");
        assert_eq!(to_utc_millis("1704067200000"), "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(to_utc_millis(""), INVALID_DATE);
        assert_eq!(to_utc_millis("yesterday"), INVALID_DATE);
        assert_eq!(to_utc_millis("2024-13-45"), INVALID_DATE);
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123+01:00"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31.12.2024 23:59:59");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "15.03.2024");
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
