//! Вычисляемые колонки списка показаний
//!
//! Чистые функции над одной записью. Деление на `delta_days == 0` не
//! защищается: `Infinity` / `NaN` доходят до текста ячейки как есть.

use super::aggregate::GasMeterReading;
use crate::shared::number_format::{format_number, round_half_up, to_fixed};

/// Цена газа, евро за м³
pub const PRICE_PER_M3: f64 = 1.55;

/// Подпись валюты в колонке стоимости
pub const CURRENCY_LABEL: &str = "Euro";

/// Значения вычисляемых колонок одной строки
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFields {
    /// Интервал с прошлого показания: `"1 days, 12h"`
    pub duration: String,
    /// м³ в сутки, 2 знака
    pub volume_rate: String,
    /// Евро в сутки, 2 знака + валюта
    pub cost_rate: String,
    /// Серверное среднее, без форматирования
    pub daily_average: Option<f64>,
}

pub fn derive_fields(reading: &GasMeterReading) -> DerivedFields {
    DerivedFields {
        duration: format_duration(reading.delta_days),
        volume_rate: format_volume_rate(reading.delta_counter, reading.delta_days),
        cost_rate: format_cost_rate(reading.delta_counter, reading.delta_days),
        daily_average: reading.daily_average,
    }
}

/// Раскладывает дробное число дней на дни, часы и минуты
///
/// Нулевые части пропускаются, поэтому `0.0` даёт пустую строку.
pub fn format_duration(delta_days: f64) -> String {
    let days = delta_days.floor();
    let fractional_hours = (delta_days - days) * 24.0;
    let hours = fractional_hours.floor();
    let minutes = round_half_up((fractional_hours - hours) * 60.0);

    [(days, " days"), (hours, "h"), (minutes, "m")]
        .into_iter()
        // NaN, как и ноль, не выводится
        .filter(|(value, _)| *value != 0.0 && !value.is_nan())
        .map(|(value, suffix)| format!("{}{}", format_number(value), suffix))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Расход в сутки: delta_counter / delta_days
pub fn consumption_rate(delta_counter: f64, delta_days: f64) -> f64 {
    delta_counter / delta_days
}

pub fn format_volume_rate(delta_counter: f64, delta_days: f64) -> String {
    to_fixed(consumption_rate(delta_counter, delta_days), 2)
}

pub fn format_cost_rate(delta_counter: f64, delta_days: f64) -> String {
    format!(
        "{} {}",
        to_fixed(consumption_rate(delta_counter, delta_days) * PRICE_PER_M3, 2),
        CURRENCY_LABEL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "");
        assert_eq!(format_duration(1.5), "1 days, 12h");
        assert_eq!(format_duration(2.0417), "2 days, 1h");
        assert_eq!(format_duration(2.0), "2 days");
        assert_eq!(format_duration(0.25), "6h");
        assert_eq!(format_duration(1.0 + 1.0 / 24.0 + 30.0 / 1440.0), "1 days, 1h, 30m");
    }

    #[test]
    fn test_format_duration_non_finite() {
        assert_eq!(format_duration(f64::NAN), "");
        assert_eq!(format_duration(f64::INFINITY), "Infinity days");
    }

    #[test]
    fn test_rates() {
        assert_eq!(format_volume_rate(10.0, 4.0), "2.50");
        assert_eq!(format_cost_rate(10.0, 4.0), "3.88 Euro");
    }

    #[test]
    fn test_rates_with_zero_days() {
        assert_eq!(format_volume_rate(5.0, 0.0), "Infinity");
        assert_eq!(format_cost_rate(5.0, 0.0), "Infinity Euro");
        assert_eq!(format_volume_rate(0.0, 0.0), "NaN");
        assert_eq!(format_cost_rate(0.0, 0.0), "NaN Euro");
    }

    #[test]
    fn test_derive_fields_keeps_reading_untouched() {
        let reading: GasMeterReading = serde_json::from_value(serde_json::json!({
            "id": 3, "delta_days": 1.5, "delta_counter": 3, "daily_average": 2.1
        }))
        .unwrap();
        let before = reading.clone();

        let derived = derive_fields(&reading);

        assert_eq!(derived.duration, "1 days, 12h");
        assert_eq!(derived.volume_rate, "2.00");
        assert_eq!(derived.cost_rate, "3.10 Euro");
        assert_eq!(derived.daily_average, Some(2.1));
        assert_eq!(reading, before);
    }
}
