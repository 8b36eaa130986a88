//! Числовой текст для таблиц и карточек
//!
//! Значения показываются так же, как их показывал браузерный UI: целые без
//! дробной части, нечисловые результаты деления словами `Infinity` / `NaN`.

/// Форматирует число без фиксированной точности
///
/// # Примеры
///
/// ```
/// use contracts::shared::number_format::format_number;
/// assert_eq!(format_number(2.0), "2");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if let Some(text) = non_finite_text(value) {
        return text.to_string();
    }
    // -0 печатается как 0
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Значение поля записи: отсутствующее или нечисловое поле даёт пустую ячейку
pub fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) if !v.is_nan() => format_number(v),
        _ => String::new(),
    }
}

/// Форматирует число с фиксированным количеством знаков после точки
///
/// Точность берётся из `{:.N}`: округление по точному двоичному значению,
/// точная середина уходит к чётной цифре (`0.125` → `"0.12"`).
///
/// # Примеры
///
/// ```
/// use contracts::shared::number_format::to_fixed;
/// assert_eq!(to_fixed(2.5, 2), "2.50");
/// assert_eq!(to_fixed(f64::NAN, 2), "NaN");
/// ```
pub fn to_fixed(value: f64, decimals: usize) -> String {
    match non_finite_text(value) {
        Some(text) => text.to_string(),
        None => format!("{:.*}", decimals, value),
    }
}

/// Округление до целого, середина всегда вверх (к +∞)
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn non_finite_text(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(12345.678), "12345.678");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(to_fixed(2.5, 2), "2.50");
        assert_eq!(to_fixed(3.875, 2), "3.88");
        assert_eq!(to_fixed(0.125, 2), "0.12");
        assert_eq!(to_fixed(1234.567, 0), "1235");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(2.5)), "2.5");
        assert_eq!(format_optional(Some(f64::NAN)), "");
        assert_eq!(format_optional(None), "");
    }
}
