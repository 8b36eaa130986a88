//! Терпимая десериализация полей записей
//!
//! Одно кривое поле не должно ронять разбор всей страницы: числа могут прийти
//! строкой, `null` или не прийти вовсе. Используется через
//! `#[serde(deserialize_with = "...")]`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Значение по умолчанию для обязательных числовых полей
pub fn nan() -> f64 {
    f64::NAN
}

/// Число или числовая строка; всё остальное превращается в `NaN`
pub fn number_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64).unwrap_or(f64::NAN))
}

/// Необязательное число: `null`, отсутствие и нечисловой текст дают `None`
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64).filter(|v| !v.is_nan()))
}

/// Строка или число как текст; `null` даёт пустую строку
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => Some(parse_float(s)),
        _ => None,
    }
}

/// Разбирает самое длинное числовое начало строки, как `parseFloat`
///
/// `"12.5 m3"` → `12.5`, `"abc"` → `NaN`.
pub fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    let (sign, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if unsigned.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let candidate: String = text
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .collect();
    let mut end = candidate.len();
    while end > 0 {
        if let Ok(v) = candidate[..end].parse::<f64>() {
            return v;
        }
        end -= 1;
    }
    f64::NAN
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default = "nan", deserialize_with = "number_or_nan")]
        required: f64,
        #[serde(default, deserialize_with = "optional_number")]
        optional: Option<f64>,
        #[serde(default, deserialize_with = "string_or_number")]
        text: String,
    }

    #[test]
    fn test_numbers_and_numeric_strings() {
        let p: Probe =
            serde_json::from_value(json!({"required": "1.5", "optional": 3, "text": 42})).unwrap();
        assert_eq!(p.required, 1.5);
        assert_eq!(p.optional, Some(3.0));
        assert_eq!(p.text, "42");
    }

    #[test]
    fn test_missing_and_null() {
        let p: Probe = serde_json::from_value(json!({"required": null, "text": null})).unwrap();
        assert!(p.required.is_nan());
        assert_eq!(p.optional, None);
        assert_eq!(p.text, "");

        let p: Probe = serde_json::from_value(json!({})).unwrap();
        assert!(p.required.is_nan());
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("12.5 m3"), 12.5);
        assert_eq!(parse_float("  -3e2x"), -300.0);
        assert_eq!(parse_float("7."), 7.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("").is_nan());
    }
}
