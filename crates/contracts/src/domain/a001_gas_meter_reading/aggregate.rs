use crate::domain::common::{AggregateId, AggregateRoot};
use crate::shared::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// ID показания счётчика
///
/// Сервер отдаёт числовой автоинкремент, но клиенту важен только текст для
/// URL, поэтому принимается и число, и строка.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ReadingId(pub String);

impl ReadingId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ReadingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient::string_or_number(deserializer).map(ReadingId)
    }
}

impl AggregateId for ReadingId {
    fn as_string(&self) -> String {
        self.0.clone()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Empty reading id".into());
        }
        Ok(ReadingId::new(trimmed))
    }
}

impl fmt::Display for ReadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Показание газового счётчика (агрегат a001)
///
/// Все производные поля (`delta_*`, `daily_average`, `average_since_last`)
/// считает сервер при сохранении; клиент только читает их.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasMeterReading {
    #[serde(default)]
    pub id: ReadingId,

    /// Момент снимка, как пришёл с сервера (обычно RFC 3339 со смещением)
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub date: String,

    /// Показание счётчика, м³
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub measurement: Option<f64>,

    /// Дней с предыдущего показания (дробное)
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number_or_nan")]
    pub delta_days: f64,

    /// Расход с предыдущего показания, м³
    #[serde(default = "lenient::nan", deserialize_with = "lenient::number_or_nan")]
    pub delta_counter: f64,

    /// Средний расход в сутки за последние >24 часа
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub daily_average: Option<f64>,

    /// Снимок счётчика (data URI)
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub image_data: String,

    /// Распознанный текст со снимка
    #[serde(default, deserialize_with = "lenient::string_or_number")]
    pub ocr_data: String,

    /// Средняя яркость снимка
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub brightness: Option<f64>,

    /// delta_counter / delta_days по версии сервера
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub average_since_last: Option<f64>,
}

impl GasMeterReading {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn has_image(&self) -> bool {
        !self.image_data.trim().is_empty()
    }
}

impl AggregateRoot for GasMeterReading {
    type Id = ReadingId;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "gasmeterreadings"
    }

    fn element_name() -> &'static str {
        "Gas Meter Reading"
    }

    fn list_name() -> &'static str {
        "Gas Meter Readings"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_server_record() {
        let reading: GasMeterReading = serde_json::from_value(json!({
            "id": 17,
            "date": "2024-03-15T14:02:26.123+01:00",
            "ocr_data": "01234.567",
            "measurement": 1234.567,
            "brightness": 112,
            "image_data": "data:image/jpeg;base64,AAAA",
            "delta_days": 0.5,
            "delta_counter": 0.8,
            "average_since_last": 1.6,
            "daily_average": 1.9
        }))
        .unwrap();

        assert_eq!(reading.id, ReadingId::new("17"));
        assert_eq!(reading.measurement, Some(1234.567));
        assert_eq!(reading.delta_days, 0.5);
        assert_eq!(reading.brightness, Some(112.0));
        assert!(reading.has_image());
    }

    #[test]
    fn test_decode_sparse_record() {
        let reading: GasMeterReading = serde_json::from_value(json!({
            "id": "a-1",
            "delta_days": null,
            "delta_counter": "3.5"
        }))
        .unwrap();

        assert_eq!(reading.to_string_id(), "a-1");
        assert!(reading.delta_days.is_nan());
        assert_eq!(reading.delta_counter, 3.5);
        assert_eq!(reading.date, "");
        assert_eq!(reading.daily_average, None);
        assert!(!reading.has_image());
    }

    #[test]
    fn test_reading_id_from_string() {
        assert_eq!(ReadingId::from_string(" 42 ").unwrap(), ReadingId::new("42"));
        assert!(ReadingId::from_string("  ").is_err());
    }
}
