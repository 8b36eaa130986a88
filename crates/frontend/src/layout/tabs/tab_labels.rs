//! Tab labels - единственный источник правды для заголовков и ключей табов.
//!
//! Заголовки агрегата берутся из `AggregateRoot` в contracts.

use contracts::domain::a001_gas_meter_reading::{GasMeterReading, ReadingId};
use contracts::domain::common::{AggregateId, AggregateRoot};

/// Таб, который открывается при старте без `?active=...`
pub const HOME_TAB_KEY: &str = "a001_gas_meter_reading";

const DETAIL_PREFIX: &str = "a001_gas_meter_reading_detail_";

/// Ключ detail-таба для конкретного показания
pub fn detail_tab_key(id: &ReadingId) -> String {
    format!("{}{}", DETAIL_PREFIX, id.as_string())
}

/// Обратное к [`detail_tab_key`]
pub fn reading_id_from_key(key: &str) -> Option<ReadingId> {
    key.strip_prefix(DETAIL_PREFIX)
        .and_then(|raw| ReadingId::from_string(raw).ok())
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Возвращает читаемый заголовок таба для данного ключа. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> String {
    if key == HOME_TAB_KEY {
        return GasMeterReading::list_name().to_string();
    }
    match reading_id_from_key(key) {
        Some(id) => detail_tab_label(GasMeterReading::element_name(), id.value()),
        None => key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_key_round_trip() {
        let id = ReadingId::new("42");
        let key = detail_tab_key(&id);
        assert_eq!(key, "a001_gas_meter_reading_detail_42");
        assert_eq!(reading_id_from_key(&key), Some(id));
        assert_eq!(reading_id_from_key("a001_gas_meter_reading_detail_"), None);
        assert_eq!(reading_id_from_key(HOME_TAB_KEY), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key(HOME_TAB_KEY), "Gas Meter Readings");
        assert_eq!(
            tab_label_for_key("a001_gas_meter_reading_detail_7"),
            "Gas Meter Reading · 7"
        );
        assert_eq!(tab_label_for_key("unknown"), "unknown");
    }
}
