//! Колонки грида показаний и их видимость
//!
//! Набор скрытых колонок сохраняется между сессиями как JSON-массив ключей.

use serde_json::Value;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMeta {
    pub key: &'static str,
    pub label: &'static str,
    /// Поле серверной сортировки; `None`, колонка вычисляемая
    pub sort_field: Option<&'static str>,
    /// Можно ли скрыть через выбор колонок
    pub hideable: bool,
    pub align_right: bool,
    pub min_width: f32,
}

pub const COL_DELETE: &str = "delete";
pub const COL_DATE: &str = "date";
pub const COL_MEASUREMENT: &str = "measurement";
pub const COL_DELTA: &str = "delta";
pub const COL_DELTA_COUNTER: &str = "delta_counter";
pub const COL_M3_PER_DAY: &str = "m3_per_day";
pub const COL_DAILY_AVERAGE: &str = "daily_average";
pub const COL_EURO_PER_DAY: &str = "euro_per_day";
pub const COL_IMAGE: &str = "image_data";
pub const COL_BRIGHTNESS: &str = "brightness";

const fn column(
    key: &'static str,
    label: &'static str,
    sort_field: Option<&'static str>,
    align_right: bool,
    min_width: f32,
) -> ColumnMeta {
    ColumnMeta {
        key,
        label,
        sort_field,
        hideable: true,
        align_right,
        min_width,
    }
}

/// Колонки в порядке отображения
pub const COLUMNS: &[ColumnMeta] = &[
    ColumnMeta {
        key: COL_DELETE,
        label: "",
        sort_field: None,
        hideable: false,
        align_right: false,
        min_width: 90.0,
    },
    column(COL_DATE, "Date", Some("date"), false, 150.0),
    column(COL_MEASUREMENT, "Measurement", Some("measurement"), true, 110.0),
    column(COL_DELTA, "Delta", None, false, 130.0),
    column(COL_DELTA_COUNTER, "Delta counter", Some("delta_counter"), true, 110.0),
    column(COL_M3_PER_DAY, "m3 per day", None, true, 100.0),
    column(COL_DAILY_AVERAGE, "Daily average", Some("daily_average"), true, 110.0),
    column(COL_EURO_PER_DAY, "Euro per day", None, true, 110.0),
    column(COL_IMAGE, "Image data", None, false, 140.0),
    column(COL_BRIGHTNESS, "Brightness", Some("brightness"), true, 90.0),
];

pub fn find_column(key: &str) -> Option<&'static ColumnMeta> {
    COLUMNS.iter().find(|c| c.key == key)
}

/// Скрытые пользователем колонки
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    hidden: BTreeSet<String>,
}

impl ColumnVisibility {
    pub fn is_visible(&self, key: &str) -> bool {
        !self.hidden.contains(key)
    }

    /// Переключает колонку; нескрываемые и неизвестные ключи игнорируются
    pub fn toggle(&mut self, key: &str) {
        if !matches!(find_column(key), Some(c) if c.hideable) {
            return;
        }
        if !self.hidden.remove(key) {
            self.hidden.insert(key.to_string());
        }
    }

    pub fn visible_columns(&self) -> Vec<&'static ColumnMeta> {
        COLUMNS.iter().filter(|c| self.is_visible(c.key)).collect()
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    pub fn to_json(&self) -> String {
        Value::from(self.hidden.iter().cloned().collect::<Vec<_>>()).to_string()
    }

    /// Восстанавливает сохранённое состояние; мусор даёт «всё видно»
    pub fn from_json(raw: &str) -> Self {
        let keys: Vec<String> = serde_json::from_str(raw).unwrap_or_default();
        let mut visibility = Self::default();
        for key in keys {
            if matches!(find_column(&key), Some(c) if c.hideable) {
                visibility.hidden.insert(key);
            }
        }
        visibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_order() {
        let keys: Vec<_> = COLUMNS.iter().map(|c| c.key).collect();
        assert_eq!(
            keys,
            vec![
                "delete",
                "date",
                "measurement",
                "delta",
                "delta_counter",
                "m3_per_day",
                "daily_average",
                "euro_per_day",
                "image_data",
                "brightness"
            ]
        );
        assert_eq!(find_column(COL_DELTA).unwrap().sort_field, None);
    }

    #[test]
    fn test_toggle() {
        let mut v = ColumnVisibility::default();
        v.toggle(COL_IMAGE);
        assert!(!v.is_visible(COL_IMAGE));
        assert_eq!(v.visible_columns().len(), COLUMNS.len() - 1);

        v.toggle(COL_IMAGE);
        assert!(v.is_visible(COL_IMAGE));

        v.toggle(COL_DELETE);
        v.toggle("unknown");
        assert!(v.is_visible(COL_DELETE));
        assert_eq!(v.hidden_count(), 0);
    }

    #[test]
    fn test_persistence() {
        let mut v = ColumnVisibility::default();
        v.toggle(COL_BRIGHTNESS);
        v.toggle(COL_IMAGE);
        let json = v.to_json();
        assert_eq!(json, r#"["brightness","image_data"]"#);
        assert_eq!(ColumnVisibility::from_json(&json), v);
    }

    #[test]
    fn test_restore_ignores_garbage() {
        let v = ColumnVisibility::from_json(r#"["delete","nope","delta"]"#);
        assert!(v.is_visible(COL_DELETE));
        assert!(!v.is_visible(COL_DELTA));
        assert_eq!(v.hidden_count(), 1);

        assert_eq!(ColumnVisibility::from_json("not json"), ColumnVisibility::default());
    }
}
