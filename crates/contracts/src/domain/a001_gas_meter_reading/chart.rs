//! Данные и конфигурация графика среднесуточного расхода
//!
//! Структуры сериализуются ровно в ту форму, которую ждёт Chart.js
//! (`{ type, data: { labels, datasets }, options }`), поэтому фронтенду
//! остаётся только передать их в конструктор графика.

use super::aggregate::GasMeterReading;
use crate::shared::date_format::to_utc_millis;
use serde::Serialize;

/// Сколько последних показаний грузится для графика
pub const CHART_FETCH_LIMIT: usize = 800;

pub const SERIES_LABEL: &str = "Delta Counter Over Time";
pub const SERIES_BORDER_COLOR: &str = "rgba(70, 69, 19, 1)";
pub const SERIES_BACKGROUND_COLOR: &str = "rgba(7, 1, 19, 0.4)";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Один ряд графика. `None` в `data` даёт разрыв линии.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
}

/// Собирает ряд графика из показаний в том порядке, в каком они пришли
///
/// Подписи и значения выровнены по индексу: `labels[i]` из `readings[i].date`,
/// `data[i]` = `readings[i].daily_average`. Сортировки, фильтрации и
/// дедупликации нет, неразобранная дата остаётся на своём месте как
/// `"Invalid Date"`.
pub fn assemble_chart_data(readings: &[GasMeterReading]) -> ChartData {
    let labels = readings.iter().map(|r| to_utc_millis(&r.date)).collect();
    let values = readings.iter().map(|r| r.daily_average).collect();

    ChartData {
        labels,
        datasets: vec![ChartDataset {
            label: SERIES_LABEL.to_string(),
            data: values,
            border_color: SERIES_BORDER_COLOR.to_string(),
            background_color: SERIES_BACKGROUND_COLOR.to_string(),
            fill: true,
        }],
    }
}

// ============================================================================
// Chart.js configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

pub fn chart_config(data: ChartData) -> ChartConfig {
    ChartConfig {
        kind: "line",
        data,
        options: ChartOptions::default(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub stepped: bool,
    pub animations: Animations,
    pub scales: Scales,
    pub plugins: Plugins,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            stepped: true,
            animations: Animations {
                y: AxisAnimation {
                    easing: "easeInOutElastic",
                },
            },
            scales: Scales {
                x: TimeScale {
                    kind: "time",
                    time: TimeOptions {
                        unit: "month",
                        display_formats: DisplayFormats { day: "MMM dd yy" },
                    },
                },
            },
            plugins: Plugins {
                zoom: ZoomPlugin {
                    pan: PanOptions {
                        enabled: true,
                        mode: "x",
                    },
                    zoom: ZoomOptions {
                        wheel: Toggle { enabled: true },
                        drag: Toggle { enabled: true },
                        pinch: Toggle { enabled: false },
                        mode: "x",
                    },
                },
            },
        }
    }
}

/// Анимация оси Y. Колбэк `from` на стороне JS, см. [`initial_y_from`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animations {
    pub y: AxisAnimation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisAnimation {
    pub easing: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: TimeScale,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeScale {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub time: TimeOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOptions {
    pub unit: &'static str,
    pub display_formats: DisplayFormats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayFormats {
    pub day: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub zoom: ZoomPlugin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomPlugin {
    pub pan: PanOptions,
    pub zoom: ZoomOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanOptions {
    pub enabled: bool,
    pub mode: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomOptions {
    pub wheel: Toggle,
    pub drag: Toggle,
    pub pinch: Toggle,
    pub mode: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

/// Контекст анимации, который Chart.js передаёт в `animations.y.from`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationContext {
    pub kind: String,
    pub mode: String,
    pub dropped: bool,
}

/// Стартовое значение анимации оси Y
///
/// Точка данных «падает» с нуля только при первой отрисовке в режиме
/// `default`; флаг `dropped` хранится в самом контексте элемента, поэтому
/// обновления и зум анимируются от текущего значения (`None`).
pub fn initial_y_from(ctx: &mut AnimationContext) -> Option<f64> {
    if ctx.kind == "data" && ctx.mode == "default" && !ctx.dropped {
        ctx.dropped = true;
        return Some(0.0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reading(date: &str, daily_average: Option<f64>) -> GasMeterReading {
        serde_json::from_value(json!({ "date": date, "daily_average": daily_average })).unwrap()
    }

    #[test]
    fn test_assemble_is_index_aligned() {
        let readings = vec![
            reading("2024-03-03T08:00:00+01:00", Some(3.3)),
            reading("2024-03-02T08:00:00+01:00", Some(2.2)),
            reading("2024-03-01T08:00:00+01:00", Some(1.1)),
        ];

        let data = assemble_chart_data(&readings);

        assert_eq!(data.labels.len(), 3);
        assert_eq!(data.datasets[0].data.len(), 3);
        for (i, r) in readings.iter().enumerate() {
            assert_eq!(data.labels[i], to_utc_millis(&r.date));
            assert_eq!(data.datasets[0].data[i], r.daily_average);
        }
        assert_eq!(data.labels[0], "2024-03-03T07:00:00.000Z");
    }

    #[test]
    fn test_assemble_keeps_unsorted_and_duplicate_input() {
        let readings = vec![
            reading("2024-01-02T00:00:00Z", Some(2.0)),
            reading("2024-01-05T00:00:00Z", Some(5.0)),
            reading("2024-01-02T00:00:00Z", Some(2.0)),
            reading("garbage", None),
        ];

        let data = assemble_chart_data(&readings);

        assert_eq!(
            data.labels,
            vec![
                "2024-01-02T00:00:00.000Z",
                "2024-01-05T00:00:00.000Z",
                "2024-01-02T00:00:00.000Z",
                "Invalid Date",
            ]
        );
        assert_eq!(data.datasets[0].data, vec![Some(2.0), Some(5.0), Some(2.0), None]);
    }

    #[test]
    fn test_assemble_empty() {
        let data = assemble_chart_data(&[]);
        assert!(data.is_empty());
        assert_eq!(data.datasets.len(), 1);
    }

    #[test]
    fn test_config_matches_chart_js_shape() {
        let config = chart_config(assemble_chart_data(&[reading("2024-01-01", Some(1.5))]));
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["type"], "line");
        assert_eq!(value["data"]["labels"][0], "2024-01-01T00:00:00.000Z");
        assert_eq!(value["data"]["datasets"][0]["label"], SERIES_LABEL);
        assert_eq!(value["data"]["datasets"][0]["borderColor"], SERIES_BORDER_COLOR);
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], SERIES_BACKGROUND_COLOR);
        assert_eq!(value["data"]["datasets"][0]["fill"], true);
        assert_eq!(value["options"]["maintainAspectRatio"], false);
        assert_eq!(value["options"]["animations"]["y"]["easing"], "easeInOutElastic");
        assert_eq!(value["options"]["scales"]["x"]["type"], "time");
        assert_eq!(value["options"]["scales"]["x"]["time"]["unit"], "month");
        assert_eq!(
            value["options"]["scales"]["x"]["time"]["displayFormats"]["day"],
            "MMM dd yy"
        );
        assert_eq!(
            value["options"]["plugins"]["zoom"],
            json!({
                "pan": { "enabled": true, "mode": "x" },
                "zoom": {
                    "wheel": { "enabled": true },
                    "drag": { "enabled": true },
                    "pinch": { "enabled": false },
                    "mode": "x"
                }
            })
        );
    }

    #[test]
    fn test_initial_y_from_is_one_shot() {
        let mut ctx = AnimationContext {
            kind: "data".into(),
            mode: "default".into(),
            dropped: false,
        };
        assert_eq!(initial_y_from(&mut ctx), Some(0.0));
        assert!(ctx.dropped);
        assert_eq!(initial_y_from(&mut ctx), None);

        let mut resize = AnimationContext {
            kind: "data".into(),
            mode: "resize".into(),
            dropped: false,
        };
        assert_eq!(initial_y_from(&mut resize), None);
        assert!(!resize.dropped);
    }
}
