//! Тонкая обёртка над Chart.js (UMD-бандл подключается в index.html
//! вместе с chartjs-adapter-date-fns и chartjs-plugin-zoom).
//!
//! Конфигурация целиком строится в `contracts` и сериализуется в JsValue;
//! здесь к ней добавляется только callback `animations.y.from`.

use contracts::domain::a001_gas_meter_reading::chart::{initial_y_from, AnimationContext};
use contracts::domain::a001_gas_meter_reading::ChartConfig;
use js_sys::{Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &ChartJs);

    #[wasm_bindgen(method, js_name = resetZoom)]
    fn reset_zoom(this: &ChartJs);
}

type FromCallback = Closure<dyn FnMut(JsValue) -> JsValue>;

/// Живой экземпляр графика. Callback анимации живёт столько же, сколько график.
pub struct LineChart {
    chart: ChartJs,
    _from_callback: FromCallback,
}

impl LineChart {
    pub fn create(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<Self, String> {
        let js_config = config
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| format!("Chart config serialization failed: {}", e))?;

        let from_callback = animation_from_callback();
        attach_y_from(&js_config, &from_callback)?;

        let chart = ChartJs::new(canvas, &js_config)
            .map_err(|e| format!("Chart.js init failed: {:?}", e))?;

        Ok(Self {
            chart,
            _from_callback: from_callback,
        })
    }

    pub fn reset_zoom(&self) {
        self.chart.reset_zoom();
    }

    pub fn destroy(&self) {
        self.chart.destroy();
    }
}

fn animation_from_callback() -> FromCallback {
    Closure::wrap(Box::new(move |ctx: JsValue| {
        let mut anim = AnimationContext {
            kind: read_string(&ctx, "type"),
            mode: read_string(&ctx, "mode"),
            dropped: Reflect::get(&ctx, &"dropped".into())
                .map(|v| v.is_truthy())
                .unwrap_or(false),
        };
        match initial_y_from(&mut anim) {
            Some(from) => {
                if let Err(e) = Reflect::set(&ctx, &"dropped".into(), &JsValue::from_bool(anim.dropped)) {
                    log::debug!("Failed to mark y animation as dropped: {:?}", e);
                }
                JsValue::from_f64(from)
            }
            None => JsValue::UNDEFINED,
        }
    }) as Box<dyn FnMut(JsValue) -> JsValue>)
}

fn read_string(obj: &JsValue, key: &str) -> String {
    Reflect::get(obj, &key.into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

/// `config.options.animations.y.from = callback`
fn attach_y_from(config: &JsValue, callback: &FromCallback) -> Result<(), String> {
    let mut target = config.clone();
    for key in ["options", "animations", "y"] {
        target = Reflect::get(&target, &key.into())
            .ok()
            .filter(|v| v.is_object())
            .ok_or_else(|| format!("Chart config has no '{}' object", key))?;
    }
    let target: Object = target.unchecked_into();
    Reflect::set(&target, &"from".into(), callback.as_ref().unchecked_ref())
        .map_err(|e| format!("Failed to attach animation callback: {:?}", e))?;
    Ok(())
}
