//! График расхода над гридом.
//!
//! Загружает свою выборку один раз при монтировании и не зависит от
//! пагинации, сортировки и обновлений грида.

use crate::config::use_app_config;
use crate::domain::a001_gas_meter_reading::api;
use crate::shared::api_utils::ApiError;
use crate::shared::chart_js::LineChart;
use crate::shared::icons::icon;
use contracts::domain::a001_gas_meter_reading::{assemble_chart_data, chart_config};
use leptos::html::Canvas;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::AbortController;

#[component]
pub fn ReadingChart() -> impl IntoView {
    let config = use_app_config();
    let canvas_ref = NodeRef::<Canvas>::new();
    let chart = StoredValue::new_local(None::<LineChart>);
    let abort = StoredValue::new_local(AbortController::new().ok());
    let (loading, set_loading) = signal(true);
    let (point_count, set_point_count) = signal(0usize);

    let abort_signal = abort.with_value(|controller| controller.as_ref().map(|c| c.signal()));

    spawn_local(async move {
        match api::fetch_chart_readings(&config, abort_signal.as_ref()).await {
            Ok(readings) => {
                let data = assemble_chart_data(&readings);
                let points = data.labels.len();

                match canvas_ref.try_get_untracked().flatten() {
                    Some(canvas) => match LineChart::create(&canvas, &chart_config(data)) {
                        Ok(line) => {
                            chart.try_update_value(|slot| *slot = Some(line));
                            set_point_count.try_set(points);
                        }
                        Err(e) => log::warn!("Failed to render chart: {}", e),
                    },
                    None => log::debug!("Chart canvas is gone, skipping render"),
                }
            }
            Err(ApiError::Aborted) => log::debug!("Chart fetch aborted"),
            Err(e) => log::warn!("Failed to load chart readings: {}", e),
        }
        set_loading.try_set(false);
    });

    on_cleanup(move || {
        abort.try_with_value(|controller| {
            if let Some(controller) = controller {
                controller.abort();
            }
        });
        chart.try_update_value(|slot| {
            if let Some(line) = slot.take() {
                line.destroy();
            }
        });
    });

    let reset_zoom = move |_: leptos::ev::MouseEvent| {
        chart.with_value(|slot| {
            if let Some(line) = slot {
                line.reset_zoom();
            }
        });
    };

    view! {
        <div class="reading-chart">
            <div class="reading-chart__toolbar">
                {move || loading.get().then(|| view! { <Spinner /> })}
                {move || {
                    (!loading.get() && point_count.get() == 0)
                        .then(|| view! { <span class="reading-chart__empty">"No chart data"</span> })
                }}
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=reset_zoom
                    disabled=Signal::derive(move || point_count.get() == 0)
                >
                    {icon("zoom-reset")}
                    " Reset zoom"
                </Button>
            </div>
            <div class="reading-chart__canvas" style="position: relative; width: 100%; height: 400px;">
                <canvas node_ref=canvas_ref></canvas>
            </div>
        </div>
    }
}
