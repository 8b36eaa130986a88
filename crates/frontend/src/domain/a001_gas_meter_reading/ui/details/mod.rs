use crate::config::use_app_config;
use crate::domain::a001_gas_meter_reading::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, detail_tab_label};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_gas_meter_reading::{derive_fields, GasMeterReading, ReadingId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::date_format::{format_date, format_datetime};
use contracts::shared::number_format::format_optional;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Карточка одного показания: OCR, дата, фото счётчика и рассчитанные значения
#[component]
pub fn ReadingDetail(id: ReadingId, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_app_config();
    let stored_id = StoredValue::new(id);

    let (item, set_item) = signal(None::<GasMeterReading>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let id = stored_id.get_value();
    spawn_local(async move {
        match api::fetch_reading(&config, &id).await {
            Ok(data) => {
                let title =
                    detail_tab_label(GasMeterReading::element_name(), &format_datetime(&data.date));
                tabs_store.update_tab_title(&detail_tab_key(&id), &title);
                set_item.set(Some(data));
            }
            Err(e) => {
                log::warn!("Failed to load reading {}: {}", id, e);
                set_error.set(Some(e.to_string()));
            }
        }
        set_loading.set(false);
    });

    view! {
        <PageFrame page_id="a001_gas_meter_reading--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("gauge")}
                    <h1 class="page__title">
                        {move || format!("{} #{}", GasMeterReading::element_name(), stored_id.get_value())}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    if loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small style="align-items:center;padding:var(--spacing-4xl);justify-content:center;">
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        }.into_any();
                    }
                    if let Some(err) = error.get() {
                        return view! {
                            <div class="alert alert--error">
                                <strong>"Error: "</strong>{err}
                            </div>
                        }.into_any();
                    }
                    match item.get() {
                        Some(reading) => reading_card(reading).into_any(),
                        None => view! { <></> }.into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}

fn reading_card(reading: GasMeterReading) -> impl IntoView {
    let derived = derive_fields(&reading);
    let image = reading.has_image().then(|| reading.image_data.clone());

    view! {
        <div style="padding:var(--spacing-lg);display:flex;flex-direction:column;gap:var(--spacing-lg);">
            <Card>
                <div class="detail-grid">
                    <span class="form__label">"Id:"</span>
                    <code>{reading.id.to_string()}</code>

                    <span class="form__label">"OCR data:"</span>
                    <span>{reading.ocr_data.clone()}</span>

                    <span class="form__label">"Date:"</span>
                    <span>{reading.date.clone()}</span>

                    <span class="form__label">"Publication date:"</span>
                    <span>{format_date(&reading.date)}</span>
                </div>
            </Card>

            <Card>
                <div class="detail-grid">
                    <span class="form__label">"Measurement:"</span>
                    <span>{format_optional(reading.measurement)}</span>

                    <span class="form__label">"Delta:"</span>
                    <span>{derived.duration.clone()}</span>

                    <span class="form__label">"Delta counter:"</span>
                    <span>{format_optional(Some(reading.delta_counter))}</span>

                    <span class="form__label">"m3 per day:"</span>
                    <span>{derived.volume_rate.clone()}</span>

                    <span class="form__label">"Euro per day:"</span>
                    <span>{derived.cost_rate.clone()}</span>

                    <span class="form__label">"Daily average:"</span>
                    <span>{format_optional(reading.daily_average)}</span>

                    <span class="form__label">"Average since last:"</span>
                    <span>{format_optional(reading.average_since_last)}</span>

                    <span class="form__label">"Brightness:"</span>
                    <span>{format_optional(reading.brightness)}</span>
                </div>
            </Card>

            {image.map(|src| view! {
                <Card>
                    <img class="detail-image" src=src alt="meter" />
                </Card>
            })}
        </div>
    }
}
