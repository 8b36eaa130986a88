pub mod chart;
pub mod columns_panel;
pub mod state;

use self::chart::ReadingChart;
use self::columns_panel::{load_visibility, ColumnsPanel};
use self::state::{create_state, ReadingListState};
use crate::config::use_app_config;
use crate::domain::a001_gas_meter_reading::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_key, tab_label_for_key};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_gas_meter_reading::columns::{
    COL_BRIGHTNESS, COL_DAILY_AVERAGE, COL_DATE, COL_DELETE, COL_DELTA, COL_DELTA_COUNTER,
    COL_EURO_PER_DAY, COL_IMAGE, COL_M3_PER_DAY, COL_MEASUREMENT,
};
use contracts::domain::a001_gas_meter_reading::query::PAGE_SIZE_OPTIONS;
use contracts::domain::a001_gas_meter_reading::{
    derive_fields, ColumnMeta, DerivedFields, GasMeterReading, ReadingId,
};
use contracts::shared::date_format::format_datetime;
use contracts::shared::number_format::format_optional;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ReadingList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = StoredValue::new(use_app_config());
    let state = create_state();
    let visibility = RwSignal::new(load_visibility());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (ingesting, set_ingesting) = signal(false);
    let (columns_open, set_columns_open) = signal(false);

    let load_items = move || {
        let config = config.get_value();
        let query = state.with_untracked(|s| s.query());
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            match api::fetch_readings_page(&config, &query).await {
                Ok(page) => state.update(|s| s.apply_page(page.items, page.total)),
                Err(e) => {
                    log::warn!("Failed to load readings: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
        }
    });

    let toggle_sort = move |field: String| {
        state.update(|s| s.toggle_sort(&field));
        load_items();
    };

    let go_to_page = move |new_page: usize| {
        state.update(|s| s.page = new_page);
        load_items();
    };

    let change_page_size = move |new_size: usize| {
        state.update(|s| s.set_page_size(new_size));
        load_items();
    };

    // График не перезагружается: он живёт своей выборкой
    let delete_item = move |id: ReadingId| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete reading {}?", id))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let config = config.get_value();
        spawn_local(async move {
            match api::delete_reading(&config, &id).await {
                Ok(()) => {
                    log::info!("Reading {} deleted", id);
                    state.update(|s| s.remove_one());
                    load_items();
                }
                Err(e) => {
                    log::warn!("Failed to delete reading {}: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let open_detail = move |id: ReadingId| {
        let key = detail_tab_key(&id);
        tabs_store.open_tab(&key, &tab_label_for_key(&key));
    };

    let schedule_reading = move |_: leptos::ev::MouseEvent| {
        let config = config.get_value();
        set_ingesting.set(true);
        spawn_local(async move {
            if let Err(e) = api::trigger_ingestion(&config).await {
                log::warn!("Ingestion trigger failed: {}", e);
            }
            reload_page();
        });
    };

    let on_delete = Callback::new(delete_item);
    let on_open = Callback::new(open_detail);

    view! {
        <PageFrame page_id="a001_gas_meter_reading--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Gas Meter Readings"</h1>
                    <span class="badge badge--primary">
                        {move || state.with(|s| s.total_count.to_string())}
                    </span>
                </div>

                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=schedule_reading
                        disabled=Signal::derive(move || ingesting.get())
                    >
                        {icon("camera")}
                        {move || if ingesting.get() { " Scheduling..." } else { " Schedule Gas Reading" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| set_columns_open.update(|v| *v = !*v)
                    >
                        {icon("columns")}
                        {move || {
                            let hidden = visibility.with(|v| v.hidden_count());
                            if hidden > 0 { format!(" Columns ({} hidden)", hidden) } else { " Columns".to_string() }
                        }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ReadingChart />

                <Show when=move || columns_open.get()>
                    <ColumnsPanel visibility=visibility />
                </Show>

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || state.with(|s| s.page))
                                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                                total_count=Signal::derive(move || state.with(|s| s.total_count))
                                page_size=Signal::derive(move || state.with(|s| s.page_size))
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                                page_size_options=PAGE_SIZE_OPTIONS.to_vec()
                            />
                        </div>

                        <div class="filter-panel-header__right">
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| load_items()
                                disabled=Signal::derive(move || loading.get())
                            >
                                {icon("refresh")}
                                {move || if loading.get() { " Loading..." } else { " Refresh" }}
                            </Button>
                        </div>
                    </div>
                </div>

                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {move || {
                                    visibility
                                        .get()
                                        .visible_columns()
                                        .into_iter()
                                        .map(|col| header_cell(col, state, toggle_sort))
                                        .collect_view()
                                }}
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.get().items
                                key=|item| format!("{}:{}", item.id, item.date)
                                children=move |item: GasMeterReading| {
                                    let derived = derive_fields(&item);
                                    let row = StoredValue::new((item, derived));
                                    view! {
                                        <TableRow>
                                            {move || {
                                                visibility
                                                    .get()
                                                    .visible_columns()
                                                    .into_iter()
                                                    .map(|col| {
                                                        row.with_value(|(item, derived)| {
                                                            body_cell(col, item, derived, on_delete, on_open)
                                                        })
                                                    })
                                                    .collect_view()
                                            }}
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

fn header_cell(
    col: &'static ColumnMeta,
    state: RwSignal<ReadingListState>,
    toggle_sort: impl Fn(String) + Send + Sync + 'static,
) -> AnyView {
    let min_width = col.min_width as f64;
    let align = if col.align_right { "right" } else { "left" };

    match col.sort_field {
        Some(field) => view! {
            <SortableHeaderCell
                label=col.label
                sort_field=field
                current_sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
                sort_ascending=Signal::derive(move || state.with(|s| s.sort_order.is_ascending()))
                on_sort=Callback::new(toggle_sort)
                min_width=min_width
                align=align
            />
        }
        .into_any(),
        None => view! {
            <TableHeaderCell resizable=false min_width=min_width>
                {col.label}
            </TableHeaderCell>
        }
        .into_any(),
    }
}

fn body_cell(
    col: &ColumnMeta,
    item: &GasMeterReading,
    derived: &DerivedFields,
    on_delete: Callback<ReadingId>,
    on_open: Callback<ReadingId>,
) -> AnyView {
    match col.key {
        COL_DELETE => {
            let id = item.id.clone();
            view! {
                <TableCell>
                    <TableCellLayout>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| on_delete.run(id.clone())
                        >
                            {icon("trash")}
                            " Delete"
                        </Button>
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        COL_DATE => {
            let id = item.id.clone();
            let date_text = cell_text(COL_DATE, item, derived);
            view! {
                <TableCell>
                    <TableCellLayout>
                        <a
                            href="#"
                            class="table__link"
                            on:click=move |e| {
                                e.prevent_default();
                                on_open.run(id.clone());
                            }
                        >
                            {date_text}
                        </a>
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        COL_DELTA => text_cell(cell_text(COL_DELTA, item, derived)),
        COL_IMAGE => {
            let image = item.has_image().then(|| item.image_data.clone());
            view! {
                <TableCell>
                    <TableCellLayout>
                        {image.map(|src| view! {
                            <img class="table__thumbnail" src=src alt="meter" />
                        })}
                    </TableCellLayout>
                </TableCell>
            }
            .into_any()
        }
        key => number_cell(cell_text(key, item, derived)),
    }
}

/// Текст ячейки грида; у кнопки удаления и фото текста нет
fn cell_text(key: &str, item: &GasMeterReading, derived: &DerivedFields) -> String {
    match key {
        COL_DATE => format_datetime(&item.date),
        COL_MEASUREMENT => format_optional(item.measurement),
        COL_DELTA => derived.duration.clone(),
        COL_DELTA_COUNTER => format_optional(Some(item.delta_counter)),
        COL_M3_PER_DAY => derived.volume_rate.clone(),
        COL_DAILY_AVERAGE => format_optional(derived.daily_average),
        COL_EURO_PER_DAY => derived.cost_rate.clone(),
        COL_BRIGHTNESS => format_optional(item.brightness),
        _ => String::new(),
    }
}

fn text_cell(text: String) -> AnyView {
    view! {
        <TableCell>
            <TableCellLayout truncate=true>{text}</TableCellLayout>
        </TableCell>
    }
    .into_any()
}

fn number_cell(text: String) -> AnyView {
    view! {
        <TableCell>
            <TableCellLayout>
                <span style="display: block; text-align: right; font-variant-numeric: tabular-nums;">
                    {text}
                </span>
            </TableCellLayout>
        </TableCell>
    }
    .into_any()
}

fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().reload() {
        log::warn!("Failed to reload page: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> GasMeterReading {
        GasMeterReading {
            id: ReadingId::new("17"),
            date: "2024-03-15T14:02:26.123+01:00".to_string(),
            measurement: Some(1234.5),
            delta_days: 4.0,
            delta_counter: 10.0,
            daily_average: Some(2.5),
            image_data: String::new(),
            ocr_data: String::new(),
            brightness: None,
            average_since_last: None,
        }
    }

    #[test]
    fn test_date_cell_text_is_owned() {
        let text = {
            let item = reading();
            let derived = derive_fields(&item);
            cell_text(COL_DATE, &item, &derived)
        };
        assert_eq!(text, format_datetime("2024-03-15T14:02:26.123+01:00"));
        assert_eq!(text, "15.03.2024 14:02:26");
    }

    #[test]
    fn test_cell_text_per_column() {
        let item = reading();
        let derived = derive_fields(&item);

        assert_eq!(cell_text(COL_MEASUREMENT, &item, &derived), "1234.5");
        assert_eq!(cell_text(COL_DELTA, &item, &derived), derived.duration);
        assert_eq!(cell_text(COL_M3_PER_DAY, &item, &derived), "2.50");
        assert_eq!(cell_text(COL_EURO_PER_DAY, &item, &derived), "3.88 Euro");
        assert_eq!(cell_text(COL_DAILY_AVERAGE, &item, &derived), "2.5");
        assert_eq!(cell_text(COL_BRIGHTNESS, &item, &derived), "");
        assert_eq!(cell_text(COL_DELETE, &item, &derived), "");
        assert_eq!(cell_text(COL_IMAGE, &item, &derived), "");
    }
}
