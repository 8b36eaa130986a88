//! Панель выбора колонок грида. Скрытые колонки сохраняются в localStorage.

use crate::shared::local_storage;
use contracts::domain::a001_gas_meter_reading::{ColumnVisibility, COLUMNS};
use leptos::prelude::*;

const HIDDEN_COLUMNS_KEY: &str = "a001_gas_meter_reading_hidden_columns";

/// Восстановленная настройка; пустое или битое значение означает «всё видно»
pub fn load_visibility() -> ColumnVisibility {
    local_storage::load(HIDDEN_COLUMNS_KEY)
        .map(|raw| ColumnVisibility::from_json(&raw))
        .unwrap_or_default()
}

fn save_visibility(visibility: &ColumnVisibility) {
    local_storage::save(HIDDEN_COLUMNS_KEY, &visibility.to_json());
}

#[component]
pub fn ColumnsPanel(visibility: RwSignal<ColumnVisibility>) -> impl IntoView {
    let toggle = move |key: &'static str| {
        visibility.update(|v| v.toggle(key));
        visibility.with_untracked(save_visibility);
    };

    view! {
        <div class="columns-panel">
            {COLUMNS
                .iter()
                .filter(|col| col.hideable)
                .map(|col| {
                    let key = col.key;
                    view! {
                        <label class="columns-panel__item">
                            <input
                                type="checkbox"
                                prop:checked=move || visibility.with(|v| v.is_visible(key))
                                on:change=move |_| toggle(key)
                            />
                            <span>{col.label}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
