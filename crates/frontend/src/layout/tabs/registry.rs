//! Tab content registry - единственный источник правды для маппинга tab.key → View

use super::tab_labels::{reading_id_from_key, HOME_TAB_KEY};
use crate::domain::a001_gas_meter_reading::ui::details::ReadingDetail;
use crate::domain::a001_gas_meter_reading::ui::list::ReadingList;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a001_gas_meter_reading")
/// * `tabs_store` - контекст для закрытия таба (используется в detail-views с on_close)
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    if key == HOME_TAB_KEY {
        return view! { <ReadingList /> }.into_any();
    }

    if let Some(id) = reading_id_from_key(key) {
        return view! {
            <ReadingDetail
                id=id
                on_close=Callback::new(move |_| {
                    tabs_store.close_tab(&key_for_close);
                })
            />
        }
        .into_any();
    }

    log!("⚠️ Unknown tab key: '{}'", key);
    view! {
        <div class="placeholder">{format!("Unknown tab: {}", key)}</div>
    }
    .into_any()
}
