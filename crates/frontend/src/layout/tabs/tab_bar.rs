use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHeader(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        key.with_value(|k| tabs_store.active.get().as_deref() == Some(k.as_str()))
    });

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        key.with_value(|k| tabs_store.close_tab(k));
    };

    view! {
        <div
            class="tab-bar__tab"
            class:tab-bar__tab--active=is_active
            on:click=move |_| key.with_value(|k| tabs_store.activate_tab(k))
        >
            <span class="tab-bar__title">{tab.title}</span>
            <button class="tab-bar__close" on:click=on_close title="Close">
                {icon("x")}
            </button>
        </div>
    }
}

/// Полоса открытых табов
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tab-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| (tab.key.clone(), tab.title.clone())
                children=move |tab: TabData| view! { <TabHeader tab=tab tabs_store=tabs_store /> }
            />
        </div>
    }
}
