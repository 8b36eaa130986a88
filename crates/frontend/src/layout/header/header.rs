use crate::config::use_app_config;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let config = use_app_config();

    let is_sidebar_visible = move || tabs_store.left_open.get();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button
                    class="header__icon-btn"
                    on:click=move |_| tabs_store.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="header__title">"Gas Meter"</span>
            </div>
            <div class="header__actions">
                <span class="header__backend" title="Backend">{config.backend_url().to_string()}</span>
            </div>
        </header>
    }
}
