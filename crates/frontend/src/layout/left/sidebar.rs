//! Sidebar: пункты меню открывают табы

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, HOME_TAB_KEY};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    id: &'static str,
    icon: &'static str,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![MenuItem {
        id: HOME_TAB_KEY,
        icon: "gauge",
    }]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {get_menu_items().into_iter().map(|item| {
                let label = tab_label_for_key(item.id);
                let label_for_click = label.clone();
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || {
                            ctx.active.get().as_deref() == Some(item.id)
                        }
                        on:click=move |_| ctx.open_tab(item.id, &label_for_click)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span>{label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
