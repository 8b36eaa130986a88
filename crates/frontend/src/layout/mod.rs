pub mod global_context;
pub mod header;
pub mod left;
pub mod tabs;

use global_context::{AppGlobalContext, Tab as TabData};
use header::Header;
use leptos::logging::log;
use leptos::prelude::*;
use left::{Left, Sidebar};
use tabs::{TabBar, TabPage};

/// Каркас приложения.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |  TabBar                      |
/// |   (Left)  |  Content (active tab)        |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <Header />
            <div class="app-body">
                <Left>
                    {left()}
                </Left>
                <div class="app-main">
                    <TabBar />
                    <div data-zone="center" class="app-tabs">
                        {center()}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Основной layout: Sidebar + Tabs.
///
/// Инициализирует router integration для синхронизации табов с URL (?active=...).
#[component]
pub fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            log!("👶 <For> children function called for: '{}'", tab.key);
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }.into_any()
            }
        />
    }
}
