use crate::config::AppConfig;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::MainLayout;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Backend URL is resolved once here and injected into every page.
    let config = AppConfig::from_env();
    log::info!("Backend URL: {}", config.backend_url());
    provide_context(config);

    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <MainLayout />
    }
}
