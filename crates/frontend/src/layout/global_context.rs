use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::{tab_label_for_key, HOME_TAB_KEY};

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Восстанавливает активный таб из `?active=...` и дальше держит URL
    /// синхронным с активным табом. Без параметра открывается список показаний.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let active_key = active_from_search(&search).unwrap_or_else(|| HOME_TAB_KEY.to_string());

        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == active_key));
        if !exists {
            self.open_tab(&active_key, &tab_label_for_key(&active_key));
        } else {
            self.activate_tab(&active_key);
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let new_url = format!("?{}", search_for_active(&active_key));

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // replaceState: переключение табов не засоряет историю
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("🔷 open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| {
                tabs.push(tab);
                leptos::logging::log!("✅ Tab added. Total tabs: {}", tabs.len());
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("🔴 close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Ключ таба из query-строки (`?active=...`), пустое значение игнорируется
fn active_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

fn search_for_active(active_key: &str) -> String {
    serde_qs::to_string(&HashMap::from([("active".to_string(), active_key.to_string())]))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_from_search() {
        assert_eq!(
            active_from_search("?active=a001_gas_meter_reading_detail_42"),
            Some("a001_gas_meter_reading_detail_42".to_string())
        );
        assert_eq!(active_from_search(""), None);
        assert_eq!(active_from_search("?active="), None);
        assert_eq!(active_from_search("?other=1"), None);
    }

    #[test]
    fn test_search_round_trip() {
        let search = format!("?{}", search_for_active("a001_gas_meter_reading"));
        assert_eq!(
            active_from_search(&search),
            Some("a001_gas_meter_reading".to_string())
        );
    }
}
