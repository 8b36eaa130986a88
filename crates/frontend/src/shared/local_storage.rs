//! Чтение и запись пользовательских настроек в localStorage.
//!
//! Недоступное хранилище (приватный режим, запрет cookies) не считается
//! ошибкой: настройки просто не сохраняются.

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

pub fn save(key: &str, value: &str) {
    let Some(storage) = storage() else {
        log::debug!("localStorage unavailable, '{}' not saved", key);
        return;
    };
    if let Err(e) = storage.set_item(key, value) {
        log::warn!("Failed to save '{}' to localStorage: {:?}", key, e);
    }
}
