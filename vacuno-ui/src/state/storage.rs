//! `localStorage`-backed session store.

use vacuno::session::{SessionStore, TOKEN_KEY};

/// Keeps the token in the browser's local storage so it survives reloads
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

impl LocalStorageSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(TOKEN_KEY, token).is_err() {
                web_sys::console::warn_1(&"Could not persist session token".into());
            }
        }
    }

    fn read(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
