//! # `localStorage` token store — browser-side persistence
//!
//! [`LocalTokenStore`] is the [`TokenStore`] implementation used on the **web
//! platform**. The token lives under the single key [`TOKEN_KEY`] of
//! `window.localStorage`, so it survives reloads and is shared by every page of
//! the app.
//!
//! `localStorage` can be missing (no window, privacy mode) or throw on access.
//! All of those cases degrade to "no token", matching the contract in
//! [`crate::token`].

use crate::token::{TokenStore, TOKEN_KEY};
use web_sys::Storage;

/// `window.localStorage`-backed TokenStore.
#[derive(Clone, Debug, Default)]
pub struct LocalTokenStore;

impl LocalTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
