//! Session Store
//!
//! Persists the bearer token in window.localStorage under a fixed key.
//! A `Session` handle is provided via context and passed explicitly to the
//! API layer so no module reads ambient storage on its own.

use web_sys::Storage;

const TOKEN_KEY: &str = "token";

/// Handle to the single persisted session slot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session;

impl Session {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// Persist a token, replacing any previous one
    pub fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    /// Current token, if logged in
    pub fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    /// Drop the persisted token
    pub fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
