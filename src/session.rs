//! Session Store
//!
//! The single durable piece of client state: an opaque bearer credential
//! kept in browser localStorage.

use web_sys::Storage;

/// Fixed localStorage key for the bearer credential
const TOKEN_KEY: &str = "access_token";

/// Read/write access to the persisted credential.
///
/// Storage failures (disabled localStorage, detached window) degrade to
/// "no credential" rather than erroring.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// Current credential; `None` means unauthenticated.
    pub fn credential(&self) -> Option<String> {
        let token = Self::storage()?.get_item(TOKEN_KEY).ok().flatten()?;
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential().is_some()
    }

    pub fn set_credential(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    pub fn clear_credential(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
