//! Durable key-value persistence for session credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP layer, route guard and auth store all read the same persisted
//! `token`/`user` pair. They share one `KeyValueStore` handle so browser
//! `localStorage` can be swapped for an in-memory map in tests and SSR.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized user object.
pub const USER_KEY: &str = "user";
/// Storage key for the raw refresh token, when the backend issues one.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Minimal persistence interface over string keys and values.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Reads return `None` outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = browser_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for key {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = browser_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Process-local map, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |m| m.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Load and decode a JSON value stored under `key`. Undecodable values read as `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Encode `value` as JSON and store it under `key`.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, &raw),
        Err(e) => log::warn!("failed to encode {key}: {e}"),
    }
}

/// Remove every persisted session key.
pub fn clear_session(store: &dyn KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
    store.remove(REFRESH_TOKEN_KEY);
}

/// `true` when a non-empty bearer token is persisted.
pub fn has_token(store: &dyn KeyValueStore) -> bool {
    store.get(TOKEN_KEY).is_some_and(|t| !t.is_empty())
}
