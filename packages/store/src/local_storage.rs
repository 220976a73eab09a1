//! # Browser `localStorage` store
//!
//! [`LocalStorage`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It reads and writes `window.localStorage` through [`web_sys`],
//! so the account lives in the browser profile of a single device.
//!
//! ## Connection management
//!
//! `LocalStorage` is a zero-size struct that looks up `window.localStorage`
//! on every operation. [`web_sys::Storage`] is not `Send`, and the lookup is a
//! couple of property reads.
//!
//! ## Error handling
//!
//! Reads swallow errors and return `None`, so a disabled or unavailable
//! storage degrades to "no account" instead of crashing the page. Writes
//! report [`StoreError::Unavailable`] or [`StoreError::Backend`] (typically a
//! `QuotaExceededError`).

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::{KeyValueStore, StoreError};

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

fn backend_error(err: JsValue) -> StoreError {
    StoreError::Backend(format!("{err:?}"))
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(backend_error)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage.remove_item(key).map_err(backend_error)
    }
}
