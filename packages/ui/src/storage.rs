//! Shared user store constructor for all platforms.
//!
//! Returns a [`store::UserRecordStore`] backed by the appropriate
//! [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Desktop / Mobile** (native): one file per key via [`store::FileStore`]
//! - **WASM without `web`**: one process-wide [`store::MemoryStore`]; the
//!   account lasts until the page is reloaded

use store::{KeyValueStore, StorageConfig, UserRecordStore};

/// Create a platform-appropriate user store.
///
/// On native platforms the keys come from `<data_dir>/linkjobs/linkjobs.toml`
/// when that file exists and parses; otherwise the defaults are used.
pub fn make_user_store() -> UserRecordStore<impl KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        UserRecordStore::new(store::LocalStorage::new(), StorageConfig::default())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        UserRecordStore::new(shared_memory(), StorageConfig::default())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("linkjobs");
        let config = read_config(&base);
        UserRecordStore::new(store::FileStore::new(base), config)
    }
}

/// Handle to the single in-memory map every store on this page shares.
#[cfg(any(test, all(target_arch = "wasm32", not(feature = "web"))))]
fn shared_memory() -> store::MemoryStore {
    static MEMORY: std::sync::OnceLock<store::MemoryStore> = std::sync::OnceLock::new();
    MEMORY.get_or_init(store::MemoryStore::new).clone()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config(base: &std::path::Path) -> StorageConfig {
    let path = base.join(StorageConfig::filename());
    let Ok(text) = std::fs::read_to_string(&path) else {
        return StorageConfig::default();
    };
    match StorageConfig::from_toml(&text) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("ignoring {}: {e}", path.display());
            StorageConfig::default()
        }
    }
}
