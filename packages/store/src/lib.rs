pub mod config;
pub mod models;

mod error;
pub use error::StoreError;

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

mod user_store;
pub use user_store::UserRecordStore;

pub use config::StorageConfig;
pub use models::{ProfileEdit, UserRecord, DEFAULT_TITLE};
