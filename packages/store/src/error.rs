use thiserror::Error;

/// Errors raised by a [`crate::KeyValueStore`] backend or by (de)serialising
/// the stored user record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be reached at all (no `window`, storage
    /// disabled by the browser, ...).
    #[error("storage is unavailable")]
    Unavailable,

    /// The backend rejected an operation (quota exceeded, security error).
    #[error("storage backend error: {0}")]
    Backend(String),

    /// The key cannot be used by this backend (e.g. it would escape the
    /// data directory of a [`crate::FileStore`]).
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize user record: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A value exists under the user key but is not a valid record.
    #[error("stored user record is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}
