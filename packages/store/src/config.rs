//! # Storage configuration — `linkjobs.toml`
//!
//! Names the two keys the account lives under. The defaults are the keys the
//! LinkJobs pages have always used, so a browser that already holds an
//! account keeps it.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! user_key = "lj_user_v1"       # JSON user record
//! session_key = "lj_logged_in"  # "true" while logged in
//! ```
//!
//! A missing file, a missing section or a missing field all fall back to the
//! defaults.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `linkjobs.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub storage: StorageKeys,
}

/// Keys used in the backing key-value store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageKeys {
    #[serde(default = "default_user_key")]
    pub user_key: String,
    #[serde(default = "default_session_key")]
    pub session_key: String,
}

fn default_user_key() -> String {
    "lj_user_v1".to_string()
}

fn default_session_key() -> String {
    "lj_logged_in".to_string()
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            user_key: default_user_key(),
            session_key: default_session_key(),
        }
    }
}

impl StorageConfig {
    /// Builder method to override the user record key.
    pub fn with_user_key(mut self, key: impl Into<String>) -> Self {
        self.storage.user_key = key.into();
        self
    }

    /// Builder method to override the session flag key.
    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.storage.session_key = key.into();
        self
    }

    pub fn user_key(&self) -> &str {
        &self.storage.user_key
    }

    pub fn session_key(&self) -> &str {
        &self.storage.session_key
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "linkjobs.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
