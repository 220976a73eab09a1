//! # User record store
//!
//! [`UserRecordStore`] keeps the device's single account in any
//! [`KeyValueStore`]: the [`UserRecord`] as JSON under the configured user key,
//! and an independent session flag under the session key.
//!
//! The two keys are never cross-checked. Logging out clears the flag and
//! leaves the record; signing up again replaces the record and leaves the
//! flag. A flag without a record is a legitimate state.

use tracing::{debug, warn};

use crate::{KeyValueStore, StorageConfig, StoreError, UserRecord};

/// Value written under the session key while logged in.
const SESSION_MARKER: &str = "true";

/// Typed access to the stored account and session flag.
#[derive(Clone, Debug)]
pub struct UserRecordStore<S: KeyValueStore> {
    kv: S,
    config: StorageConfig,
}

impl<S: KeyValueStore> UserRecordStore<S> {
    pub fn new(kv: S, config: StorageConfig) -> Self {
        Self { kv, config }
    }

    /// Use the default `lj_user_v1` / `lj_logged_in` keys.
    pub fn with_defaults(kv: S) -> Self {
        Self::new(kv, StorageConfig::default())
    }

    pub fn backend(&self) -> &S {
        &self.kv
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Replace whatever is stored with `record`.
    pub fn save(&self, record: &UserRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string(record).map_err(StoreError::Serialize)?;
        self.kv.set(self.config.user_key(), &json)?;
        debug!(key = self.config.user_key(), "saved user record");
        Ok(())
    }

    /// The stored record, or `None` when there is none or it cannot be parsed.
    pub fn load(&self) -> Option<UserRecord> {
        match self.load_checked() {
            Ok(record) => record,
            Err(e) => {
                warn!(key = self.config.user_key(), "ignoring stored user record: {e}");
                None
            }
        }
    }

    /// Like [`load`](Self::load), but a malformed value is reported as
    /// [`StoreError::Corrupt`] instead of being treated as absent.
    pub fn load_checked(&self) -> Result<Option<UserRecord>, StoreError> {
        let Some(json) = self.kv.get(self.config.user_key()) else {
            debug!(key = self.config.user_key(), "no stored user record");
            return Ok(None);
        };
        // A JSON `null` means no user.
        if json.trim() == "null" {
            return Ok(None);
        }
        serde_json::from_str(&json)
            .map(Some)
            .map_err(StoreError::Corrupt)
    }

    pub fn set_session(&self) -> Result<(), StoreError> {
        self.kv.set(self.config.session_key(), SESSION_MARKER)
    }

    pub fn clear_session(&self) -> Result<(), StoreError> {
        self.kv.remove(self.config.session_key())
    }

    /// Whether the session flag is present and truthy.
    ///
    /// Any non-empty value counts, matching how the pages read the flag.
    pub fn is_session(&self) -> bool {
        self.kv
            .get(self.config.session_key())
            .is_some_and(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, ProfileEdit};

    fn ann() -> UserRecord {
        UserRecord::new("Ann", "a@x.com", "p1")
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let users = UserRecordStore::with_defaults(MemoryStore::new());
        assert!(users.load().is_none());

        let mut record = ann();
        record.bio = "Builds things".to_string();
        record.portfolio = "https://ann.dev".to_string();
        users.save(&record).unwrap();

        assert_eq!(users.load(), Some(record));
    }

    #[test]
    fn test_save_overwrites_without_merge() {
        let users = UserRecordStore::with_defaults(MemoryStore::new());

        let mut first = ann();
        first.bio = "first bio".to_string();
        users.save(&first).unwrap();

        let second = UserRecord::new("Bob", "b@y.com", "p2");
        users.save(&second).unwrap();

        assert_eq!(users.load(), Some(second));
        assert_eq!(users.backend().len(), 1);
    }

    #[test]
    fn test_record_is_json_under_user_key() {
        let kv = MemoryStore::new();
        let users = UserRecordStore::with_defaults(kv.clone());
        users.save(&ann()).unwrap();

        let raw = kv.get("lj_user_v1").unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["name"], "Ann");
        assert_eq!(value["title"], "New User");
    }

    #[test]
    fn test_malformed_record_is_absent_for_load() {
        let kv = MemoryStore::new();
        kv.set("lj_user_v1", "{not json").unwrap();
        let users = UserRecordStore::with_defaults(kv);

        assert!(users.load().is_none());
        assert!(matches!(users.load_checked(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let kv = MemoryStore::new();
        kv.set("lj_user_v1", r#"{"name":"Ann"}"#).unwrap();
        let users = UserRecordStore::with_defaults(kv);

        assert!(users.load().is_none());
        assert!(users.load_checked().is_err());
    }

    #[test]
    fn test_literal_null_is_absent() {
        let kv = MemoryStore::new();
        kv.set("lj_user_v1", "null").unwrap();
        let users = UserRecordStore::with_defaults(kv);

        assert!(matches!(users.load_checked(), Ok(None)));
    }

    #[test]
    fn test_session_flag() {
        let kv = MemoryStore::new();
        let users = UserRecordStore::with_defaults(kv.clone());
        assert!(!users.is_session());

        users.set_session().unwrap();
        assert!(users.is_session());
        assert_eq!(kv.get("lj_logged_in").as_deref(), Some("true"));

        users.clear_session().unwrap();
        assert!(!users.is_session());
        assert!(kv.get("lj_logged_in").is_none());
    }

    #[test]
    fn test_empty_session_value_is_falsy() {
        let kv = MemoryStore::new();
        kv.set("lj_logged_in", "").unwrap();
        let users = UserRecordStore::with_defaults(kv.clone());
        assert!(!users.is_session());

        kv.set("lj_logged_in", "yes").unwrap();
        assert!(users.is_session());
    }

    #[test]
    fn test_session_flag_is_independent_of_record() {
        let users = UserRecordStore::with_defaults(MemoryStore::new());

        // Flag without a record
        users.set_session().unwrap();
        assert!(users.is_session());
        assert!(users.load().is_none());

        // Clearing the flag keeps the record
        users.save(&ann()).unwrap();
        users.clear_session().unwrap();
        assert_eq!(users.load(), Some(ann()));
    }

    #[test]
    fn test_custom_keys() {
        let kv = MemoryStore::new();
        let config = StorageConfig::default()
            .with_user_key("acct")
            .with_session_key("sess");
        let users = UserRecordStore::new(kv.clone(), config);

        users.save(&ann()).unwrap();
        users.set_session().unwrap();

        assert!(kv.get("acct").is_some());
        assert!(kv.get("sess").is_some());
        assert!(kv.get("lj_user_v1").is_none());
        assert!(kv.get("lj_logged_in").is_none());
    }

    #[test]
    fn test_edit_sequence_preserves_credentials() {
        let users = UserRecordStore::with_defaults(MemoryStore::new());
        users.save(&ann()).unwrap();

        let edits = [
            ProfileEdit {
                name: Some("Ann B".to_string()),
                ..Default::default()
            },
            ProfileEdit {
                title: Some("Engineer".to_string()),
                portfolio: Some("https://ann.dev".to_string()),
                ..Default::default()
            },
            ProfileEdit {
                bio: Some(String::new()),
                location: Some("Accra".to_string()),
                ..Default::default()
            },
        ];
        for edit in edits {
            let current = users.load().unwrap();
            users.save(&edit.apply(&current)).unwrap();
        }

        let record = users.load().unwrap();
        assert_eq!(record.name, "Ann B");
        assert_eq!(record.title, "Engineer");
        assert_eq!(record.portfolio, "https://ann.dev");
        assert_eq!(record.location, "Accra");
        assert_eq!(record.bio, "");
        assert_eq!(record.email, "a@x.com");
        assert_eq!(record.password, "p1");
    }

    #[test]
    fn test_works_through_a_reference() {
        let kv = MemoryStore::new();
        let users = UserRecordStore::with_defaults(&kv);
        users.save(&ann()).unwrap();
        assert_eq!(kv.len(), 1);
    }
}
