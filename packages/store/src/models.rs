//! # Account models
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserRecord`] | The one account kept on this device: profile fields plus the login email and the plain-text password. Serialised as JSON with exactly these field names. |
//! | [`ProfileEdit`] | A set of proposed profile changes. Every field is optional; [`ProfileEdit::apply`] overlays the present ones onto a record. |
//!
//! `ProfileEdit` has no `email` or `password` field, so an edit can never
//! change the login identity.

use serde::{Deserialize, Serialize};

/// Title given to every freshly created account.
pub const DEFAULT_TITLE: &str = "New User";

/// The single persisted profile/credential record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    /// Login identifier, compared verbatim.
    pub email: String,
    /// Stored and compared in plain text.
    pub password: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_title")]
    pub title: String,
    /// URL-like string, not validated.
    #[serde(default)]
    pub portfolio: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl UserRecord {
    /// A fresh account: the three signup fields plus the profile defaults.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            bio: String::new(),
            location: String::new(),
            title: default_title(),
            portfolio: String::new(),
        }
    }

    /// Exact, case-sensitive comparison of both credentials.
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// Proposed changes to the editable profile fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEdit {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub portfolio: Option<String>,
}

impl ProfileEdit {
    /// An edit that sets all five profile fields to the given record's values.
    /// Useful as the pre-filled starting point of an edit form.
    pub fn prefilled(record: &UserRecord) -> Self {
        Self {
            name: Some(record.name.clone()),
            title: Some(record.title.clone()),
            bio: Some(record.bio.clone()),
            location: Some(record.location.clone()),
            portfolio: Some(record.portfolio.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.title.is_none()
            && self.bio.is_none()
            && self.location.is_none()
            && self.portfolio.is_none()
    }

    /// Overlay the proposed fields onto `record`, keeping everything else.
    pub fn apply(self, record: &UserRecord) -> UserRecord {
        let current = record.clone();
        UserRecord {
            name: self.name.unwrap_or(current.name),
            title: self.title.unwrap_or(current.title),
            bio: self.bio.unwrap_or(current.bio),
            location: self.location.unwrap_or(current.location),
            portfolio: self.portfolio.unwrap_or(current.portfolio),
            email: current.email,
            password: current.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let record = UserRecord::new("Ann", "a@x.com", "p1");
        assert_eq!(
            record,
            UserRecord {
                name: "Ann".to_string(),
                email: "a@x.com".to_string(),
                password: "p1".to_string(),
                bio: String::new(),
                location: String::new(),
                title: "New User".to_string(),
                portfolio: String::new(),
            }
        );
    }

    #[test]
    fn test_json_field_names() {
        let record = UserRecord::new("Ann", "a@x.com", "p1");
        let value: serde_json::Value = serde_json::to_value(&record).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["bio", "email", "location", "name", "password", "portfolio", "title"]
        );
    }

    #[test]
    fn test_missing_optional_fields_take_defaults() {
        let json = r#"{"name":"Ann","email":"a@x.com","password":"p1"}"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, UserRecord::new("Ann", "a@x.com", "p1"));
    }

    #[test]
    fn test_credentials_are_exact() {
        let record = UserRecord::new("Ann", "a@x.com", "p1");
        assert!(record.matches_credentials("a@x.com", "p1"));
        assert!(!record.matches_credentials("A@x.com", "p1"));
        assert!(!record.matches_credentials("a@x.com", "p1 "));
        assert!(!record.matches_credentials("", ""));
    }

    #[test]
    fn test_apply_overlays_only_present_fields() {
        let record = UserRecord::new("Ann", "a@x.com", "p1");
        let edit = ProfileEdit {
            bio: Some("Rustacean".to_string()),
            location: Some("Lagos".to_string()),
            ..Default::default()
        };

        let updated = edit.apply(&record);
        assert_eq!(updated.bio, "Rustacean");
        assert_eq!(updated.location, "Lagos");
        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.title, "New User");
        assert_eq!(updated.portfolio, "");
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(updated.password, "p1");
    }

    #[test]
    fn test_empty_edit_is_identity() {
        let record = UserRecord::new("Ann", "a@x.com", "p1");
        let edit = ProfileEdit::default();
        assert!(edit.is_empty());
        assert_eq!(edit.apply(&record), record);
    }

    #[test]
    fn test_prefilled_edit_is_identity() {
        let mut record = UserRecord::new("Ann", "a@x.com", "p1");
        record.portfolio = "https://ann.dev".to_string();
        let edit = ProfileEdit::prefilled(&record);
        assert!(!edit.is_empty());
        assert_eq!(edit.apply(&record), record);
    }
}
