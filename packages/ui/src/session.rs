//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::{KeyValueStore, UserRecord, UserRecordStore};

use crate::make_user_store;

/// What the pages know about the visitor.
///
/// `logged_in` mirrors the stored session flag and `user` the stored record;
/// the two are read independently and may disagree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserRecord>,
    pub logged_in: bool,
}

impl SessionState {
    pub fn read<S: KeyValueStore>(users: &UserRecordStore<S>) -> Self {
        Self {
            user: users.load(),
            logged_in: users.is_session(),
        }
    }

    /// The user to greet: only when logged in and a record exists.
    pub fn greeting_user(&self) -> Option<&UserRecord> {
        if self.logged_in {
            self.user.as_ref()
        } else {
            None
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user logs in, logs out or edits
/// their profile.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Re-read the session from storage after a behavior changed it.
pub fn refresh_session(session: &mut Signal<SessionState>) {
    session.set(SessionState::read(&make_user_store()));
}

/// Provider component that loads the session from storage.
/// Wrap your app with this component to enable [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| SessionState::read(&make_user_store()));
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_greets_only_when_logged_in() {
        let users = UserRecordStore::with_defaults(MemoryStore::new());
        assert_eq!(SessionState::read(&users), SessionState::default());

        users.save(&UserRecord::new("Ann", "a@x.com", "p1")).unwrap();
        let state = SessionState::read(&users);
        assert!(state.user.is_some());
        assert!(state.greeting_user().is_none());

        users.set_session().unwrap();
        let state = SessionState::read(&users);
        assert_eq!(state.greeting_user().map(|u| u.name.as_str()), Some("Ann"));
    }

    #[test]
    fn test_orphaned_flag_greets_nobody() {
        let users = UserRecordStore::with_defaults(MemoryStore::new());
        users.set_session().unwrap();

        let state = SessionState::read(&users);
        assert!(state.logged_in);
        assert!(state.greeting_user().is_none());
    }

    #[test]
    fn test_signup_while_logged_in_greets_new_user() {
        use crate::account::{login, signup, LoginForm, SignupForm};

        let users = UserRecordStore::with_defaults(MemoryStore::new());
        signup(
            &users,
            SignupForm {
                name: "Ann".to_string(),
                email: "a@x.com".to_string(),
                password: "p1".to_string(),
            },
        )
        .unwrap();
        login(
            &users,
            &LoginForm {
                email: "a@x.com".to_string(),
                password: "p1".to_string(),
            },
        )
        .unwrap();
        let before = SessionState::read(&users);

        signup(
            &users,
            SignupForm {
                name: "Bob".to_string(),
                email: "b@y.com".to_string(),
                password: "p2".to_string(),
            },
        )
        .unwrap();
        let after = SessionState::read(&users);

        // The flag survives signup, so the re-read state greets the new record
        assert_ne!(before, after);
        assert_eq!(after.greeting_user().map(|u| u.name.as_str()), Some("Bob"));
    }
}
