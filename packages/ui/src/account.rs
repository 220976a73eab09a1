//! # Account behaviors
//!
//! Everything the pages do with the account, as plain functions over a
//! [`UserRecordStore`]. The Dioxus views collect input, call one of these, then
//! show [`Outcome::notice`] and go to [`Outcome::next`]. Keeping the behaviors
//! out of the components lets them run without a renderer.
//!
//! | Behavior | Reads | Writes | Success notice | Next page |
//! |----------|-------|--------|----------------|-----------|
//! | [`signup`] | — | record | "Account created! ..." | login |
//! | [`login`] | record | session flag | "Welcome back, <name>!" | home |
//! | [`begin_edit`] | record | — | — | — |
//! | [`edit_profile`] | record | record | "Profile updated!" | profile (refresh) |
//! | [`logout`] | — | session flag | "Logged out successfully." | login |
//!
//! Failures are [`AccountError`]s whose `Display` is the message shown to the
//! user. None of them change stored state.

use store::{KeyValueStore, ProfileEdit, StoreError, UserRecord, UserRecordStore};
use thiserror::Error;
use tracing::info;

/// Pages a behavior can send the visitor to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Signup,
    Login,
    Profile,
}

/// What the page should do after a successful behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Message to show the user.
    pub notice: String,
    /// Where to go afterwards. [`Page::Profile`] after an edit means reload.
    pub next: Page,
}

impl Outcome {
    fn new(notice: impl Into<String>, next: Page) -> Self {
        Self {
            notice: notice.into(),
            next,
        }
    }
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("No account found. Please sign up first.")]
    NoAccount,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("No user to edit.")]
    NoUserToEdit,

    #[error("Could not save your changes: {0}")]
    Store(#[from] StoreError),
}

/// Fields of the signup form. Free text; nothing is validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Fields of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Create the account, replacing any existing one.
pub fn signup<S: KeyValueStore>(
    users: &UserRecordStore<S>,
    form: SignupForm,
) -> Result<Outcome, AccountError> {
    let record = UserRecord::new(form.name, form.email, form.password);
    users.save(&record)?;
    info!(email = %record.email, "account created");
    Ok(Outcome::new("Account created! You can now sign in.", Page::Login))
}

/// Check the submitted credentials against the stored account and start a
/// session when they match.
pub fn login<S: KeyValueStore>(
    users: &UserRecordStore<S>,
    form: &LoginForm,
) -> Result<Outcome, AccountError> {
    let Some(stored) = users.load() else {
        info!("login attempted without an account");
        return Err(AccountError::NoAccount);
    };

    if !stored.matches_credentials(&form.email, &form.password) {
        info!("login rejected");
        return Err(AccountError::InvalidCredentials);
    }

    users.set_session()?;
    info!(email = %stored.email, "logged in");
    Ok(Outcome::new(format!("Welcome back, {}!", stored.name), Page::Home))
}

/// Start editing: the current profile values, ready to pre-fill a form.
pub fn begin_edit<S: KeyValueStore>(
    users: &UserRecordStore<S>,
) -> Result<ProfileEdit, AccountError> {
    users
        .load()
        .map(|record| ProfileEdit::prefilled(&record))
        .ok_or(AccountError::NoUserToEdit)
}

/// Overlay `edit` onto the stored account and save it.
///
/// The account is re-read first, so the overlay applies to whatever is stored
/// now rather than to the values the form was opened with.
pub fn edit_profile<S: KeyValueStore>(
    users: &UserRecordStore<S>,
    edit: ProfileEdit,
) -> Result<Outcome, AccountError> {
    let current = users.load().ok_or(AccountError::NoUserToEdit)?;
    let updated = edit.apply(&current);
    users.save(&updated)?;
    info!(email = %updated.email, "profile updated");
    Ok(Outcome::new("Profile updated!", Page::Profile))
}

/// End the session. The account itself stays.
pub fn logout<S: KeyValueStore>(users: &UserRecordStore<S>) -> Result<Outcome, AccountError> {
    users.clear_session()?;
    info!("logged out");
    Ok(Outcome::new("Logged out successfully.", Page::Login))
}
