//! This crate contains the account behaviors and shared UI for the workspace.

pub mod account;
pub use account::{AccountError, LoginForm, Outcome, Page, SignupForm};

mod notify;
pub use notify::notify;

mod profile;
pub use profile::{avatar_url, ProfileCard};

mod storage;
pub use storage::make_user_store;

mod session;
pub use session::{refresh_session, use_session, SessionProvider, SessionState};

pub mod views;
