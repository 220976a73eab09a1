use dioxus::prelude::*;
use store::ProfileEdit;

use super::EditProfileDialog;
use crate::account::{self, Page};
use crate::{make_user_store, notify, refresh_session, use_session, ProfileCard};

/// Shared profile page body.
///
/// Reads the stored account when mounted. Shows the profile with edit and
/// log out actions, or a prompt to sign up when there is no account.
/// Navigation is left to the platform package via `on_navigate`.
#[component]
pub fn ProfileView(on_navigate: EventHandler<Page>) -> Element {
    let mut session = use_session();
    let mut card = use_signal(|| make_user_store().load().map(|r| ProfileCard::from_record(&r)));
    let mut editing = use_signal(|| Option::<ProfileEdit>::None);

    let handle_edit = move |_| match account::begin_edit(&make_user_store()) {
        Ok(edit) => editing.set(Some(edit)),
        Err(e) => notify(&e.to_string()),
    };

    let handle_save = move |edit: ProfileEdit| {
        editing.set(None);
        let users = make_user_store();
        match account::edit_profile(&users, edit) {
            Ok(outcome) => notify(&outcome.notice),
            Err(e) => notify(&e.to_string()),
        }
        card.set(users.load().map(|r| ProfileCard::from_record(&r)));
        refresh_session(&mut session);
    };

    let handle_logout = move |_| match account::logout(&make_user_store()) {
        Ok(outcome) => {
            notify(&outcome.notice);
            refresh_session(&mut session);
            on_navigate.call(outcome.next);
        }
        Err(e) => notify(&e.to_string()),
    };

    let Some(profile) = card() else {
        return rsx! {
            div {
                class: "profile-container",
                p {
                    class: "muted",
                    "No profile found. Please "
                    a {
                        class: "link",
                        href: "#",
                        onclick: move |evt: Event<MouseData>| {
                            evt.prevent_default();
                            on_navigate.call(Page::Signup);
                        },
                        "create one"
                    }
                    "."
                }
            }
        };
    };

    rsx! {
        div {
            class: "profile-container",

            div {
                class: "profile-header",
                img {
                    class: "profile-avatar",
                    src: "{profile.avatar_url}",
                    alt: "Avatar",
                }
                div {
                    h2 { class: "profile-name", "{profile.name}" }
                    p { class: "profile-title", "{profile.title}" }
                    p { class: "muted", "{profile.location}" }
                }
            }

            h3 { class: "section-title", "Bio" }
            p { class: "profile-bio", "{profile.bio}" }

            h3 { class: "section-title", "Portfolio" }
            p {
                a { class: "link", href: "{profile.portfolio_href}", "{profile.portfolio_label}" }
            }

            div {
                class: "profile-actions",
                button { class: "btn btn-primary", onclick: handle_edit, "Edit Profile" }
                button { class: "btn btn-secondary", onclick: handle_logout, "Log Out" }
            }
        }

        if let Some(initial) = editing() {
            EditProfileDialog {
                initial,
                on_save: handle_save,
                on_cancel: move |_| editing.set(None),
            }
        }
    }
}
