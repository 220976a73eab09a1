//! Signup page view with name/email/password form.

use dioxus::prelude::*;
use ui::{account, make_user_store, notify, refresh_session, use_session, SignupForm};

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let nav = use_navigator();
    let mut session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();

        let form = SignupForm {
            name: name(),
            email: email(),
            password: password(),
        };
        match account::signup(&make_user_store(), form) {
            Ok(outcome) => {
                // The record changed under a possibly still-set session flag.
                refresh_session(&mut session);
                notify(&outcome.notice);
                nav.push(Route::from(outcome.next));
            }
            Err(e) => notify(&e.to_string()),
        }
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { class: "auth-title", "Create Account" }
            p { class: "muted", "Join LinkJobs" }

            form {
                id: "signupForm",
                class: "form-stack",
                onsubmit: handle_signup,

                input {
                    class: "form-input",
                    name: "name",
                    r#type: "text",
                    placeholder: "Full name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    class: "form-input",
                    name: "email",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "form-input",
                    name: "password",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button { class: "btn btn-primary", r#type: "submit", "Sign up" }
            }

            p {
                class: "muted",
                "Already have an account? "
                Link { class: "link", to: Route::Login {}, "Sign in" }
            }
        }
    }
}
