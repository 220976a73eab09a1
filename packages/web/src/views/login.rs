//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{account, make_user_store, notify, refresh_session, use_session, LoginForm};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();

        let form = LoginForm {
            email: email(),
            password: password(),
        };
        match account::login(&make_user_store(), &form) {
            Ok(outcome) => {
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

            h1 { class: "auth-title", "Sign In" }
            p { class: "muted", "Welcome back to LinkJobs" }

            form {
                id: "loginForm",
                class: "form-stack",
                onsubmit: handle_login,

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

                button { class: "btn btn-primary", r#type: "submit", "Sign in" }
            }

            p {
                class: "muted",
                "No account yet? "
                Link { class: "link", to: Route::Signup {}, "Create one" }
            }
        }
    }
}
