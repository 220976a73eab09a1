use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Landing page. Greets the user while the session flag is set.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let state = session();

    rsx! {
        div {
            class: "home",
            h1 { class: "home-title", "LinkJobs" }

            if let Some(user) = state.greeting_user() {
                p { class: "home-greeting", "Welcome back, {user.name}!" }
                p {
                    Link { class: "link", to: Route::Profile {}, "View your profile" }
                }
            } else {
                p { class: "muted", "Find your next opportunity." }
                div {
                    class: "home-actions",
                    Link { class: "btn btn-primary", to: Route::Signup {}, "Create an account" }
                    Link { class: "btn btn-secondary", to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
