use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Top navigation shared by every page.
#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let logged_in = session().logged_in;

    rsx! {
        nav {
            class: "navbar",
            Link { class: "brand", to: Route::Home {}, "LinkJobs" }
            div {
                class: "navbar-links",
                Link { to: Route::About {}, "About" }
                if logged_in {
                    Link { to: Route::Profile {}, "Profile" }
                } else {
                    Link { to: Route::Login {}, "Log in" }
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }

        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
