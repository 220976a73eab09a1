use dioxus::prelude::*;

use ui::{Page, SessionProvider};
use views::{About, Home, Login, Navbar, Profile, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Home {},
        #[route("/signup")]
        Signup {},
        #[route("/login")]
        Login {},
        #[route("/profile")]
        Profile {},
        #[route("/about")]
        About {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::Signup => Route::Signup {},
            Page::Login => Route::Login {},
            Page::Profile => Route::Profile {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
