use dioxus::prelude::*;
use ui::views::ProfileView;
use ui::Page;

use crate::Route;

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            id: "profileContainer",
            ProfileView {
                on_navigate: move |page: Page| {
                    nav.push(Route::from(page));
                },
            }
        }
    }
}
