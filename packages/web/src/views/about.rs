use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div {
            class: "about",
            h1 { "About LinkJobs" }
            p { "Connecting talent to opportunities across Africa." }
        }
    }
}
