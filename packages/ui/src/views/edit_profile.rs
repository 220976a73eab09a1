use dioxus::prelude::*;
use store::ProfileEdit;

use super::ModalOverlay;

/// Dialog for editing the five profile fields, pre-filled from `initial`.
///
/// Submitting hands every field to `on_save`, changed or not; email and
/// password are not editable here.
#[component]
pub fn EditProfileDialog(
    initial: ProfileEdit,
    on_save: EventHandler<ProfileEdit>,
    on_cancel: EventHandler<()>,
) -> Element {
    let name = use_signal(|| initial.name.clone().unwrap_or_default());
    let title = use_signal(|| initial.title.clone().unwrap_or_default());
    let bio = use_signal(|| initial.bio.clone().unwrap_or_default());
    let location = use_signal(|| initial.location.clone().unwrap_or_default());
    let portfolio = use_signal(|| initial.portfolio.clone().unwrap_or_default());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_save.call(ProfileEdit {
            name: Some(name()),
            title: Some(title()),
            bio: Some(bio()),
            location: Some(location()),
            portfolio: Some(portfolio()),
        });
    };

    rsx! {
        ModalOverlay {
            title: "Edit Profile",
            on_close: move |_| on_cancel.call(()),
            form {
                class: "form-stack",
                onsubmit: handle_submit,

                TextField { id: "edit-name", label: "Full Name", value: name }
                TextField { id: "edit-title", label: "Job Title", value: title }
                TextField { id: "edit-bio", label: "Bio", value: bio, multiline: true }
                TextField { id: "edit-location", label: "Location", value: location }
                TextField { id: "edit-portfolio", label: "Portfolio Link", value: portfolio }

                div {
                    class: "form-actions",
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
fn TextField(
    id: String,
    label: String,
    value: Signal<String>,
    #[props(default)] multiline: bool,
) -> Element {
    let mut value = value;

    rsx! {
        label { class: "form-label", r#for: "{id}", "{label}" }
        if multiline {
            textarea {
                id: "{id}",
                class: "form-input",
                rows: "4",
                value: value(),
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
        } else {
            input {
                id: "{id}",
                class: "form-input",
                r#type: "text",
                value: value(),
                oninput: move |evt: FormEvent| value.set(evt.value()),
            }
        }
    }
}
