use api::actions;
use dioxus::prelude::*;
use store::CreateDraft;

use crate::components::{Button, ButtonVariant, FieldError, Input, Label};
use crate::console::{use_user_console, use_user_service};
use crate::notifications::{notify, use_notifications};
use crate::project_tags::ProjectTagEditor;

/// Form for registering a new user.
///
/// A successful create appends the record to the page's store and clears the
/// form. On failure the draft is kept so the user can fix it and resubmit.
#[component]
pub fn CreateUserForm() -> Element {
    let mut draft = use_signal(CreateDraft::default);
    let mut username_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut console = use_user_console();
    let service = use_user_service();
    let mut notifications = use_notifications();

    let handle_submit = move |_| {
        if submitting() {
            return;
        }
        let snapshot = draft();
        if let Err(e) = snapshot.validate() {
            username_error.set(Some(e.message));
            return;
        }
        username_error.set(None);
        submitting.set(true);

        let service = service.clone();
        spawn(async move {
            let result = actions::create_user(&service, &snapshot).await;
            let notice = actions::commit_create(
                &mut console.store.write(),
                &mut draft.write(),
                result,
            );
            notify(&mut notifications, notice);
            submitting.set(false);
        });
    };

    rsx! {
        form {
            class: "user-form",
            onsubmit: move |evt: FormEvent| evt.prevent_default(),
            h2 { class: "form-title", "Create New User" }

            div {
                class: "form-field",
                Label { html_for: "create-username", "Username" }
                Input {
                    id: "create-username",
                    class: "w-full",
                    placeholder: "jdoe",
                    value: draft().username,
                    oninput: move |evt: FormEvent| {
                        draft.write().username = evt.value();
                        username_error.set(None);
                    },
                }
                FieldError { message: username_error() }
            }

            div {
                class: "form-field",
                Label { html_for: "create-display-name", "Full Name" }
                Input {
                    id: "create-display-name",
                    class: "w-full",
                    placeholder: "Jane Doe",
                    value: draft().display_name,
                    oninput: move |evt: FormEvent| draft.write().display_name = evt.value(),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "create-role", "Role" }
                Input {
                    id: "create-role",
                    class: "w-full",
                    placeholder: "developer",
                    value: draft().role,
                    oninput: move |evt: FormEvent| draft.write().role = evt.value(),
                }
            }

            div {
                class: "form-field form-check",
                input {
                    id: "create-active",
                    r#type: "checkbox",
                    checked: draft().active,
                    onchange: move |evt: FormEvent| draft.write().active = evt.checked(),
                }
                Label { html_for: "create-active", "Active" }
            }

            div {
                class: "form-field",
                Label { html_for: "create-projects", "Projects" }
                ProjectTagEditor {
                    id: "create-projects",
                    projects: draft().projects,
                    on_add: move |name: String| {
                        draft.write().projects.add(&name);
                    },
                    on_remove: move |index: usize| {
                        draft.write().projects.remove(index);
                    },
                }
            }

            div {
                class: "form-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: submitting(),
                    onclick: handle_submit,
                    if submitting() { "Creating..." } else { "Create User" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        draft.write().reset();
                        username_error.set(None);
                    },
                    "Clear"
                }
            }
        }
    }
}
