use api::actions;
use dioxus::prelude::*;
use store::{EditDraft, UserRecord};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::console::{use_user_console, use_user_service};
use crate::icons::FaPen;
use crate::notifications::{notify, use_notifications};
use crate::project_tags::ProjectTagEditor;
use crate::views::ModalOverlay;
use crate::Icon;

/// Edit button for one table row plus the modal it opens.
///
/// The draft is rebuilt from `user` every time the dialog opens, so unsaved
/// changes from an earlier, cancelled edit are discarded.
#[component]
pub fn EditUserDialog(user: UserRecord) -> Element {
    let mut open = use_signal(|| false);
    let mut submitting = use_signal(|| false);
    let mut draft = use_signal(|| EditDraft::from_record(&user));
    let mut console = use_user_console();
    let service = use_user_service();
    let mut notifications = use_notifications();

    let record = user.clone();
    let handle_open = move |_| {
        draft.set(EditDraft::from_record(&record));
        open.set(true);
    };

    let handle_submit = move |_| {
        if submitting() {
            return;
        }
        submitting.set(true);
        let snapshot = draft();
        let service = service.clone();
        spawn(async move {
            let result = actions::update_user(&service, &snapshot).await;
            let saved = result.is_ok();
            let notice = actions::commit_update(
                &mut console.store.write(),
                snapshot.username(),
                result,
            );
            notify(&mut notifications, notice);
            submitting.set(false);
            if saved {
                open.set(false);
            }
        });
    };

    let username = user.username.clone();
    let id = format!("edit-{username}");

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            title: "Edit {username}",
            onclick: handle_open,
            Icon { width: 14, height: 14, fill: "currentColor", icon: FaPen }
        }

        if open() {
            ModalOverlay {
                on_close: move |_| {
                    if !submitting() {
                        open.set(false);
                    }
                },
                div {
                    class: "p-6",
                    h2 { class: "form-title", "Edit {username}" }

                    div {
                        class: "form-field",
                        Label { html_for: "{id}-display-name", "Full Name" }
                        Input {
                            id: "{id}-display-name",
                            class: "w-full",
                            value: draft().display_name,
                            oninput: move |evt: FormEvent| draft.write().display_name = evt.value(),
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "{id}-role", "Role" }
                        Input {
                            id: "{id}-role",
                            class: "w-full",
                            value: draft().role,
                            oninput: move |evt: FormEvent| draft.write().role = evt.value(),
                        }
                    }

                    div {
                        class: "form-field form-check",
                        input {
                            id: "{id}-active",
                            r#type: "checkbox",
                            checked: draft().active,
                            onchange: move |evt: FormEvent| draft.write().active = evt.checked(),
                        }
                        Label { html_for: "{id}-active", "Active" }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "{id}-projects", "Projects" }
                        ProjectTagEditor {
                            id: "{id}-projects",
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
                            if submitting() { "Saving..." } else { "Save" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: submitting(),
                            onclick: move |_| open.set(false),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
