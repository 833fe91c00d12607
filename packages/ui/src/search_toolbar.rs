use dioxus::prelude::*;
use store::{ActiveState, SearchDraft};

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::console::{run_search, use_user_console, use_user_service};
use crate::icons::FaMagnifyingGlass;
use crate::notifications::use_notifications;
use crate::project_tags::ProjectTagEditor;
use crate::Icon;

const ACTIVE_CHOICES: [(ActiveState, &str); 3] = [
    (ActiveState::Any, "Any"),
    (ActiveState::Active, "Y"),
    (ActiveState::Inactive, "N"),
];

/// Search criteria for the user list. Blank fields are not sent.
#[component]
pub fn SearchToolbar() -> Element {
    let mut draft = use_signal(SearchDraft::default);
    let console = use_user_console();
    let service = use_user_service();
    let notifications = use_notifications();

    let handle_search = move |_| {
        let filter = draft().to_filter();
        tracing::debug!("Searching users with {:?}", filter);
        spawn(run_search(console, service.clone(), filter, notifications));
    };

    rsx! {
        form {
            class: "search-toolbar",
            onsubmit: move |evt: FormEvent| evt.prevent_default(),

            div {
                class: "form-field",
                Label { html_for: "search-username", "Username" }
                Input {
                    id: "search-username",
                    value: draft().username,
                    oninput: move |evt: FormEvent| draft.write().username = evt.value(),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "search-display-name", "Full Name" }
                Input {
                    id: "search-display-name",
                    value: draft().display_name,
                    oninput: move |evt: FormEvent| draft.write().display_name = evt.value(),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "search-role", "Role" }
                Input {
                    id: "search-role",
                    value: draft().role,
                    oninput: move |evt: FormEvent| draft.write().role = evt.value(),
                }
            }

            div {
                class: "form-field",
                Label { html_for: "search-projects", "Projects" }
                ProjectTagEditor {
                    id: "search-projects",
                    projects: draft().projects,
                    on_add: move |name: String| {
                        draft.write().projects.add(&name);
                    },
                    on_remove: move |index: usize| {
                        draft.write().projects.remove(index);
                    },
                }
            }

            fieldset {
                class: "form-field radio-group",
                legend { class: "form-label", "Active" }
                for (state, label) in ACTIVE_CHOICES {
                    label {
                        key: "{label}",
                        class: "radio",
                        input {
                            r#type: "radio",
                            name: "search-active",
                            checked: draft().active_state == state,
                            onchange: move |_| draft.write().active_state = state,
                        }
                        "{label}"
                    }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                onclick: handle_search,
                Icon { width: 14, height: 14, fill: "currentColor", icon: FaMagnifyingGlass }
                " Search"
            }
        }
    }
}
