use dioxus::prelude::*;
use store::ProjectList;

use crate::components::{Button, ButtonVariant, Input};
use crate::icons::FaXmark;
use crate::Icon;

/// "Add project" popover plus the removable chips of a draft's project list.
///
/// The list itself belongs to the parent draft; this component only reports
/// additions and removals.
#[component]
pub fn ProjectTagEditor(
    id: String,
    projects: ProjectList,
    on_add: EventHandler<String>,
    on_remove: EventHandler<usize>,
) -> Element {
    let mut open = use_signal(|| false);
    let mut pending = use_signal(String::new);

    let known = projects.clone();
    let handle_add = move |_| {
        let name = pending();
        if name.is_empty() || known.contains(&name) {
            return;
        }
        on_add.call(name);
        pending.set(String::new());
    };

    rsx! {
        div {
            class: "project-editor",
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| open.set(!open()),
                "Add Project"
            }

            if open() {
                div {
                    class: "popover",
                    h4 { class: "popover-title", "Add Projects" }
                    Input {
                        id: "{id}-input",
                        class: "w-full",
                        placeholder: "Project Name",
                        value: pending(),
                        oninput: move |evt: FormEvent| pending.set(evt.value()),
                    }
                    Button {
                        class: "w-half",
                        onclick: handle_add,
                        "Add"
                    }
                }
            }

            div {
                class: "chip-list",
                for (index, name) in projects.iter().enumerate() {
                    div {
                        key: "{name}",
                        class: "chip",
                        span { "{name}" }
                        Button {
                            variant: ButtonVariant::Destructive,
                            class: "chip-remove",
                            title: "Remove {name}",
                            onclick: move |_| on_remove.call(index),
                            Icon { width: 10, height: 10, fill: "currentColor", icon: FaXmark }
                        }
                    }
                }
            }
        }
    }
}
