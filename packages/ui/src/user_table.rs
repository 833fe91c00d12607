use api::actions;
use dioxus::prelude::*;
use store::table::sorted;
use store::{DeleteFlow, SortColumn, SortDirection, SortState, UserRecord};

use crate::components::{Button, ButtonVariant};
use crate::console::{use_user_console, use_user_service};
use crate::edit_user_dialog::EditUserDialog;
use crate::icons::{FaSort, FaSortDown, FaSortUp, FaTrash};
use crate::notifications::{notify, use_notifications};
use crate::views::ConfirmDialog;
use crate::Icon;

/// The record list of the enclosing page, with sortable headers and per-row
/// edit and delete actions.
#[component]
pub fn UserTable() -> Element {
    let console = use_user_console();
    let mut sort = use_signal(SortState::default);

    let rows = sorted(console.store.read().get_all(), sort());

    if rows.is_empty() {
        return rsx! {
            div {
                class: "table-empty",
                p { "No users to show." }
            }
        };
    }

    rsx! {
        table {
            class: "user-table",
            thead {
                tr {
                    for column in SortColumn::ALL {
                        th {
                            key: "{column.label()}",
                            class: "sortable",
                            onclick: move |_| sort.write().toggle(column),
                            span { "{column.label()}" }
                            SortIndicator { direction: sort().direction_of(column) }
                        }
                    }
                    th { "Actions" }
                }
            }
            tbody {
                for user in rows {
                    UserRow { key: "{user.username}", user }
                }
            }
        }
    }
}

#[component]
fn SortIndicator(direction: Option<SortDirection>) -> Element {
    let icon = match direction {
        None => rsx! { Icon { width: 10, height: 10, fill: "currentColor", icon: FaSort } },
        Some(SortDirection::Ascending) => {
            rsx! { Icon { width: 10, height: 10, fill: "currentColor", icon: FaSortUp } }
        }
        Some(SortDirection::Descending) => {
            rsx! { Icon { width: 10, height: 10, fill: "currentColor", icon: FaSortDown } }
        }
    };

    rsx! {
        span { class: "sort-indicator", {icon} }
    }
}

#[component]
fn UserRow(user: UserRecord) -> Element {
    rsx! {
        tr {
            td { class: "cell-username", "{user.username}" }
            td { "{user.display_name}" }
            td { "{user.role}" }
            td {
                div {
                    class: "chip-list",
                    for project in user.projects.iter() {
                        span { key: "{project.id}", class: "chip", "{project.name}" }
                    }
                }
            }
            td { class: "cell-active", "{user.active_label()}" }
            td {
                class: "cell-actions",
                EditUserDialog { user: user.clone() }
                DeleteUserButton { username: user.username.clone() }
            }
        }
    }
}

/// Trash button for one row. Nothing is sent until the user confirms.
#[component]
fn DeleteUserButton(username: String) -> Element {
    let mut flow = use_signal(DeleteFlow::default);
    let mut console = use_user_console();
    let service = use_user_service();
    let mut notifications = use_notifications();

    let name = username.clone();
    let handle_confirm = move |_| {
        if !flow.write().confirm() {
            return;
        }
        let username = name.clone();
        let service = service.clone();
        spawn(async move {
            let Some(result) = actions::delete_user(&service, flow(), &username).await else {
                return;
            };
            let notice = actions::commit_delete(
                &mut console.store.write(),
                &mut flow.write(),
                &username,
                result,
            );
            notify(&mut notifications, notice);
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class: "text-destructive",
            title: "Delete {username}",
            disabled: flow().is_deleting(),
            onclick: move |_| {
                flow.write().request();
            },
            Icon { width: 14, height: 14, fill: "currentColor", icon: FaTrash }
        }

        if flow().is_confirming() || flow().is_deleting() {
            ConfirmDialog {
                title: "Delete user",
                message: "Delete {username}? This cannot be undone.",
                busy: flow().is_deleting(),
                on_confirm: handle_confirm,
                on_cancel: move |_| {
                    flow.write().cancel();
                },
            }
        }
    }
}
