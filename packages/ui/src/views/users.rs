use dioxus::prelude::*;

use crate::console::UserConsoleProvider;
use crate::search_toolbar::SearchToolbar;
use crate::toolbar::ToolBar;
use crate::user_table::UserTable;

/// The user list page: search criteria above a sortable table.
///
/// Platform packages provide the navigation to the create page.
#[component]
pub fn UsersView(on_add_user: EventHandler<()>) -> Element {
    rsx! {
        document::Title { "User management" }
        UserConsoleProvider {
            div {
                class: "page",
                ToolBar { title: "User management", on_add_user }
                SearchToolbar {}
                UserTable {}
            }
        }
    }
}
