//! This crate contains all shared UI for the user console.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod service;
pub use service::make_service;

pub mod views;

mod console;
pub use console::{run_search, use_user_console, use_user_service, UserConsole, UserConsoleProvider};

pub mod notifications;
pub use notifications::{notify, use_notifications, NotificationProvider, Notifications, Toaster};

mod toolbar;
pub use toolbar::ToolBar;

mod project_tags;
pub use project_tags::ProjectTagEditor;

mod create_user_form;
pub use create_user_form::CreateUserForm;

mod edit_user_dialog;
pub use edit_user_dialog::EditUserDialog;

mod search_toolbar;
pub use search_toolbar::SearchToolbar;

mod user_table;
pub use user_table::UserTable;
