use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::console::{use_user_console, UserConsoleProvider};
use crate::create_user_form::CreateUserForm;
use crate::icons::FaArrowLeft;
use crate::Icon;

const CONSOLE_CSS: Asset = asset!("/assets/console.css");

/// The create page. Users created here are listed below the form until the
/// page is left.
#[component]
pub fn AddUserView(on_back: EventHandler<()>) -> Element {
    rsx! {
        document::Title { "Add user" }
        document::Link { rel: "stylesheet", href: CONSOLE_CSS }
        UserConsoleProvider {
            load_on_mount: false,
            div {
                class: "page",
                div {
                    class: "toolbar",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_back.call(()),
                        Icon { width: 14, height: 14, fill: "currentColor", icon: FaArrowLeft }
                        " Back to users"
                    }
                }
                CreateUserForm {}
                CreatedThisSession {}
            }
        }
    }
}

#[component]
fn CreatedThisSession() -> Element {
    let console = use_user_console();
    let created = console.store.read().get_all().to_vec();

    if created.is_empty() {
        return rsx! {};
    }

    rsx! {
        section {
            class: "created-list",
            h3 { class: "form-title", "Created this session" }
            ul {
                for user in created {
                    li {
                        key: "{user.username}",
                        span { class: "cell-username", "{user.username}" }
                        if !user.display_name.is_empty() {
                            span { class: "text-muted", " ({user.display_name})" }
                        }
                    }
                }
            }
        }
    }
}
