use dioxus::prelude::*;

use crate::icons::FaUserPlus;
use crate::Icon;

const CONSOLE_CSS: Asset = asset!("/assets/console.css");

/// Page header of the user list with the "Add User" action.
#[component]
pub fn ToolBar(title: String, on_add_user: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CONSOLE_CSS }
        div {
            class: "toolbar",
            h1 { class: "toolbar-title", "{title}" }
            button {
                r#type: "button",
                class: "btn btn-primary",
                onclick: move |_| on_add_user.call(()),
                Icon { width: 14, height: 14, fill: "currentColor", icon: FaUserPlus }
                " Add User"
            }
        }
    }
}
