use dioxus::prelude::*;

use ui::views::UsersView;

use crate::Route;

#[component]
pub fn Users() -> Element {
    let nav = use_navigator();

    rsx! {
        UsersView {
            on_add_user: move |_| {
                nav.push(Route::AddUser {});
            },
        }
    }
}
