use dioxus::prelude::*;

use ui::views::AddUserView;

use crate::Route;

#[component]
pub fn AddUser() -> Element {
    let nav = use_navigator();

    rsx! {
        AddUserView {
            on_back: move |_| {
                nav.push(Route::Users {});
            },
        }
    }
}
