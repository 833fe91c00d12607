use dioxus::prelude::*;

use ui::{NotificationProvider, Toaster};
use views::{AddUser, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/user")]
    Users {},
    #[route("/user/add")]
    AddUser {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let service = use_context_provider(ui::make_service);
    use_hook(|| tracing::info!("User console using {}", service.config().base_url()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        NotificationProvider {
            Router::<Route> {}
            Toaster {}
        }
    }
}

/// Redirect `/` to `/user`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    tracing::debug!("Redirecting / to /user");
    nav.replace(Route::Users {});
    rsx! {}
}
