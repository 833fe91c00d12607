//! Page-level user console state and hooks for the UI.

use api::{actions, HttpUserService};
use dioxus::prelude::*;
use store::{RequestSequencer, SearchFilter, UserStore};

use crate::notifications::{notify, use_notifications, Notifications};

/// Store and search sequencing owned by one page view.
///
/// Both live in signals, so any component reading the store re-renders when an
/// action commits to it.
#[derive(Clone, Copy, PartialEq)]
pub struct UserConsole {
    pub store: Signal<UserStore>,
    pub sequencer: Signal<RequestSequencer>,
}

/// Get the console of the enclosing page.
pub fn use_user_console() -> UserConsole {
    use_context::<UserConsole>()
}

/// Get the user service provided at the app root.
pub fn use_user_service() -> HttpUserService {
    use_context::<HttpUserService>()
}

/// Owner of the record store for one page.
///
/// The store starts empty and, unless `load_on_mount` is false, is filled by an
/// unfiltered search. It is dropped with the page, so navigating
/// away and back starts from scratch.
#[component]
pub fn UserConsoleProvider(
    #[props(default = true)] load_on_mount: bool,
    children: Element,
) -> Element {
    let store = use_signal(UserStore::new);
    let sequencer = use_signal(RequestSequencer::new);
    let console = use_context_provider(|| UserConsole { store, sequencer });
    let service = use_user_service();
    let notifications = use_notifications();

    use_hook(move || {
        if load_on_mount {
            spawn(run_search(
                console,
                service,
                SearchFilter::default(),
                notifications,
            ));
        }
    });

    rsx! {
        {children}
    }
}

/// Search and commit the results, dropping them if a newer search was issued
/// in the meantime.
pub async fn run_search(
    mut console: UserConsole,
    service: HttpUserService,
    filter: SearchFilter,
    mut notifications: Signal<Notifications>,
) {
    let revision = console.store.read().revision();
    let ticket = console.sequencer.write().issue(revision);
    let result = actions::search_users(&service, &filter).await;
    let notice = actions::commit_search(
        &mut console.store.write(),
        &console.sequencer.read(),
        ticket,
        result,
    );
    if let Some(notice) = notice {
        notify(&mut notifications, notice);
    }
}
