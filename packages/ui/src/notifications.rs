use api::{Notice, NoticeLevel};
use dioxus::prelude::*;

/// Most toasts kept on screen at once; older ones are dropped first.
const MAX_TOASTS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub timestamp: String,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, notice: Notice) {
        self.next_id += 1;
        self.entries.push(Toast {
            id: self.next_id,
            timestamp: current_time(),
            notice,
        });
        if self.entries.len() > MAX_TOASTS {
            let overflow = self.entries.len() - MAX_TOASTS;
            self.entries.drain(..overflow);
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify(notifications: &mut Signal<Notifications>, notice: Notice) {
    notifications.write().push(notice);
}

/// Provides the toast list to everything below it.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let notifications = use_signal(Notifications::default);
    use_context_provider(|| notifications);

    rsx! {
        {children}
    }
}

#[component]
pub fn Toaster() -> Element {
    let mut notifications = use_notifications();
    let entries = notifications().entries.clone();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "toaster",
            for toast in entries.into_iter().rev() {
                div {
                    key: "{toast.id}",
                    class: match toast.notice.level {
                        NoticeLevel::Error => "toast error",
                        NoticeLevel::Success => "toast success",
                        NoticeLevel::Info => "toast info",
                    },
                    span { class: "toast-time", "{toast.timestamp}" }
                    span { class: "toast-message", "{toast.notice.message}" }
                    button {
                        class: "toast-close",
                        title: "Dismiss",
                        onclick: move |_| notifications.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
