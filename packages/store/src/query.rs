//! # Query composer for `GET /user/search`
//!
//! Turns a sparse [`SearchFilter`] into the query string the user service
//! understands:
//!
//! | Filter field | Query key | Rule |
//! |--------------|-----------|------|
//! | `username` | `username` | omitted when empty |
//! | `display_name` | `displayName` | omitted when empty |
//! | `role` | `role` | omitted when empty |
//! | `active_state` | `activeYn` | omitted for `Any`, `Y` for `Active`, `N` for `Inactive` |
//! | `projects` | `projects[]` | one pair per name in list order; omitted when the list is empty |
//!
//! Values are form-urlencoded, keys are written as-is. The composer does not
//! de-duplicate projects; drafts already guarantee unique names.

use url::form_urlencoded::byte_serialize;

use crate::models::SearchFilter;

pub const USERNAME_KEY: &str = "username";
pub const DISPLAY_NAME_KEY: &str = "displayName";
pub const ROLE_KEY: &str = "role";
pub const ACTIVE_KEY: &str = "activeYn";
pub const PROJECTS_KEY: &str = "projects[]";

/// Key/value pairs for `filter`, in a fixed key order.
pub fn compose_pairs(filter: &SearchFilter) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    for (key, value) in [
        (USERNAME_KEY, &filter.username),
        (DISPLAY_NAME_KEY, &filter.display_name),
        (ROLE_KEY, &filter.role),
    ] {
        if !value.is_empty() {
            pairs.push((key, value.clone()));
        }
    }

    if let Some(flag) = filter.active_state.query_value() {
        pairs.push((ACTIVE_KEY, flag.to_string()));
    }

    for project in &filter.projects {
        pairs.push((PROJECTS_KEY, project.clone()));
    }

    pairs
}

/// Encoded query string for `filter`, without a leading `?`. Empty when nothing
/// is filtered.
pub fn compose(filter: &SearchFilter) -> String {
    compose_pairs(filter)
        .into_iter()
        .map(|(key, value)| format!("{key}={}", byte_serialize(value.as_bytes()).collect::<String>()))
        .collect::<Vec<_>>()
        .join("&")
}
