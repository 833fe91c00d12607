use crate::models::{UserPatch, UserRecord};
use crate::projects::promote_names;

/// In-memory collection of the user records visible on the current page.
///
/// The store performs no validation; callers hand it well-formed records. The
/// mutation methods below are the only way to change its contents, and each one
/// bumps [`revision`](UserStore::revision) when it actually changes something.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserStore {
    records: Vec<UserRecord>,
    revision: u64,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from a snapshot.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records,
            revision: 0,
        }
    }

    /// Current snapshot in insertion order.
    pub fn get_all(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn find(&self, username: &str) -> Option<&UserRecord> {
        self.records.iter().find(|r| r.username == username)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counter bumped by every effective mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole collection, e.g. with search results.
    pub fn replace_all(&mut self, records: Vec<UserRecord>) {
        self.records = records;
        self.bump();
    }

    /// Append a record the service has confirmed as created.
    pub fn append(&mut self, record: UserRecord) {
        self.records.push(record);
        self.bump();
    }

    /// Apply `patch` to the record named `username`.
    ///
    /// Project names in the patch are promoted against the record's current tags,
    /// so tags that survive the edit keep their ids. Returns `false` and leaves the
    /// store untouched when no record matches.
    pub fn update_by_username(&mut self, username: &str, patch: &UserPatch) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.username == username) else {
            return false;
        };

        if let Some(display_name) = &patch.display_name {
            record.display_name = display_name.clone();
        }
        if let Some(role) = &patch.role {
            record.role = role.clone();
        }
        if let Some(projects) = &patch.projects {
            record.projects = promote_names(projects.iter().map(String::as_str), &record.projects);
        }
        if let Some(active) = patch.active {
            record.active = active;
        }
        self.bump();
        true
    }

    /// Remove the first record named `username`. Returns whether one was removed.
    pub fn remove_by_username(&mut self, username: &str) -> bool {
        match self.records.iter().position(|r| r.username == username) {
            Some(index) => {
                self.records.remove(index);
                self.bump();
                true
            }
            None => false,
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
