//! # Form drafts
//!
//! Unsaved form state for the three user forms. Each draft owns its own
//! [`ProjectList`], so the create form, the edit dialog and the search toolbar
//! never share project tags.
//!
//! | Draft | Produces | Validation |
//! |-------|----------|------------|
//! | [`CreateDraft`] | [`NewUser`] | `username` must not be blank |
//! | [`EditDraft`] | [`UserPatch`] | none; the username comes from the record being edited |
//! | [`SearchDraft`] | [`SearchFilter`] | none |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ActiveState, NewUser, SearchFilter, UserPatch, UserRecord};
use crate::projects::ProjectList;

/// A required field was left blank. Shown inline under the field.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn required(field: &'static str, label: &str) -> Self {
        Self {
            field,
            message: format!("{label} is required"),
        }
    }
}

/// Draft state of the create-user form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateDraft {
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub active: bool,
    pub projects: ProjectList,
}

impl Default for CreateDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            display_name: String::new(),
            role: String::new(),
            active: true,
            projects: ProjectList::new(),
        }
    }
}

impl CreateDraft {
    /// Check required fields and build the request body.
    pub fn validate(&self) -> Result<NewUser, ValidationError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ValidationError::required("username", "Username"));
        }

        Ok(NewUser {
            username: username.to_string(),
            display_name: self.display_name.clone(),
            role: self.role.clone(),
            projects: if self.projects.is_empty() {
                None
            } else {
                Some(self.projects.to_vec())
            },
            active: self.active,
        })
    }

    /// Back to an empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Draft state of the edit dialog for one existing record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditDraft {
    username: String,
    pub display_name: String,
    pub role: String,
    pub active: bool,
    pub projects: ProjectList,
}

impl EditDraft {
    /// Pre-populate the draft from the record being edited.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            username: record.username.clone(),
            display_name: record.display_name.clone(),
            role: record.role.clone(),
            active: record.active,
            projects: ProjectList::from_tags(&record.projects),
        }
    }

    /// The key of the record being edited. Not editable.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn to_patch(&self) -> UserPatch {
        UserPatch {
            display_name: Some(self.display_name.clone()),
            role: Some(self.role.clone()),
            projects: Some(self.projects.to_vec()),
            active: Some(self.active),
        }
    }
}

/// Draft state of the search toolbar.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchDraft {
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub active_state: ActiveState,
    pub projects: ProjectList,
}

impl SearchDraft {
    pub fn to_filter(&self) -> SearchFilter {
        SearchFilter {
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            role: self.role.clone(),
            projects: self.projects.to_vec(),
            active_state: self.active_state,
        }
    }
}
