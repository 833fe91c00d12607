//! # Domain models for user records
//!
//! Defines the records held by [`crate::UserStore`] and the request bodies sent to
//! the remote user service. Every type is `Serialize + Deserialize` so it can go
//! over the wire as JSON unchanged.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserRecord`] | A user as returned by the service: optional server id, the immutable `username`, display name, role, project tags and the active flag. |
//! | [`ProjectTag`] | A project attached to a user, `{id, name}`. Names are unique within one record. |
//! | [`NewUser`] | Body of `POST /user/insert`. Projects are bare names, or `null` when there are none. |
//! | [`UserPatch`] | Body of `PATCH /user/:username`. Every field is optional; `username` is deliberately absent. |
//! | [`SearchFilter`] | Sparse search criteria turned into a query string by [`crate::query`]. |
//!
//! ## Wire format
//!
//! Field names are camelCase. The display name is written as `displayName` but
//! also read from `fullName`/`fullname`, which older service builds emit. The
//! active flag travels as `activeYn: "Y" | "N"` and is a plain `bool` in Rust
//! (see [`yes_no`]).

use serde::{Deserialize, Deserializer, Serialize};

use crate::projects::promote_names;

/// A user record as held by the store.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-assigned id, if the service sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Unique login name, immutable after creation
    pub username: String,
    #[serde(default, alias = "fullName", alias = "fullname")]
    pub display_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<ProjectTag>,
    #[serde(rename = "activeYn", with = "yes_no", default = "default_active")]
    pub active: bool,
}

impl UserRecord {
    /// Project names in list order.
    pub fn project_names(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.name.as_str()).collect()
    }

    /// `"Y"` or `"N"`, as shown in the table.
    pub fn active_label(&self) -> &'static str {
        yes_no::label(self.active)
    }
}

/// A project attached to a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTag {
    pub id: i64,
    pub name: String,
}

impl ProjectTag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Request body for creating a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub display_name: String,
    pub role: String,
    /// `None` is sent as `null` when no project was added
    pub projects: Option<Vec<String>>,
    #[serde(rename = "activeYn", with = "yes_no")]
    pub active: bool,
}

impl NewUser {
    /// The record the store holds once the service has accepted this body.
    /// Project ids are numbered from zero in list order.
    pub fn to_record(&self) -> UserRecord {
        let names = self.projects.iter().flatten().map(String::as_str);
        UserRecord {
            id: None,
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            role: self.role.clone(),
            projects: promote_names(names, &[]),
            active: self.active,
        }
    }
}

/// Partial update for an existing user, keyed by username in the request path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
    #[serde(
        rename = "activeYn",
        default,
        skip_serializing_if = "Option::is_none",
        with = "yes_no::option"
    )]
    pub active: Option<bool>,
}

/// Tri-state filter on the active flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveState {
    #[default]
    Any,
    Active,
    Inactive,
}

impl ActiveState {
    /// Value of the `activeYn` query parameter, `None` when the flag is not filtered.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            ActiveState::Any => None,
            ActiveState::Active => Some("Y"),
            ActiveState::Inactive => Some("N"),
        }
    }
}

/// Sparse search criteria. Empty strings mean "not specified".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub projects: Vec<String>,
    pub active_state: ActiveState,
}

fn default_active() -> bool {
    true
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ProjectTag>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ProjectTag>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde adapter for the `"Y"`/`"N"` active flag.
pub mod yes_no {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn label(active: bool) -> &'static str {
        if active {
            "Y"
        } else {
            "N"
        }
    }

    fn parse<E: de::Error>(value: &str) -> Result<bool, E> {
        match value {
            "Y" | "y" => Ok(true),
            "N" | "n" => Ok(false),
            other => Err(E::invalid_value(
                de::Unexpected::Str(other),
                &"\"Y\" or \"N\"",
            )),
        }
    }

    pub fn serialize<S: Serializer>(active: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(label(*active))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse(&value)
    }

    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            active: &Option<bool>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match active {
                Some(active) => super::serialize(active, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<bool>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(value) => super::parse(&value).map(Some),
                None => Ok(None),
            }
        }
    }
}
