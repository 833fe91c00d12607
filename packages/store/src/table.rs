//! # List presentation
//!
//! Everything the user table needs besides markup: column sorting and the
//! per-row delete confirmation flow.
//!
//! ## Sorting
//!
//! [`SortState::toggle`] follows the header-click behaviour of the table: the
//! first click on a column sorts ascending, a click on the column already sorted
//! ascending flips it to descending, and any other click sorts ascending.
//! [`sorted`] applies a stable sort and never touches the store itself.
//!
//! The projects column orders by number of projects first and by the first
//! project's name on ties. It is not a full comparison of project sets.
//!
//! ## Delete flow
//!
//! ```text
//! Idle ──request──▶ ConfirmPending ──confirm──▶ Deleting ──finish(ok)──▶ Removed
//!   ▲                    │                         │
//!   └──────cancel────────┘                         └──finish(err)──▶ Failed
//! ```
//!
//! Only a flow in `Deleting` may reach the network. `Failed` leaves the row as it
//! was; the user can start over with another `request`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::UserRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Username,
    DisplayName,
    Role,
    Projects,
    Active,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Username,
        SortColumn::DisplayName,
        SortColumn::Role,
        SortColumn::Projects,
        SortColumn::Active,
    ];

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Username => "Username",
            SortColumn::DisplayName => "Full name",
            SortColumn::Role => "Role",
            SortColumn::Projects => "Projects",
            SortColumn::Active => "Active",
        }
    }

    pub fn compare(self, a: &UserRecord, b: &UserRecord) -> Ordering {
        match self {
            SortColumn::Username => a.username.cmp(&b.username),
            SortColumn::DisplayName => a.display_name.cmp(&b.display_name),
            SortColumn::Role => a.role.cmp(&b.role),
            SortColumn::Projects => compare_projects(a, b),
            SortColumn::Active => a.active.cmp(&b.active),
        }
    }
}

fn compare_projects(a: &UserRecord, b: &UserRecord) -> Ordering {
    a.projects.len().cmp(&b.projects.len()).then_with(|| {
        match (a.projects.first(), b.projects.first()) {
            (Some(x), Some(y)) => x.name.cmp(&y.name),
            _ => Ordering::Equal,
        }
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Which column, if any, the table is sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<(SortColumn, SortDirection)>,
}

impl SortState {
    pub fn by(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            key: Some((column, direction)),
        }
    }

    /// Header click on `column`.
    pub fn toggle(&mut self, column: SortColumn) {
        let direction = match self.key {
            Some((current, SortDirection::Ascending)) if current == column => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.key = Some((column, direction));
    }

    /// Direction of `column` if it is the sorted one.
    pub fn direction_of(&self, column: SortColumn) -> Option<SortDirection> {
        match self.key {
            Some((current, direction)) if current == column => Some(direction),
            _ => None,
        }
    }
}

/// Records in display order. Store order is kept when unsorted and for ties.
pub fn sorted(records: &[UserRecord], sort: SortState) -> Vec<UserRecord> {
    let mut rows = records.to_vec();
    if let Some((column, direction)) = sort.key {
        rows.sort_by(|a, b| {
            let ordering = column.compare(a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    rows
}

/// Per-row delete state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeleteFlow {
    #[default]
    Idle,
    ConfirmPending,
    Deleting,
    Removed,
    Failed,
}

impl DeleteFlow {
    /// Delete button pressed: ask for confirmation.
    pub fn request(&mut self) -> bool {
        self.transition(
            matches!(self, DeleteFlow::Idle | DeleteFlow::Failed),
            DeleteFlow::ConfirmPending,
        )
    }

    /// Confirmation dialog dismissed.
    pub fn cancel(&mut self) -> bool {
        self.transition(*self == DeleteFlow::ConfirmPending, DeleteFlow::Idle)
    }

    /// Confirmation given. After this the network call may fire.
    pub fn confirm(&mut self) -> bool {
        self.transition(*self == DeleteFlow::ConfirmPending, DeleteFlow::Deleting)
    }

    /// Network call settled.
    pub fn finish(&mut self, removed: bool) -> bool {
        let next = if removed {
            DeleteFlow::Removed
        } else {
            DeleteFlow::Failed
        };
        self.transition(*self == DeleteFlow::Deleting, next)
    }

    pub fn is_confirming(self) -> bool {
        self == DeleteFlow::ConfirmPending
    }

    pub fn is_deleting(self) -> bool {
        self == DeleteFlow::Deleting
    }

    fn transition(&mut self, allowed: bool, next: DeleteFlow) -> bool {
        if allowed {
            *self = next;
        }
        allowed
    }
}
