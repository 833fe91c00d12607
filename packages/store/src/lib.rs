pub mod draft;
pub mod models;
pub mod projects;
pub mod query;
pub mod sequence;
pub mod table;

mod user_store;
pub use user_store::UserStore;

pub use draft::{CreateDraft, EditDraft, SearchDraft, ValidationError};
pub use models::{ActiveState, NewUser, ProjectTag, SearchFilter, UserPatch, UserRecord};
pub use projects::ProjectList;
pub use sequence::{RequestSequencer, SearchTicket};
pub use table::{DeleteFlow, SortColumn, SortDirection, SortState};
