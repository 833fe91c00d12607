//! # API crate: talking to the remote user service
//!
//! Everything the console needs to reach the user service and to turn its
//! answers into store mutations and user-facing notices. The crate is shared by
//! the `ui` components and is free of any UI dependency, so all of it can be
//! exercised from plain async tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL of the service, read from `USER_API_URL` (`.env` supported on native builds) |
//! | [`error`] | [`ApiError`]: validation, conflict, unexpected status, transport, decode and config failures |
//! | [`client`] | The [`UserService`] trait and its `reqwest` implementation [`HttpUserService`] |
//! | [`actions`] | Submit/commit pairs for create, edit, search and delete |
//! | [`notice`] | [`Notice`] values raised by actions for the toast list |

pub mod actions;
pub mod client;
pub mod config;
pub mod error;
pub mod notice;

pub use client::{HttpUserService, UserService};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use notice::{Notice, NoticeLevel};

pub use store::{UserRecord, UserStore};
