//! Shared user-service constructor for all platforms.
//!
//! Builds an [`api::HttpUserService`] from [`api::ApiConfig::from_env`]:
//! - **Web** (WASM): `USER_API_URL` baked in at build time
//! - **Native**: `USER_API_URL` from the process environment or `.env`

use api::{ApiConfig, HttpUserService};

/// Create the service the console talks to.
///
/// A malformed `USER_API_URL` is logged and replaced by the default local URL
/// so the console still renders and reports failures through its notices.
pub fn make_service() -> HttpUserService {
    let config = ApiConfig::from_env().unwrap_or_else(|e| {
        tracing::error!("Invalid user service configuration: {}", e);
        ApiConfig::default()
    });
    tracing::info!("User service at {}", config.base_url());
    HttpUserService::new(config)
}
