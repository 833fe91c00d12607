//! User service configuration from environment variables.

use url::Url;

use crate::error::{ApiError, ApiResult};

/// Environment variable holding the user service base URL.
pub const BASE_URL_VAR: &str = "USER_API_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Where the user service lives.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate `base_url` and strip any trailing slash.
    pub fn new(base_url: impl AsRef<str>) -> ApiResult<Self> {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::Config(format!("{trimmed} cannot be a base URL")));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Read the base URL from `USER_API_URL`, loading `.env` first.
    ///
    /// Falls back to [`DEFAULT_BASE_URL`] when the variable is not set.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> ApiResult<Self> {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Browsers have no process environment, so the URL is baked in at build time.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> ApiResult<Self> {
        Self::new(option_env!("USER_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`, which must start with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
