//! # HTTP client for the remote user service
//!
//! [`UserService`] is the seam between the console and the service. The web
//! console uses [`HttpUserService`], a thin `reqwest` wrapper; tests substitute
//! their own implementation.
//!
//! | Method | Request | Accepted status |
//! |--------|---------|-----------------|
//! | [`search`](UserService::search) | `GET /user/search?<query>` | any 2xx, body is a JSON array of users |
//! | [`create`](UserService::create) | `POST /user/insert` | `201 Created` only; `409` becomes [`ApiError::Conflict`] |
//! | [`update`](UserService::update) | `PATCH /user/:username` | any 2xx |
//! | [`delete`](UserService::delete) | `DELETE /user/:username` | any 2xx |
//!
//! Usernames are percent-encoded as a single path segment. Every other status is
//! returned as [`ApiError::Status`] carrying the response body.

use reqwest::{Response, StatusCode};
use store::{query, NewUser, SearchFilter, UserPatch, UserRecord};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Async interface to the user service.
pub trait UserService {
    fn search(
        &self,
        filter: &SearchFilter,
    ) -> impl std::future::Future<Output = ApiResult<Vec<UserRecord>>>;
    fn create(&self, user: &NewUser) -> impl std::future::Future<Output = ApiResult<()>>;
    fn update(
        &self,
        username: &str,
        patch: &UserPatch,
    ) -> impl std::future::Future<Output = ApiResult<()>>;
    fn delete(&self, username: &str) -> impl std::future::Future<Output = ApiResult<()>>;
}

/// `reqwest`-backed [`UserService`].
#[derive(Clone, Debug)]
pub struct HttpUserService {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpUserService {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn search_url(&self, filter: &SearchFilter) -> String {
        let endpoint = self.config.endpoint("/user/search");
        let query = query::compose(filter);
        if query.is_empty() {
            endpoint
        } else {
            format!("{endpoint}?{query}")
        }
    }

    fn user_url(&self, username: &str) -> ApiResult<Url> {
        let mut url = Url::parse(&self.config.endpoint("/user"))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("{} cannot be a base URL", self.config.base_url())))?
            .push(username);
        Ok(url)
    }
}

/// Pass `response` through when `accept` holds, otherwise turn it into an error.
async fn check_status(
    response: Response,
    accept: impl Fn(StatusCode) -> bool,
) -> ApiResult<Response> {
    let status = response.status();
    if accept(status) {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

impl UserService for HttpUserService {
    async fn search(&self, filter: &SearchFilter) -> ApiResult<Vec<UserRecord>> {
        let url = self.search_url(filter);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = check_status(response, |s| s.is_success()).await?;
        let users = response.json::<Vec<UserRecord>>().await?;
        tracing::debug!("Search returned {} users", users.len());
        Ok(users)
    }

    async fn create(&self, user: &NewUser) -> ApiResult<()> {
        let url = self.config.endpoint("/user/insert");
        tracing::debug!("POST {} for {}", url, user.username);

        let response = self.client.post(&url).json(user).send().await?;
        if response.status() == StatusCode::CONFLICT {
            return Err(ApiError::Conflict {
                username: user.username.clone(),
            });
        }
        check_status(response, |s| s == StatusCode::CREATED).await?;
        Ok(())
    }

    async fn update(&self, username: &str, patch: &UserPatch) -> ApiResult<()> {
        let url = self.user_url(username)?;
        tracing::debug!("PATCH {}", url);

        let response = self.client.patch(url).json(patch).send().await?;
        check_status(response, |s| s.is_success()).await?;
        Ok(())
    }

    async fn delete(&self, username: &str) -> ApiResult<()> {
        let url = self.user_url(username)?;
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(url).send().await?;
        check_status(response, |s| s.is_success()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use store::{ActiveState, ProjectTag};

    fn service_for(server: &MockServer) -> HttpUserService {
        HttpUserService::new(ApiConfig::new(server.base_url()).unwrap())
    }

    #[tokio::test]
    async fn test_search_sends_composed_query_and_decodes_users() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/user/search")
                    .query_param("displayName", "bob")
                    .query_param("activeYn", "Y");
                then.status(200).json_body(json!([
                    {
                        "id": 1,
                        "username": "bob",
                        "fullName": "Bob",
                        "role": "dev",
                        "projects": [{"id": 0, "name": "core"}],
                        "activeYn": "Y"
                    }
                ]));
            })
            .await;

        let filter = SearchFilter {
            display_name: "bob".to_string(),
            active_state: ActiveState::Active,
            ..Default::default()
        };
        let users = service_for(&server).search(&filter).await.unwrap();

        mock.assert_async().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "bob");
        assert_eq!(users[0].projects, vec![ProjectTag::new(0, "core")]);
    }

    #[tokio::test]
    async fn test_search_error_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user/search");
                then.status(500).body("boom");
            })
            .await;

        let err = service_for(&server)
            .search(&SearchFilter::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                body: "boom".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_search_bad_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user/search");
                then.status(200).body("not json");
            })
            .await;

        let err = service_for(&server)
            .search(&SearchFilter::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_create_posts_body_and_expects_201() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/user/insert").json_body(json!({
                    "username": "alice",
                    "displayName": "Alice",
                    "role": "admin",
                    "projects": ["x", "y"],
                    "activeYn": "Y"
                }));
                then.status(201);
            })
            .await;

        let body = NewUser {
            username: "alice".to_string(),
            display_name: "Alice".to_string(),
            role: "admin".to_string(),
            projects: Some(vec!["x".to_string(), "y".to_string()]),
            active: true,
        };
        service_for(&server).create(&body).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_rejects_plain_200() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/user/insert");
                then.status(200);
            })
            .await;

        let body = NewUser {
            username: "alice".to_string(),
            display_name: String::new(),
            role: String::new(),
            projects: None,
            active: true,
        };
        let err = service_for(&server).create(&body).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 200, .. }));
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/user/insert");
                then.status(409);
            })
            .await;

        let body = NewUser {
            username: "alice".to_string(),
            display_name: String::new(),
            role: String::new(),
            projects: None,
            active: true,
        };
        let err = service_for(&server).create(&body).await.unwrap_err();
        assert!(matches!(err, ApiError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_patches_by_username() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/user/bob")
                    .json_body(json!({"role": "lead"}));
                then.status(200);
            })
            .await;

        let patch = UserPatch {
            role: Some("lead".to_string()),
            ..Default::default()
        };
        service_for(&server).update("bob", &patch).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_by_username() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/user/bob");
                then.status(200);
            })
            .await;

        service_for(&server).delete("bob").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/user/ghost");
                then.status(404);
            })
            .await;

        let err = service_for(&server).delete("ghost").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[test]
    fn test_user_url_encodes_username_segment() {
        let service = HttpUserService::new(ApiConfig::new("http://svc/api").unwrap());
        let url = service.user_url("a b/c").unwrap();
        assert_eq!(url.as_str(), "http://svc/api/user/a%20b%2Fc");
    }

    #[test]
    fn test_search_url_without_filters_has_no_query() {
        let service = HttpUserService::new(ApiConfig::new("http://svc").unwrap());
        assert_eq!(
            service.search_url(&SearchFilter::default()),
            "http://svc/user/search"
        );
    }
}
