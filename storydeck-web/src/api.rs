use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::{
    ApiError, AuthResponse, ErrorBody, LoginRequest, NewStoryPayload, SignupRequest,
    StoriesResponse, StoryResponse, UserResponse,
};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<StorydeckClient> = OnceCell::new();
}

/// Lightweight API client for the Storydeck story and auth endpoints.
///
/// Holds the bearer token for the current session; install it after login or
/// when restoring a session from the local-storage mirror, clear it on
/// logout.
#[derive(Clone, Debug)]
pub struct StorydeckClient {
    base_url: String,
    client: Client,
    token: Arc<Mutex<Option<String>>>,
}

impl StorydeckClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// The process-wide client, configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Install or clear the bearer token used for authenticated requests.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = token;
        }
    }

    pub fn current_token(&self) -> Option<String> {
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_token() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(map_transport_error)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|_| ApiError::Unexpected(status.as_u16()))
        } else {
            Err(read_error(status, response).await)
        }
    }

    async fn expect_success(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(read_error(status, response).await)
        }
    }

    /// Authenticate with username/password credentials.
    ///
    /// # Errors
    /// [`ApiError::AuthenticationFailed`] on rejected credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/login");
        let response = self.send(self.client.post(url).json(payload)).await?;
        let body: AuthResponse = Self::decode(response).await?;
        self.set_token(Some(body.token.clone()));
        Ok(body)
    }

    /// Create an account and authenticate as it.
    ///
    /// # Errors
    /// [`ApiError::ValidationFailed`] when the server rejects the fields
    /// (for example a taken username).
    pub async fn signup(&self, payload: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/signup");
        let response = self.send(self.client.post(url).json(payload)).await?;
        let body: AuthResponse = Self::decode(response).await?;
        self.set_token(Some(body.token.clone()));
        Ok(body)
    }

    /// Fetch the profile for `username`, including favorites and own stories.
    /// Used with a mirrored token to restore a session after a reload.
    ///
    /// # Errors
    /// [`ApiError::AuthenticationFailed`] when the installed token is stale.
    pub async fn get_user(&self, username: &str) -> Result<UserResponse, ApiError> {
        let url = self.api_url(&format!("users/{username}"));
        let response = self.send(self.apply_auth(self.client.get(url))).await?;
        Self::decode(response).await
    }

    /// Fetch the full story list, in server order.
    ///
    /// # Errors
    /// Propagates transport and server failures as [`ApiError`].
    pub async fn get_stories(&self) -> Result<StoriesResponse, ApiError> {
        let url = self.api_url("stories");
        let response = self.send(self.apply_auth(self.client.get(url))).await?;
        Self::decode(response).await
    }

    /// Submit a new story.
    ///
    /// # Errors
    /// Propagates transport and server failures as [`ApiError`].
    pub async fn add_story(&self, payload: &NewStoryPayload) -> Result<StoryResponse, ApiError> {
        let url = self.api_url("stories");
        let response = self
            .send(self.apply_auth(self.client.post(url)).json(payload))
            .await?;
        Self::decode(response).await
    }

    /// Delete one of the current user's stories.
    ///
    /// # Errors
    /// [`ApiError::NotFound`] when the story was already removed.
    pub async fn delete_story(&self, story_id: Uuid) -> Result<(), ApiError> {
        let url = self.api_url(&format!("stories/{story_id}"));
        let response = self.send(self.apply_auth(self.client.delete(url))).await?;
        Self::expect_success(response).await
    }

    /// Star a story for `username`.
    ///
    /// # Errors
    /// Propagates transport and server failures as [`ApiError`].
    pub async fn add_favorite(&self, username: &str, story_id: Uuid) -> Result<(), ApiError> {
        let url = self.api_url(&format!("users/{username}/favorites/{story_id}"));
        let response = self.send(self.apply_auth(self.client.post(url))).await?;
        Self::expect_success(response).await
    }

    /// Unstar a story for `username`.
    ///
    /// # Errors
    /// Propagates transport and server failures as [`ApiError`].
    pub async fn remove_favorite(&self, username: &str, story_id: Uuid) -> Result<(), ApiError> {
        let url = self.api_url(&format!("users/{username}/favorites/{story_id}"));
        let response = self.send(self.apply_auth(self.client.delete(url))).await?;
        Self::expect_success(response).await
    }
}

async fn read_error(status: StatusCode, response: Response) -> ApiError {
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.error);
    error_for_status(status, detail)
}

/// Map an HTTP status (plus an optional server-provided detail) to the
/// failure taxonomy the pages render.
pub(crate) fn error_for_status(status: StatusCode, detail: Option<String>) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::AuthenticationFailed,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ApiError::ValidationFailed(detail.unwrap_or_else(|| "malformed request".to_string()))
        }
        other => ApiError::Unexpected(other.as_u16()),
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    err.status()
        .map_or(ApiError::NetworkUnavailable, |status| {
            error_for_status(status, None)
        })
}
