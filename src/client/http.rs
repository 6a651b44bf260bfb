//! reqwest implementation of the auth API

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response, StatusCode};

use super::api::AuthApi;
use super::models::{Credentials, TokenResponse, User, failure_message};
use crate::error::{AuthError, AuthResult, Result};
use crate::storage::TokenStore;

const LOGIN_PATH: &str = "/api/auth/login";
const CURRENT_USER_PATH: &str = "/api/users/me";

const LOGIN_FAILED: &str = "login failed";
const FETCH_USER_FAILED: &str = "failed to fetch user";

/// Auth API client backed by reqwest.
///
/// One HTTP call per operation: no retries and no client-side timeout.
pub struct HttpAuthClient {
    http: HttpClient,
    base_url: String,
    tokens: TokenStore,
}

impl HttpAuthClient {
    /// Create a client for `base_url` that reads and writes `tokens`
    pub fn new(base_url: &str, tokens: TokenStore) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("tokenauth/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AuthError::from)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// The token store this client writes to
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into `RequestFailed`
    async fn failure(response: Response, fallback: &str) -> AuthError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AuthError::RequestFailed {
            status,
            message: failure_message(&body, fallback),
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthClient {
    async fn login(&self, credentials: &Credentials) -> AuthResult<TokenResponse> {
        let url = self.url(LOGIN_PATH);
        log::debug!("POST {} as {}", url, credentials.username);

        let response = self.http.post(&url).json(credentials).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("Login rejected: {}", status);
            return Err(Self::failure(response, LOGIN_FAILED).await);
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            AuthError::InvalidResponse(format!("Failed to parse login response: {}", e))
        })?;
        if token.access_token.is_empty() {
            return Err(AuthError::InvalidResponse(
                "Login response carried an empty access token".to_string(),
            ));
        }

        self.tokens.set(&token.access_token);
        log::debug!("Stored {} token", token.token_type);

        Ok(token)
    }

    async fn current_user(&self) -> AuthResult<User> {
        let token = self.tokens.get().ok_or(AuthError::NotLoggedIn)?;

        let url = self.url(CURRENT_USER_PATH);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                log::debug!("Token rejected ({}), clearing it", status);
                self.tokens.clear();
            }
            return Err(Self::failure(response, FETCH_USER_FAILED).await);
        }

        response.json::<User>().await.map_err(|e| {
            AuthError::InvalidResponse(format!("Failed to parse user response: {}", e))
        })
    }
}
