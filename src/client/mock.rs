//! Mock auth API client for testing
//!
//! Provides a mock implementation of [`AuthApi`] for unit testing callers
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::AuthApi;
use super::models::{Credentials, TokenResponse, User};
use crate::error::{AuthError, AuthResult};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockAuthClient::new().with_user(User { id: 1, username: "alice".into(), avatar: None });
///
/// let user = mock.current_user().await?;
/// assert_eq!(user.id, 1);
/// ```
#[derive(Default)]
pub struct MockAuthClient {
    /// Token to return from login
    token: Arc<Mutex<Option<TokenResponse>>>,
    /// User to return from current_user
    user: Arc<Mutex<Option<User>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<AuthError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub current_user: usize,
}

impl MockAuthClient {
    /// Create a new mock client with no canned responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token returned by `login`
    pub fn with_token(self, token: TokenResponse) -> Self {
        *self.token.try_lock().expect("mock not shared yet") = Some(token);
        self
    }

    /// Set the user returned by `current_user`
    pub fn with_user(self, user: User) -> Self {
        *self.user.try_lock().expect("mock not shared yet") = Some(user);
        self
    }

    /// Fail the next call with `error`
    pub fn with_error(self, error: AuthError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    /// Snapshot of the call counts
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    async fn take_error(&self) -> Option<AuthError> {
        self.error.lock().await.take()
    }
}

#[async_trait]
impl AuthApi for MockAuthClient {
    async fn login(&self, _credentials: &Credentials) -> AuthResult<TokenResponse> {
        self.call_count.lock().await.login += 1;
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        self.token
            .lock()
            .await
            .clone()
            .ok_or_else(|| AuthError::InvalidResponse("no token configured".to_string()))
    }

    async fn current_user(&self) -> AuthResult<User> {
        self.call_count.lock().await.current_user += 1;
        if let Some(err) = self.take_error().await {
            return Err(err);
        }
        self.user.lock().await.clone().ok_or(AuthError::NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_user_and_counts() {
        let mock = MockAuthClient::new().with_user(User {
            id: 1,
            username: "alice".to_string(),
            avatar: None,
        });

        let user = mock.current_user().await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(mock.call_counts().await.current_user, 1);
        assert_eq!(mock.call_counts().await.login, 0);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockAuthClient::new()
            .with_token(TokenResponse {
                access_token: "tok1".to_string(),
                token_type: "bearer".to_string(),
            })
            .with_error(AuthError::Network("down".to_string()));

        let creds = Credentials::new("a", "b");
        assert!(mock.login(&creds).await.is_err());
        assert_eq!(mock.login(&creds).await.unwrap().access_token, "tok1");
        assert_eq!(mock.call_counts().await.login, 2);
    }

    #[tokio::test]
    async fn test_mock_without_user_is_not_logged_in() {
        let mock = MockAuthClient::new();
        assert!(matches!(
            mock.current_user().await,
            Err(AuthError::NotLoggedIn)
        ));
    }
}
