//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{Credentials, TokenResponse, User};
use crate::error::AuthResult;

/// Token lifecycle operations against the auth API.
///
/// Implementations always surface failures to the caller.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Log in and store the returned access token
    async fn login(&self, credentials: &Credentials) -> AuthResult<TokenResponse>;

    /// Fetch the user the stored token belongs to.
    ///
    /// Fails with `AuthError::NotLoggedIn` without a request when no token is
    /// stored. A 401/403 answer clears the stored token and still fails.
    async fn current_user(&self) -> AuthResult<User>;
}
