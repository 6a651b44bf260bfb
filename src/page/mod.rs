//! Page data loader
//!
//! The one place auth failures are swallowed: a page must always get
//! something it can render, so any error becomes an absent user.

use serde::Serialize;

use crate::client::AuthApi;
use crate::client::models::User;

/// Data handed to the page before it renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageData {
    pub user: Option<User>,
}

/// Load the current user for a page render. Never fails.
pub async fn load_page_data<A: AuthApi + ?Sized>(api: &A) -> PageData {
    match api.current_user().await {
        Ok(user) => PageData { user: Some(user) },
        Err(_) => PageData { user: None },
    }
}
