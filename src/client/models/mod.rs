//! Auth API data models

mod auth;
mod error;
mod user;

pub use auth::{Credentials, TokenResponse};
pub use error::failure_message;
pub use user::User;
