//! Auth API client

pub mod api;
pub mod http;
pub mod jwt;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::AuthApi;
pub use http::HttpAuthClient;
#[cfg(test)]
pub use mock::MockAuthClient;
