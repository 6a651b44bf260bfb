//! Read-only peek at JWT claims
//!
//! Only used to show the user when a stored token expires. The signature is
//! not checked and the result never gates a request.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
struct Claims {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Claims of interest from a JWT payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Decode the payload of `token` if it looks like a JWT
pub fn peek_claims(token: &str) -> Option<TokenClaims> {
    let mut parts = token.split('.');
    let (_header, payload, _signature) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    // Some encoders keep the padding
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;

    Some(TokenClaims {
        subject: claims.sub,
        expires_at: claims.exp.and_then(|exp| DateTime::from_timestamp(exp, 0)),
    })
}
