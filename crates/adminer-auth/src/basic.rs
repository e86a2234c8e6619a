//! HTTP Basic credentials
//!
//! The principal and secret supplied by the caller are forwarded verbatim to
//! the target cluster. They live for a single request and are never stored.

use axum::http::{HeaderMap, header::AUTHORIZATION};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::fmt;

use crate::error::AuthError;

const BASIC_PREFIX: &str = "Basic ";

/// Principal name and secret taken from an `Authorization: Basic` header
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Extract credentials from request headers
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AuthError> {
        let header = headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        parse_basic_auth(header)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Parse the value of an `Authorization` header using the Basic scheme.
///
/// The scheme name is matched case-insensitively and the user/password pair
/// is split at the first `:`, so passwords may themselves contain colons.
pub fn parse_basic_auth(header: &str) -> Result<Credential, AuthError> {
    if header.len() < BASIC_PREFIX.len()
        || !header.is_char_boundary(BASIC_PREFIX.len())
        || !header[..BASIC_PREFIX.len()].eq_ignore_ascii_case(BASIC_PREFIX)
    {
        return Err(AuthError::UnsupportedScheme);
    }

    let decoded = STANDARD
        .decode(&header[BASIC_PREFIX.len()..])
        .map_err(|_| AuthError::InvalidEncoding)?;
    let decoded = String::from_utf8(decoded).map_err(|_| AuthError::InvalidEncoding)?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or(AuthError::MissingSeparator)?;

    Ok(Credential::new(username, password))
}
