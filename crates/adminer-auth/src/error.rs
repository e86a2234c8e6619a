//! Authentication error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing authorization header")]
    MissingAuthHeader,

    #[error("Invalid authorization header format")]
    InvalidAuthHeader,

    #[error("Authorization scheme is not Basic")]
    UnsupportedScheme,

    #[error("Credentials are not valid base64")]
    InvalidEncoding,

    #[error("Credentials are missing the ':' separator")]
    MissingSeparator,
}
