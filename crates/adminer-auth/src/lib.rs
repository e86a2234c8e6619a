//! etcd-adminer request authentication
//!
//! This crate extracts the per-request Basic credentials that are passed
//! through to the target etcd cluster. Nothing here verifies them locally.

pub mod basic;
pub mod error;

pub use basic::{Credential, parse_basic_auth};
pub use error::AuthError;
