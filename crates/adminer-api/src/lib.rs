//! etcd-adminer REST API
//!
//! This crate provides the Axum-based HTTP API that translates user and
//! role management requests into calls against a caller-specified etcd
//! cluster.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;

pub use error::ApiError;
pub use extract::{ClusterTarget, ENDPOINTS_HEADER};
pub use routes::{cors_layer, create_router};
pub use state::{AppState, MetricsHandle};
