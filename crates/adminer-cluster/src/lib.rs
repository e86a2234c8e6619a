//! etcd-adminer cluster access
//!
//! This crate opens authenticated sessions against a caller-specified etcd
//! cluster and classifies the errors it reports.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod session;

pub use client::{EtcdConnector, EtcdConnectorConfig, EtcdSession};
pub use endpoints::{EmptyEndpoints, EndpointSet};
pub use error::ClusterError;
pub use session::{ClusterConnector, ClusterSession, UserRecord};
