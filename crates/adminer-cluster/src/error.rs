//! Cluster error types

use thiserror::Error;

/// etcd gRPC status messages, without the `etcdserver: ` prefix
const AUTH_FAILED: &str = "authentication failed, invalid user ID or password";
const PERMISSION_DENIED: &str = "permission denied";
const PERMISSION_NOT_GRANTED: &str = "permission is not granted to the role";
const AUTH_NOT_ENABLED: &str = "authentication is not enabled";

/// Closed set of failure categories reported by the cluster client
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("Authentication failed, invalid user ID or password")]
    AuthenticationFailed,

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Permission is not granted to the role")]
    PermissionNotGranted,

    /// The cluster accepts requests without credentials
    #[error("Authentication is not enabled")]
    AuthNotEnabled,

    #[error("Cluster unavailable: {0}")]
    Unavailable(String),

    #[error("Cluster error: {0}")]
    Other(String),
}

impl ClusterError {
    /// Whether the caller lacks authority for the attempted mutation
    pub fn is_permission_error(&self) -> bool {
        matches!(
            self,
            ClusterError::PermissionDenied | ClusterError::PermissionNotGranted
        )
    }

    /// Map a remote status message onto a category
    pub fn from_status_message(message: &str) -> Self {
        let message = message.strip_prefix("etcdserver: ").unwrap_or(message);
        match message {
            AUTH_FAILED => ClusterError::AuthenticationFailed,
            PERMISSION_DENIED => ClusterError::PermissionDenied,
            PERMISSION_NOT_GRANTED => ClusterError::PermissionNotGranted,
            AUTH_NOT_ENABLED => ClusterError::AuthNotEnabled,
            other => ClusterError::Other(other.to_string()),
        }
    }

    /// Classify an `etcd-client` error
    pub fn classify(err: etcd_client::Error) -> Self {
        match err {
            etcd_client::Error::GRpcStatus(status) => Self::from_status_message(status.message()),
            etcd_client::Error::TransportError(e) => ClusterError::Unavailable(e.to_string()),
            other => ClusterError::Other(other.to_string()),
        }
    }
}

impl From<etcd_client::Error> for ClusterError {
    fn from(err: etcd_client::Error) -> Self {
        Self::classify(err)
    }
}
