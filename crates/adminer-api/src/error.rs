//! API error types

use adminer_auth::AuthError;
use adminer_cluster::ClusterError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    /// No usable Basic credentials on the request
    #[error("Unauthenticated: {0}")]
    Unauthenticated(#[from] AuthError),

    /// A required header or path parameter is absent or empty
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    /// The cluster rejected the supplied principal or secret
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// The principal may not modify this user or role
    #[error("Permission denied: {0}")]
    PermissionDenied(ClusterError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Classify a failure to open an authenticated session
    pub fn from_connect(err: ClusterError) -> Self {
        match err {
            ClusterError::AuthenticationFailed => ApiError::AuthenticationFailed,
            other => ApiError::Internal(other.to_string()),
        }
    }

    /// Classify a failure of a read operation (list or get)
    pub fn from_query(err: ClusterError) -> Self {
        ApiError::Internal(err.to_string())
    }

    /// Classify a failure of a role grant or revoke
    pub fn from_mutation(err: ClusterError) -> Self {
        if err.is_permission_error() {
            ApiError::PermissionDenied(err)
        } else {
            ApiError::Internal(err.to_string())
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated(_) => StatusCode::FORBIDDEN,
            ApiError::MissingInput(_) => StatusCode::NOT_ACCEPTABLE,
            ApiError::AuthenticationFailed => StatusCode::FORBIDDEN,
            ApiError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Unauthenticated(_) | ApiError::MissingInput(_) => {
                debug!("Rejected request: {}", self)
            }
            ApiError::AuthenticationFailed | ApiError::PermissionDenied(_) => {
                warn!("Cluster refused request: {}", self)
            }
            ApiError::Internal(_) => error!("Request failed: {}", self),
        }

        // Failures carry a status code only
        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_errors() {
        assert_eq!(
            ApiError::from_connect(ClusterError::AuthenticationFailed).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from_connect(ClusterError::Unavailable("refused".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        // Permission errors are only meaningful once a session exists
        assert_eq!(
            ApiError::from_connect(ClusterError::PermissionDenied).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_query_errors_are_internal() {
        for err in [
            ClusterError::PermissionDenied,
            ClusterError::PermissionNotGranted,
            ClusterError::Other("user name not found".into()),
        ] {
            assert_eq!(
                ApiError::from_query(err).status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_mutation_errors() {
        assert_eq!(
            ApiError::from_mutation(ClusterError::PermissionDenied).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from_mutation(ClusterError::PermissionNotGranted).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from_mutation(ClusterError::Unavailable("reset".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_input_errors() {
        assert_eq!(
            ApiError::from(AuthError::MissingAuthHeader).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::MissingInput("X-Endpoints").status(),
            StatusCode::NOT_ACCEPTABLE
        );
    }
}
