//! Application state

use adminer_cluster::{ClusterConnector, ClusterSession};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::error::ApiError;
use crate::extract::ClusterTarget;

/// Prometheus recorder handle used by the `/metrics` route
pub type MetricsHandle = PrometheusHandle;

/// Application state shared across handlers.
///
/// Holds only the session factory; nothing here changes between requests.
#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<dyn ClusterConnector>,
}

impl AppState {
    pub fn new(connector: Arc<dyn ClusterConnector>) -> Self {
        Self { connector }
    }

    /// Open a session authenticated as the request's principal
    pub async fn open_session(
        &self,
        target: &ClusterTarget,
    ) -> Result<Box<dyn ClusterSession>, ApiError> {
        self.connector
            .open_session(&target.endpoints, &target.credential)
            .await
            .map_err(ApiError::from_connect)
    }
}
