//! Cluster connector and session traits

use adminer_auth::Credential;
use async_trait::async_trait;
use tracing::debug;

use crate::endpoints::EndpointSet;
use crate::error::ClusterError;

/// A user and the roles assigned to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub roles: Vec<String>,
}

/// Factory for authenticated sessions.
///
/// `connect` authenticates eagerly: a returned session has already been
/// accepted by the cluster. A single attempt is made per call.
#[async_trait]
pub trait ClusterConnector: Send + Sync {
    async fn connect(
        &self,
        endpoints: &EndpointSet,
        credential: &Credential,
    ) -> Result<Box<dyn ClusterSession>, ClusterError>;

    /// Open a session that sends no credentials
    async fn connect_unauthenticated(
        &self,
        endpoints: &EndpointSet,
    ) -> Result<Box<dyn ClusterSession>, ClusterError>;

    /// Open a session for a request.
    ///
    /// A cluster with authentication disabled rejects the authenticate call;
    /// in that case the session is reopened without credentials.
    async fn open_session(
        &self,
        endpoints: &EndpointSet,
        credential: &Credential,
    ) -> Result<Box<dyn ClusterSession>, ClusterError> {
        match self.connect(endpoints, credential).await {
            Err(ClusterError::AuthNotEnabled) => {
                debug!("Authentication is not enabled, connecting without credentials");
                self.connect_unauthenticated(endpoints).await
            }
            other => other,
        }
    }
}

/// A connection authenticated as one principal.
///
/// Sessions are owned by a single request and released on drop.
#[async_trait]
pub trait ClusterSession: Send {
    /// List all user names, in the order the cluster returns them
    async fn user_list(&mut self) -> Result<Vec<String>, ClusterError>;

    /// Fetch a user and its roles
    async fn user_get(&mut self, name: &str) -> Result<UserRecord, ClusterError>;

    /// Grant a role to a user
    async fn user_grant_role(&mut self, name: &str, role: &str) -> Result<(), ClusterError>;

    /// Revoke a role from a user
    async fn user_revoke_role(&mut self, name: &str, role: &str) -> Result<(), ClusterError>;
}
