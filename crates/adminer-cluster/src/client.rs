//! etcd-backed cluster client

use adminer_auth::Credential;
use async_trait::async_trait;
use etcd_client::{Client, ConnectOptions};
use std::time::Duration;
use tracing::debug;

use crate::endpoints::EndpointSet;
use crate::error::ClusterError;
use crate::session::{ClusterConnector, ClusterSession, UserRecord};

/// etcd connector configuration
#[derive(Clone, Debug, Default)]
pub struct EtcdConnectorConfig {
    /// Dial timeout per connection attempt
    pub connect_timeout: Option<Duration>,
    /// Timeout applied to each RPC, including authentication
    pub request_timeout: Option<Duration>,
}

/// Opens a fresh authenticated etcd client for every call
#[derive(Clone, Debug, Default)]
pub struct EtcdConnector {
    config: EtcdConnectorConfig,
}

impl EtcdConnector {
    pub fn new(config: EtcdConnectorConfig) -> Self {
        Self { config }
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new();

        if let Some(timeout) = self.config.connect_timeout {
            options = options.with_connect_timeout(timeout);
        }
        if let Some(timeout) = self.config.request_timeout {
            options = options.with_timeout(timeout);
        }

        options
    }
}

#[async_trait]
impl ClusterConnector for EtcdConnector {
    async fn connect(
        &self,
        endpoints: &EndpointSet,
        credential: &Credential,
    ) -> Result<Box<dyn ClusterSession>, ClusterError> {
        debug!("Connecting to etcd at {:?}", endpoints.as_slice());

        let options = self
            .connect_options()
            .with_user(credential.username(), credential.password());

        // Client::connect authenticates before returning when a user is set
        let client = Client::connect(endpoints.as_slice(), Some(options))
            .await
            .map_err(ClusterError::classify)?;

        Ok(Box::new(EtcdSession { client }))
    }

    async fn connect_unauthenticated(
        &self,
        endpoints: &EndpointSet,
    ) -> Result<Box<dyn ClusterSession>, ClusterError> {
        debug!("Connecting to etcd at {:?} without credentials", endpoints.as_slice());

        let client = Client::connect(endpoints.as_slice(), Some(self.connect_options()))
            .await
            .map_err(ClusterError::classify)?;

        Ok(Box::new(EtcdSession { client }))
    }
}

/// Authenticated etcd client scoped to one request
pub struct EtcdSession {
    client: Client,
}

#[async_trait]
impl ClusterSession for EtcdSession {
    async fn user_list(&mut self) -> Result<Vec<String>, ClusterError> {
        let response = self.client.user_list().await?;
        Ok(response.users().to_vec())
    }

    async fn user_get(&mut self, name: &str) -> Result<UserRecord, ClusterError> {
        let response = self.client.user_get(name).await?;
        Ok(UserRecord {
            name: name.to_string(),
            roles: response.roles().to_vec(),
        })
    }

    async fn user_grant_role(&mut self, name: &str, role: &str) -> Result<(), ClusterError> {
        self.client.user_grant_role(name, role).await?;
        Ok(())
    }

    async fn user_revoke_role(&mut self, name: &str, role: &str) -> Result<(), ClusterError> {
        self.client.user_revoke_role(name, role).await?;
        Ok(())
    }
}

impl Drop for EtcdSession {
    fn drop(&mut self) {
        debug!("Releasing etcd session");
    }
}
