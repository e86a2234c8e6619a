//! In-memory cluster used by handler tests

use adminer_auth::Credential;
use adminer_cluster::{ClusterConnector, ClusterError, ClusterSession, EndpointSet, UserRecord};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::state::AppState;

/// Scripted cluster behaviour plus a log of everything the handlers asked for
#[derive(Default)]
pub struct FakeCluster {
    pub auth_error: Option<ClusterError>,
    pub op_error: Option<ClusterError>,
    pub users: Vec<String>,
    pub roles: Vec<String>,
    pub(crate) calls: Mutex<Vec<String>>,
    pub(crate) live_sessions: AtomicUsize,
}

impl FakeCluster {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn live_sessions(&self) -> usize {
        self.live_sessions.load(Ordering::SeqCst)
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn op_result(&self) -> Result<(), ClusterError> {
        match &self.op_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    pub fn into_state(self) -> (Arc<FakeCluster>, AppState) {
        let cluster = Arc::new(self);
        let state = AppState::new(Arc::new(FakeConnector(cluster.clone())));
        (cluster, state)
    }
}

struct FakeConnector(Arc<FakeCluster>);

#[async_trait]
impl ClusterConnector for FakeConnector {
    async fn connect(
        &self,
        endpoints: &EndpointSet,
        credential: &Credential,
    ) -> Result<Box<dyn ClusterSession>, ClusterError> {
        self.0.record(format!(
            "connect {} {}",
            credential.username(),
            endpoints.as_slice().join(",")
        ));

        if let Some(err) = &self.0.auth_error {
            return Err(err.clone());
        }

        self.0.live_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeSession(self.0.clone())))
    }

    async fn connect_unauthenticated(
        &self,
        endpoints: &EndpointSet,
    ) -> Result<Box<dyn ClusterSession>, ClusterError> {
        self.0.record(format!(
            "connect_unauthenticated {}",
            endpoints.as_slice().join(",")
        ));

        self.0.live_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeSession(self.0.clone())))
    }
}

struct FakeSession(Arc<FakeCluster>);

#[async_trait]
impl ClusterSession for FakeSession {
    async fn user_list(&mut self) -> Result<Vec<String>, ClusterError> {
        self.0.record("user_list".to_string());
        self.0.op_result()?;
        Ok(self.0.users.clone())
    }

    async fn user_get(&mut self, name: &str) -> Result<UserRecord, ClusterError> {
        self.0.record(format!("user_get {}", name));
        self.0.op_result()?;
        Ok(UserRecord {
            name: name.to_string(),
            roles: self.0.roles.clone(),
        })
    }

    async fn user_grant_role(&mut self, name: &str, role: &str) -> Result<(), ClusterError> {
        self.0.record(format!("user_grant_role {} {}", name, role));
        self.0.op_result()
    }

    async fn user_revoke_role(&mut self, name: &str, role: &str) -> Result<(), ClusterError> {
        self.0.record(format!("user_revoke_role {} {}", name, role));
        self.0.op_result()
    }
}

impl Drop for FakeSession {
    fn drop(&mut self) {
        self.0.live_sessions.fetch_sub(1, Ordering::SeqCst);
    }
}
