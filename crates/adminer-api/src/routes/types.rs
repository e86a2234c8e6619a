//! Response DTOs for the user API

use adminer_cluster::UserRecord;
use serde::Serialize;

/// User with its assigned roles
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub name: String,
    pub roles: Vec<String>,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            name: record.name,
            roles: record.roles,
        }
    }
}
