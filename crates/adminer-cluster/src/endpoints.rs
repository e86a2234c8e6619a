//! Cluster endpoint sets

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Endpoint list is empty")]
pub struct EmptyEndpoints;

/// Ordered, non-empty list of cluster member addresses.
///
/// Addresses are not checked for syntax here; a malformed address surfaces
/// as a dial failure from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSet(Vec<String>);

impl EndpointSet {
    /// Parse a comma-separated list such as `10.0.0.1:2379,10.0.0.2:2379`.
    ///
    /// Surrounding whitespace is trimmed from each entry and empty entries
    /// are skipped. Order is preserved and duplicates are kept.
    pub fn parse(raw: &str) -> Result<Self, EmptyEndpoints> {
        if raw.is_empty() {
            return Err(EmptyEndpoints);
        }

        let endpoints: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(String::from)
            .collect();

        if endpoints.is_empty() {
            return Err(EmptyEndpoints);
        }

        Ok(Self(endpoints))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
