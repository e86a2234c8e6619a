//! Request extractors
//!
//! Each extractor is a pure existence gate. Handlers list them in the order
//! the checks must run: credentials, then endpoints, then path parameters.
//! A rejection from any of them ends the request before the cluster is
//! contacted.

use adminer_auth::Credential;
use adminer_cluster::EndpointSet;
use axum::{
    extract::{FromRequestParts, RawPathParams},
    http::{HeaderMap, request::Parts},
};

use crate::error::ApiError;

/// Header carrying the comma-separated list of cluster endpoints
pub const ENDPOINTS_HEADER: &str = "x-endpoints";

/// Credentials and endpoints identifying the cluster to act on
#[derive(Debug)]
pub struct ClusterTarget {
    pub credential: Credential,
    pub endpoints: EndpointSet,
}

impl ClusterTarget {
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, ApiError> {
        let credential = Credential::from_headers(headers)?;

        let raw = headers
            .get(ENDPOINTS_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default();
        let endpoints =
            EndpointSet::parse(raw).map_err(|_| ApiError::MissingInput(ENDPOINTS_HEADER))?;

        Ok(Self {
            credential,
            endpoints,
        })
    }
}

impl<S> FromRequestParts<S> for ClusterTarget
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers)
    }
}

/// `{name}` path parameter
#[derive(Debug)]
pub struct UserPath {
    pub name: String,
}

impl<S> FromRequestParts<S> for UserPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingInput("name"))?;

        Ok(Self {
            name: required_param(&params, "name")?,
        })
    }
}

/// `{name}` and `{role}` path parameters
#[derive(Debug)]
pub struct UserRolePath {
    pub name: String,
    pub role: String,
}

impl<S> FromRequestParts<S> for UserRolePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingInput("name"))?;

        Ok(Self {
            name: required_param(&params, "name")?,
            role: required_param(&params, "role")?,
        })
    }
}

fn required_param(params: &RawPathParams, key: &'static str) -> Result<String, ApiError> {
    lookup_param(params.iter(), key)
}

fn lookup_param<'a>(
    mut params: impl Iterator<Item = (&'a str, &'a str)>,
    key: &'static str,
) -> Result<String, ApiError> {
    params
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .ok_or(ApiError::MissingInput(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminer_auth::AuthError;
    use axum::http::{HeaderValue, header::AUTHORIZATION};

    fn headers(auth: Option<&str>, endpoints: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(auth) = auth {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(auth).unwrap());
        }
        if let Some(endpoints) = endpoints {
            headers.insert(ENDPOINTS_HEADER, HeaderValue::from_str(endpoints).unwrap());
        }
        headers
    }

    // "root:secret"
    const ROOT_AUTH: &str = "Basic cm9vdDpzZWNyZXQ=";

    #[test]
    fn test_valid_target() {
        let target =
            ClusterTarget::from_headers(&headers(Some(ROOT_AUTH), Some("a:2379,b:2379"))).unwrap();
        assert_eq!(target.credential.username(), "root");
        assert_eq!(target.endpoints.as_slice(), ["a:2379", "b:2379"]);
    }

    #[test]
    fn test_credentials_checked_before_endpoints() {
        let err = ClusterTarget::from_headers(&headers(None, None)).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Unauthenticated(AuthError::MissingAuthHeader)
        ));
    }

    #[test]
    fn test_missing_endpoints() {
        let err = ClusterTarget::from_headers(&headers(Some(ROOT_AUTH), None)).unwrap_err();
        assert!(matches!(err, ApiError::MissingInput(ENDPOINTS_HEADER)));
    }

    #[test]
    fn test_empty_endpoints() {
        let err = ClusterTarget::from_headers(&headers(Some(ROOT_AUTH), Some(""))).unwrap_err();
        assert!(matches!(err, ApiError::MissingInput(ENDPOINTS_HEADER)));
    }

    #[test]
    fn test_lookup_param() {
        let params = [("name", "alice"), ("role", "")];

        assert_eq!(lookup_param(params.into_iter(), "name").unwrap(), "alice");
        assert!(matches!(
            lookup_param(params.into_iter(), "role"),
            Err(ApiError::MissingInput("role"))
        ));
        assert!(matches!(
            lookup_param(std::iter::empty(), "name"),
            Err(ApiError::MissingInput("name"))
        ));
    }
}
