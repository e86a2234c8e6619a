//! User and role management routes
//!
//! Every handler runs the same pipeline: extract the cluster target and path
//! parameters, open a session authenticated as the caller, issue one call,
//! and classify the outcome. The session is dropped when the handler
//! returns, whichever way it exits.

use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, put},
};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::extract::{ClusterTarget, UserPath, UserRolePath};
use crate::state::AppState;

use super::types::UserResponse;

/// Count every response of one operation by status code.
///
/// Runs outside the extractors, so validation rejections are counted too.
async fn track_requests(
    State(operation): State<&'static str>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    metrics::counter!(
        "etcd_adminer_requests_total",
        "operation" => operation,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);
    response
}

/// GET /api/users
pub(crate) async fn list_users(
    State(state): State<AppState>,
    target: ClusterTarget,
) -> Result<Json<Vec<String>>, ApiError> {
    debug!("Listing users on {:?}", target.endpoints.as_slice());

    let mut session = state.open_session(&target).await?;
    let users = session.user_list().await.map_err(ApiError::from_query)?;

    Ok(Json(users))
}

/// GET /api/users/{name}
pub(crate) async fn get_user(
    State(state): State<AppState>,
    target: ClusterTarget,
    UserPath { name }: UserPath,
) -> Result<Json<UserResponse>, ApiError> {
    debug!("Fetching user: {}", name);

    let mut session = state.open_session(&target).await?;
    let user = session.user_get(&name).await.map_err(ApiError::from_query)?;

    Ok(Json(user.into()))
}

/// PUT|POST /api/users/{name}/roles/{role}
pub(crate) async fn assign_role(
    State(state): State<AppState>,
    target: ClusterTarget,
    UserRolePath { name, role }: UserRolePath,
) -> Result<StatusCode, ApiError> {
    debug!("Granting role {} to user {}", role, name);

    let mut session = state.open_session(&target).await?;
    session
        .user_grant_role(&name, &role)
        .await
        .map_err(ApiError::from_mutation)?;

    info!("Granted role {} to user {}", role, name);
    Ok(StatusCode::OK)
}

/// DELETE /api/users/{name}/roles/{role}
pub(crate) async fn unassign_role(
    State(state): State<AppState>,
    target: ClusterTarget,
    UserRolePath { name, role }: UserRolePath,
) -> Result<StatusCode, ApiError> {
    debug!("Revoking role {} from user {}", role, name);

    let mut session = state.open_session(&target).await?;
    session
        .user_revoke_role(&name, &role)
        .await
        .map_err(ApiError::from_mutation)?;

    info!("Revoked role {} from user {}", role, name);
    Ok(StatusCode::OK)
}

/// Create user routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/users",
            get(list_users).layer(middleware::from_fn_with_state("list_users", track_requests)),
        )
        .route(
            "/api/users/{name}",
            get(get_user).layer(middleware::from_fn_with_state("get_user", track_requests)),
        )
        .route(
            "/api/users/{name}/roles/{role}",
            put(assign_role)
                .post(assign_role)
                .layer(middleware::from_fn_with_state("assign_role", track_requests))
                .merge(
                    delete(unassign_role)
                        .layer(middleware::from_fn_with_state("unassign_role", track_requests)),
                ),
        )
}
