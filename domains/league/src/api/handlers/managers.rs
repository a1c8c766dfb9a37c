//! Manager API handlers: signup, login and account management
//!
//! Managers are the only authenticated principals. A session token names a
//! manager id, and a manager may only replace or delete their own account.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use sports_manager_auth::{AuthContext, ACCESS_FORBIDDEN};
use sports_manager_common::{Error, Result, ValidatedJson};
use uuid::Uuid;
use validator::Validate;

use super::{not_found, parse_id, MessageResponse};
use crate::api::middleware::{AuthManager, LeagueState};
use crate::domain::entities::Manager;

/// Request for `POST /manager`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100))]
    pub user_name: String,

    #[validate(length(min = 1))]
    pub password: String,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
}

/// Request for `POST /manager/login`
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub user_name: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Request for `PUT /manager/{id}`.
///
/// Leaving out `password` keeps the current one.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManagerRequest {
    #[validate(length(min = 1, max = 100))]
    pub user_name: String,

    #[validate(length(min = 1))]
    pub password: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
}

/// Manager as exposed to clients; never carries the password digest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManagerResponse {
    pub id: Uuid,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<Manager> for ManagerResponse {
    fn from(manager: Manager) -> Self {
        Self {
            id: manager.id,
            user_name: manager.user_name,
            first_name: manager.first_name,
            last_name: manager.last_name,
        }
    }
}

/// Successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: ManagerResponse,
    pub token: String,
}

/// Register a new manager
///
/// **POST /manager**
///
/// A `userName` already in use is rejected with 409.
pub async fn signup(
    State(state): State<LeagueState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<ManagerResponse>)> {
    let manager = Manager::new(
        request.user_name,
        &request.password,
        request.first_name,
        request.last_name,
    )?;
    let manager = state.repos.managers.insert(manager).await?;

    tracing::info!(manager_id = %manager.id, "Manager signed up");

    Ok((StatusCode::CREATED, Json(manager.into())))
}

/// Exchange credentials for a session token
///
/// **POST /manager/login**
///
/// An unknown `userName` and a wrong password produce the same 401 response.
pub async fn login(
    State(state): State<LeagueState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let Some(manager) = state
        .repos
        .managers
        .find_by_user_name(&request.user_name)
        .await?
    else {
        tracing::debug!(user_found = false, "Login rejected");
        return Err(Error::InvalidCredentials);
    };

    if !manager.verify_password(&request.password) {
        tracing::debug!(user_found = true, "Login rejected");
        return Err(Error::InvalidCredentials);
    }

    let token = state.tokens.issue(manager.id)?;

    tracing::info!(manager_id = %manager.id, "Manager logged in");

    Ok(Json(LoginResponse {
        user: manager.into(),
        token,
    }))
}

/// **GET /manager**
pub async fn get_managers(State(state): State<LeagueState>) -> Result<Json<Vec<ManagerResponse>>> {
    let managers = state.repos.managers.find_all().await?;
    Ok(Json(managers.into_iter().map(Into::into).collect()))
}

/// **GET /manager/{id}**
pub async fn get_manager(
    State(state): State<LeagueState>,
    Path(id): Path<String>,
) -> Result<Json<ManagerResponse>> {
    let id = parse_id(&id, "Manager")?;

    state
        .repos
        .managers
        .find_by_id(id)
        .await?
        .map(|manager| Json(manager.into()))
        .ok_or_else(|| not_found("Manager"))
}

/// Replace the caller's own account
///
/// **PUT /manager/{id}**
pub async fn update_manager(
    AuthManager(auth): AuthManager,
    State(state): State<LeagueState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateManagerRequest>,
) -> Result<(StatusCode, Json<ManagerResponse>)> {
    let id = parse_id(&id, "Manager")?;
    ensure_owner(&auth, id)?;

    let mut manager = state
        .repos
        .managers
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found("Manager"))?;

    manager.user_name = request.user_name;
    manager.first_name = request.first_name;
    manager.last_name = request.last_name;
    if let Some(password) = request.password {
        manager.set_password(&password)?;
    }

    let manager = state
        .repos
        .managers
        .update_by_id(id, manager)
        .await?
        .ok_or_else(|| not_found("Manager"))?;

    tracing::info!(manager_id = %id, "Manager updated");

    Ok((StatusCode::ACCEPTED, Json(manager.into())))
}

/// Delete the caller's own account
///
/// **DELETE /manager/{id}**
///
/// Teams referencing the manager keep their `manager` value.
pub async fn delete_manager(
    AuthManager(auth): AuthManager,
    State(state): State<LeagueState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let id = parse_id(&id, "Manager")?;
    ensure_owner(&auth, id)?;

    if !state.repos.managers.delete_by_id(id).await? {
        return Err(not_found("Manager"));
    }

    tracing::info!(manager_id = %id, "Manager deleted");

    Ok((StatusCode::ACCEPTED, Json(MessageResponse::success())))
}

fn ensure_owner(auth: &AuthContext, id: Uuid) -> Result<()> {
    if auth.is_manager(id) {
        Ok(())
    } else {
        tracing::warn!(
            manager_id = %auth.manager_id,
            target_id = %id,
            "Manager attempted to modify another account"
        );
        Err(Error::Authorization(ACCESS_FORBIDDEN.to_string()))
    }
}
