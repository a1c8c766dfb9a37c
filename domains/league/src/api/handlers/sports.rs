//! Sport API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sports_manager_common::{Result, ValidatedJson};
use uuid::Uuid;
use validator::Validate;

use super::{not_found, parse_id, MessageResponse};
use crate::api::middleware::{AuthManager, LeagueState};
use crate::domain::entities::Sport;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SportRequest {
    #[validate(length(min = 1, max = 100))]
    pub sport_name: String,
}

/// **POST /sport**
pub async fn add_sport(
    AuthManager(auth): AuthManager,
    State(state): State<LeagueState>,
    ValidatedJson(request): ValidatedJson<SportRequest>,
) -> Result<(StatusCode, Json<Sport>)> {
    let sport = state
        .repos
        .sports
        .insert(Sport {
            id: Uuid::new_v4(),
            sport_name: request.sport_name,
        })
        .await?;

    tracing::info!(sport_id = %sport.id, manager_id = %auth.manager_id, "Sport created");

    Ok((StatusCode::CREATED, Json(sport)))
}

/// **GET /sport**
pub async fn get_sports(State(state): State<LeagueState>) -> Result<Json<Vec<Sport>>> {
    let sports = state.repos.sports.find_all().await?;
    Ok(Json(sports))
}

/// **GET /sport/{id}**
pub async fn get_sport(
    State(state): State<LeagueState>,
    Path(id): Path<String>,
) -> Result<Json<Sport>> {
    let id = parse_id(&id, "Sport")?;

    state
        .repos
        .sports
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found("Sport"))
}

/// **PUT /sport/{id}**
pub async fn update_sport(
    AuthManager(auth): AuthManager,
    State(state): State<LeagueState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<SportRequest>,
) -> Result<(StatusCode, Json<Sport>)> {
    let id = parse_id(&id, "Sport")?;

    let sport = state
        .repos
        .sports
        .update_by_id(
            id,
            Sport {
                id,
                sport_name: request.sport_name,
            },
        )
        .await?
        .ok_or_else(|| not_found("Sport"))?;

    tracing::info!(sport_id = %id, manager_id = %auth.manager_id, "Sport updated");

    Ok((StatusCode::ACCEPTED, Json(sport)))
}

/// **DELETE /sport/{id}**
pub async fn delete_sport(
    AuthManager(auth): AuthManager,
    State(state): State<LeagueState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let id = parse_id(&id, "Sport")?;

    if !state.repos.sports.delete_by_id(id).await? {
        return Err(not_found("Sport"));
    }

    tracing::info!(sport_id = %id, manager_id = %auth.manager_id, "Sport deleted");

    Ok((StatusCode::ACCEPTED, Json(MessageResponse::success())))
}
