//! Team API handlers

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
use crate::domain::entities::Team;

/// Team payload for both create and replace
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    #[validate(length(min = 1, max = 100))]
    pub team_name: String,

    /// Sport id; not checked against the sport collection
    pub sport: Option<Uuid>,

    /// Manager id; not checked against the manager collection
    pub manager: Option<Uuid>,
}

impl TeamRequest {
    fn into_team(self, id: Uuid) -> Team {
        Team {
            id,
            team_name: self.team_name,
            sport: self.sport,
            manager: self.manager,
        }
    }
}

/// **POST /team**
pub async fn add_team(
    AuthManager(auth): AuthManager,
    State(state): State<LeagueState>,
    ValidatedJson(request): ValidatedJson<TeamRequest>,
) -> Result<(StatusCode, Json<Team>)> {
    let team = state
        .repos
        .teams
        .insert(request.into_team(Uuid::new_v4()))
        .await?;

    tracing::info!(team_id = %team.id, manager_id = %auth.manager_id, "Team created");

    Ok((StatusCode::CREATED, Json(team)))
}

/// **GET /team**
pub async fn get_teams(State(state): State<LeagueState>) -> Result<Json<Vec<Team>>> {
    let teams = state.repos.teams.find_all().await?;
    Ok(Json(teams))
}

/// **GET /team/{id}**
pub async fn get_team(
    State(state): State<LeagueState>,
    Path(id): Path<String>,
) -> Result<Json<Team>> {
    let id = parse_id(&id, "Team")?;

    state
        .repos
        .teams
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found("Team"))
}

/// **GET /team/sport/{id}**
pub async fn get_teams_by_sport(
    State(state): State<LeagueState>,
    Path(sport_id): Path<String>,
) -> Result<Json<Vec<Team>>> {
    let sport_id = parse_id(&sport_id, "Sport")?;
    let teams = state.repos.teams.find_by_sport(sport_id).await?;
    Ok(Json(teams))
}

/// **GET /team/manager/{id}**
pub async fn get_teams_by_manager(
    State(state): State<LeagueState>,
    Path(manager_id): Path<String>,
) -> Result<Json<Vec<Team>>> {
    let manager_id = parse_id(&manager_id, "Manager")?;
    let teams = state.repos.teams.find_by_manager(manager_id).await?;
    Ok(Json(teams))
}

/// **PUT /team/{id}**
pub async fn update_team(
    AuthManager(auth): AuthManager,
    State(state): State<LeagueState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<TeamRequest>,
) -> Result<(StatusCode, Json<Team>)> {
    let id = parse_id(&id, "Team")?;

    let team = state
        .repos
        .teams
        .update_by_id(id, request.into_team(id))
        .await?
        .ok_or_else(|| not_found("Team"))?;

    tracing::info!(team_id = %id, manager_id = %auth.manager_id, "Team updated");

    Ok((StatusCode::ACCEPTED, Json(team)))
}

/// **DELETE /team/{id}**
///
/// Players referencing the team keep their `team` value.
pub async fn delete_team(
    AuthManager(auth): AuthManager,
    State(state): State<LeagueState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let id = parse_id(&id, "Team")?;

    if !state.repos.teams.delete_by_id(id).await? {
        return Err(not_found("Team"));
    }

    tracing::info!(team_id = %id, manager_id = %auth.manager_id, "Team deleted");

    Ok((StatusCode::ACCEPTED, Json(MessageResponse::success())))
}
