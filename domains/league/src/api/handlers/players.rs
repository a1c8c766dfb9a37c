//! Player API handlers

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
use crate::domain::entities::{Player, Statistic};

/// Player payload for both create and replace.
///
/// On `PUT` every optional field left out is cleared on the stored player.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    /// Team id; not checked against the team collection
    pub team: Option<Uuid>,

    pub positions: Option<Vec<String>>,

    pub player_number: Option<u32>,

    #[validate(range(min = 0.0))]
    pub salary: Option<f64>,

    pub statistics: Option<Vec<Statistic>>,
}

impl PlayerRequest {
    fn into_player(self, id: Uuid) -> Player {
        Player {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            team: self.team,
            positions: self.positions,
            player_number: self.player_number,
            salary: self.salary,
            statistics: self.statistics,
        }
    }
}

/// **POST /player**
pub async fn add_player(
    AuthManager(auth): AuthManager,
    State(state): State<LeagueState>,
    ValidatedJson(request): ValidatedJson<PlayerRequest>,
) -> Result<(StatusCode, Json<Player>)> {
    let player = state
        .repos
        .players
        .insert(request.into_player(Uuid::new_v4()))
        .await?;

    tracing::info!(
        player_id = %player.id,
        manager_id = %auth.manager_id,
        "Player created"
    );

    Ok((StatusCode::CREATED, Json(player)))
}

/// **GET /player**
pub async fn get_players(State(state): State<LeagueState>) -> Result<Json<Vec<Player>>> {
    let players = state.repos.players.find_all().await?;
    Ok(Json(players))
}

/// **GET /player/{id}**
pub async fn get_player(
    State(state): State<LeagueState>,
    Path(id): Path<String>,
) -> Result<Json<Player>> {
    let id = parse_id(&id, "Player")?;

    state
        .repos
        .players
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found("Player"))
}

/// **GET /player/team/{id}**
///
/// A team with no players yields an empty list.
pub async fn get_players_by_team(
    State(state): State<LeagueState>,
    Path(team_id): Path<String>,
) -> Result<Json<Vec<Player>>> {
    let team_id = parse_id(&team_id, "Team")?;
    let players = state.repos.players.find_by_team(team_id).await?;
    Ok(Json(players))
}

/// **PUT /player/{id}**
pub async fn update_player(
    AuthManager(auth): AuthManager,
    State(state): State<LeagueState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<PlayerRequest>,
) -> Result<(StatusCode, Json<Player>)> {
    let id = parse_id(&id, "Player")?;

    let player = state
        .repos
        .players
        .update_by_id(id, request.into_player(id))
        .await?
        .ok_or_else(|| not_found("Player"))?;

    tracing::info!(player_id = %id, manager_id = %auth.manager_id, "Player updated");

    Ok((StatusCode::ACCEPTED, Json(player)))
}

/// **DELETE /player/{id}**
pub async fn delete_player(
    AuthManager(auth): AuthManager,
    State(state): State<LeagueState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let id = parse_id(&id, "Player")?;

    if !state.repos.players.delete_by_id(id).await? {
        return Err(not_found("Player"));
    }

    tracing::info!(player_id = %id, manager_id = %auth.manager_id, "Player deleted");

    Ok((StatusCode::ACCEPTED, Json(MessageResponse::success())))
}
