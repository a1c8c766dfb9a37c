//! Route definitions for the league domain API
//!
//! Protected routes take an `AuthManager` argument; reads, signup and login
//! are public.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{admin, managers, players, sports, teams};
use super::middleware::LeagueState;

fn manager_routes() -> Router<LeagueState> {
    Router::new()
        .route(
            "/manager",
            get(managers::get_managers).post(managers::signup),
        )
        .route("/manager/login", post(managers::login))
        .route(
            "/manager/{id}",
            get(managers::get_manager)
                .put(managers::update_manager)
                .delete(managers::delete_manager),
        )
}

fn player_routes() -> Router<LeagueState> {
    Router::new()
        .route("/player", get(players::get_players).post(players::add_player))
        .route(
            "/player/{id}",
            get(players::get_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        .route("/player/team/{id}", get(players::get_players_by_team))
}

fn team_routes() -> Router<LeagueState> {
    Router::new()
        .route("/team", get(teams::get_teams).post(teams::add_team))
        .route(
            "/team/{id}",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        .route("/team/sport/{id}", get(teams::get_teams_by_sport))
        .route("/team/manager/{id}", get(teams::get_teams_by_manager))
}

fn sport_routes() -> Router<LeagueState> {
    Router::new()
        .route("/sport", get(sports::get_sports).post(sports::add_sport))
        .route(
            "/sport/{id}",
            get(sports::get_sport)
                .put(sports::update_sport)
                .delete(sports::delete_sport),
        )
}

fn admin_routes() -> Router<LeagueState> {
    Router::new().route("/admin/health-check", get(admin::health_check))
}

/// Create all league domain API routes
pub fn routes() -> Router<LeagueState> {
    Router::new()
        .merge(manager_routes())
        .merge(player_routes())
        .merge(team_routes())
        .merge(sport_routes())
        .merge(admin_routes())
}
