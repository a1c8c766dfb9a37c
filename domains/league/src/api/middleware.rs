//! League domain state and token issuer integration

use axum::extract::FromRef;
use sports_manager_auth::TokenIssuer;

use crate::repository::LeagueRepositories;

pub use sports_manager_auth::AuthManager;

/// Application state for the league domain
#[derive(Clone)]
pub struct LeagueState {
    pub repos: LeagueRepositories,
    pub tokens: TokenIssuer,
}

impl LeagueState {
    pub fn new(repos: LeagueRepositories, tokens: TokenIssuer) -> Self {
        Self { repos, tokens }
    }
}

impl FromRef<LeagueState> for TokenIssuer {
    fn from_ref(state: &LeagueState) -> Self {
        state.tokens.clone()
    }
}
