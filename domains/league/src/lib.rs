//! League domain: managers, players, teams, sports

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export repository types
pub use repository::{
    Collection, DocumentRepository, DocumentStore, LeagueRepositories, ManagerRepository,
    MemoryDocumentStore, PgDocumentStore, PlayerRepository, SportRepository, TeamRepository,
};

// Re-export API types
pub use api::routes;
pub use api::LeagueState;
