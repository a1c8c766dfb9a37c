//! Repository implementations for the league domain

pub mod documents;
pub mod managers;
pub mod memory;
pub mod players;
pub mod postgres;
pub mod store;
pub mod teams;

use std::sync::Arc;

use crate::domain::entities::Sport;

pub use documents::DocumentRepository;
pub use managers::ManagerRepository;
pub use memory::MemoryDocumentStore;
pub use players::PlayerRepository;
pub use postgres::{PgDocumentStore, MIGRATOR};
pub use store::{Collection, DocumentStore};
pub use teams::TeamRepository;

pub type SportRepository = DocumentRepository<Sport>;

/// Combined repository access for the league domain
#[derive(Clone)]
pub struct LeagueRepositories {
    pub managers: ManagerRepository,
    pub players: PlayerRepository,
    pub teams: TeamRepository,
    pub sports: SportRepository,
}

impl LeagueRepositories {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            managers: ManagerRepository::new(Arc::clone(&store)),
            players: PlayerRepository::new(Arc::clone(&store)),
            teams: TeamRepository::new(Arc::clone(&store)),
            sports: SportRepository::new(store),
        }
    }

    /// Repositories over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryDocumentStore::new()))
    }
}
