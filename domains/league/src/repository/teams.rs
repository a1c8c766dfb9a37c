//! Team repository

use sports_manager_common::RepositoryError;
use uuid::Uuid;

use super::documents::DocumentRepository;
use crate::domain::entities::Team;

pub type TeamRepository = DocumentRepository<Team>;

impl DocumentRepository<Team> {
    pub async fn find_by_sport(&self, sport_id: Uuid) -> Result<Vec<Team>, RepositoryError> {
        self.find_by_field("sport", sport_id.to_string()).await
    }

    pub async fn find_by_manager(&self, manager_id: Uuid) -> Result<Vec<Team>, RepositoryError> {
        self.find_by_field("manager", manager_id.to_string()).await
    }
}
