//! Player repository

use sports_manager_common::RepositoryError;
use uuid::Uuid;

use super::documents::DocumentRepository;
use crate::domain::entities::Player;

pub type PlayerRepository = DocumentRepository<Player>;

impl DocumentRepository<Player> {
    /// Players whose `team` reference is `team_id`
    pub async fn find_by_team(&self, team_id: Uuid) -> Result<Vec<Player>, RepositoryError> {
        self.find_by_field("team", team_id.to_string()).await
    }
}
