//! Manager repository

use sports_manager_common::RepositoryError;

use super::documents::DocumentRepository;
use crate::domain::entities::Manager;

pub type ManagerRepository = DocumentRepository<Manager>;

impl DocumentRepository<Manager> {
    /// Look up the manager with this exact `userName`
    pub async fn find_by_user_name(
        &self,
        user_name: &str,
    ) -> Result<Option<Manager>, RepositoryError> {
        Ok(self
            .find_by_field("userName", user_name)
            .await?
            .into_iter()
            .next())
    }
}
