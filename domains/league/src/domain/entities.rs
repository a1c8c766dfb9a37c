//! Domain entities for the league domain
//!
//! Each entity is stored as one JSON document. Field names are camelCase on
//! the wire and in storage. References between entities (`Player.team`,
//! `Team.sport`, `Team.manager`) are plain ids and are not checked against
//! the referenced collection.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use sports_manager_common::{hash_password, verify_password, Result};
use uuid::Uuid;

use crate::repository::Collection;

/// An entity that can be persisted in a document collection
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection the entity lives in
    const COLLECTION: Collection;

    /// Document fields whose value must be unique across the collection
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    fn id(&self) -> Uuid;
}

/// Manager entity. `password_digest` must never reach a response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: Uuid,
    pub user_name: String,
    pub password_digest: String,
    pub first_name: String,
    pub last_name: String,
}

impl Manager {
    /// Create a new manager, hashing the plaintext password
    pub fn new(
        user_name: String,
        password: &str,
        first_name: String,
        last_name: String,
    ) -> Result<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            user_name,
            password_digest: hash_password(password)?,
            first_name,
            last_name,
        })
    }

    pub fn verify_password(&self, password: &str) -> bool {
        verify_password(password, &self.password_digest)
    }

    pub fn set_password(&mut self, password: &str) -> Result<()> {
        self.password_digest = hash_password(password)?;
        Ok(())
    }
}

impl Document for Manager {
    const COLLECTION: Collection = Collection::Managers;
    const UNIQUE_FIELDS: &'static [&'static str] = &["userName"];

    fn id(&self) -> Uuid {
        self.id
    }
}

/// A named statistic recorded for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    pub name: String,
    pub value: f64,
}

/// Player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Vec<Statistic>>,
}

impl Document for Player {
    const COLLECTION: Collection = Collection::Players;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub team_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<Uuid>,
}

impl Document for Team {
    const COLLECTION: Collection = Collection::Teams;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Sport entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sport {
    pub id: Uuid,
    pub sport_name: String,
}

impl Document for Sport {
    const COLLECTION: Collection = Collection::Sports;

    fn id(&self) -> Uuid {
        self.id
    }
}
