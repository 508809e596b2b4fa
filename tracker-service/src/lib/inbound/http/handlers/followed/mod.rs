use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::errors::DomainError;
use crate::domain::followed::models::Followed;
use crate::domain::followed::models::FollowedCommand;
use crate::domain::followed::models::FollowedName;
use crate::domain::followed::models::LevelType;

pub mod create_followed;
pub mod delete_followed;
pub mod get_followed;
pub mod list_followed;
pub mod list_user_followed;
pub mod update_followed;

pub use create_followed::create_followed;
pub use delete_followed::delete_followed;
pub use get_followed::get_followed;
pub use list_followed::list_followed;
pub use list_user_followed::list_user_followed;
pub use update_followed::update_followed;

/// Body of create and update requests. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowedRequest {
    name: String,
    level_type: String,
    level_number: i32,
    episode_number: i32,
}

impl FollowedRequest {
    fn try_into_command(self) -> Result<FollowedCommand, DomainError> {
        let name = FollowedName::new(self.name)?;
        let level_type = self.level_type.parse::<LevelType>()?;
        Ok(FollowedCommand::new(
            name,
            level_type,
            self.level_number,
            self.episode_number,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowedData {
    pub id: i64,
    pub name: String,
    pub level_type: String,
    pub level_number: i32,
    pub episode_number: i32,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Followed> for FollowedData {
    fn from(followed: &Followed) -> Self {
        Self {
            id: followed.id.0,
            name: followed.name.as_str().to_string(),
            level_type: followed.level_type.as_str().to_string(),
            level_number: followed.level_number,
            episode_number: followed.episode_number,
            created_by: followed.created_by.0,
            created_at: followed.created_at,
            updated_at: followed.updated_at,
        }
    }
}
