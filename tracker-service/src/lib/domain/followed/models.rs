use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::followed::errors::FollowedNameError;
use crate::domain::followed::errors::LevelTypeError;
use crate::domain::user::models::UserId;

/// Followed aggregate entity.
///
/// A tracker a user keeps on something they consume. `created_by` is fixed at
/// creation and decides who may change or remove the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Followed {
    pub id: FollowedId,
    pub name: FollowedName,
    pub level_type: LevelType,
    pub level_number: i32,
    pub episode_number: i32,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Followed {
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.created_by == *user_id
    }
}

/// Followed unique identifier type, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FollowedId(pub i64);

impl fmt::Display for FollowedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name of a followed item, never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowedName(String);

impl FollowedName {
    /// # Errors
    /// * `Empty` - Name is empty or only whitespace
    pub fn new(name: String) -> Result<Self, FollowedNameError> {
        if name.trim().is_empty() {
            return Err(FollowedNameError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Kind of unit progress is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelType {
    Season,
    Movie,
    Volume,
    Chapter,
}

impl LevelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelType::Season => "SEASON",
            LevelType::Movie => "MOVIE",
            LevelType::Volume => "VOLUME",
            LevelType::Chapter => "CHAPTER",
        }
    }
}

impl FromStr for LevelType {
    type Err = LevelTypeError;

    /// Case-insensitive; `"season"` and `"SEASON"` are the same level type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SEASON" => Ok(LevelType::Season),
            "MOVIE" => Ok(LevelType::Movie),
            "VOLUME" => Ok(LevelType::Volume),
            "CHAPTER" => Ok(LevelType::Chapter),
            _ => Err(LevelTypeError::Invalid(s.to_string())),
        }
    }
}

impl fmt::Display for LevelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated field values for creating or replacing a followed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowedCommand {
    pub name: FollowedName,
    pub level_type: LevelType,
    pub level_number: i32,
    pub episode_number: i32,
}

impl FollowedCommand {
    pub fn new(
        name: FollowedName,
        level_type: LevelType,
        level_number: i32,
        episode_number: i32,
    ) -> Self {
        Self {
            name,
            level_type,
            level_number,
            episode_number,
        }
    }
}

/// Followed item to be inserted; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewFollowed {
    pub name: FollowedName,
    pub level_type: LevelType,
    pub level_number: i32,
    pub episode_number: i32,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
