use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::errors::DomainError;
use crate::domain::followed::models::Followed;
use crate::domain::followed::models::FollowedId;
use crate::domain::followed::models::FollowedName;
use crate::domain::followed::models::LevelType;
use crate::domain::followed::models::NewFollowed;
use crate::domain::followed::ports::FollowedRepository;
use crate::domain::user::models::UserId;

pub struct PostgresFollowedRepository {
    pool: PgPool,
}

impl PostgresFollowedRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FollowedRow {
    id: i64,
    name: String,
    level_type: String,
    level_number: i32,
    episode_number: i32,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<FollowedRow> for Followed {
    type Error = DomainError;

    fn try_from(row: FollowedRow) -> Result<Self, Self::Error> {
        let id = row.id;
        let corrupt = move |detail: String| {
            DomainError::Internal(format!("Corrupt followed row {}: {}", id, detail))
        };

        let name = FollowedName::new(row.name).map_err(|e| corrupt(e.to_string()))?;
        let level_type = row
            .level_type
            .parse::<LevelType>()
            .map_err(|e| corrupt(e.to_string()))?;

        Ok(Followed {
            id: FollowedId(id),
            name,
            level_type,
            level_number: row.level_number,
            episode_number: row.episode_number,
            created_by: UserId(row.user_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> DomainError {
    DomainError::Internal(format!("Database error: {}", e))
}

fn into_domain(rows: Vec<FollowedRow>) -> Result<Vec<Followed>, DomainError> {
    rows.into_iter().map(Followed::try_from).collect()
}

const COLUMNS: &str =
    "id, name, level_type, level_number, episode_number, user_id, created_at, updated_at";

#[async_trait]
impl FollowedRepository for PostgresFollowedRepository {
    async fn create(&self, followed: NewFollowed) -> Result<Followed, DomainError> {
        let query = format!(
            r#"
            INSERT INTO followed (name, level_type, level_number, episode_number, user_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            COLUMNS
        );

        sqlx::query_as::<_, FollowedRow>(&query)
            .bind(followed.name.as_str())
            .bind(followed.level_type.as_str())
            .bind(followed.level_number)
            .bind(followed.episode_number)
            .bind(followed.created_by.0)
            .bind(followed.created_at)
            .bind(followed.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?
            .try_into()
    }

    async fn find_by_id(&self, id: &FollowedId) -> Result<Option<Followed>, DomainError> {
        let query = format!("SELECT {} FROM followed WHERE id = $1", COLUMNS);

        sqlx::query_as::<_, FollowedRow>(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?
            .map(Followed::try_from)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Followed>, DomainError> {
        let query = format!("SELECT {} FROM followed ORDER BY id", COLUMNS);

        let rows = sqlx::query_as::<_, FollowedRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        into_domain(rows)
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Followed>, DomainError> {
        let query = format!(
            "SELECT {} FROM followed WHERE user_id = $1 ORDER BY id",
            COLUMNS
        );

        let rows = sqlx::query_as::<_, FollowedRow>(&query)
            .bind(owner.0)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        into_domain(rows)
    }

    async fn update(&self, followed: Followed) -> Result<Followed, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE followed
            SET name = $2, level_type = $3, level_number = $4, episode_number = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(followed.id.0)
        .bind(followed.name.as_str())
        .bind(followed.level_type.as_str())
        .bind(followed.level_number)
        .bind(followed.episode_number)
        .bind(followed.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Followed", followed.id));
        }

        Ok(followed)
    }

    async fn delete(&self, id: &FollowedId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM followed WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Followed", id));
        }

        Ok(())
    }
}
