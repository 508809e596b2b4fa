use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::auth::models::Principal;
use crate::domain::errors::DomainError;
use crate::domain::followed::models::Followed;
use crate::domain::followed::models::FollowedCommand;
use crate::domain::followed::models::FollowedId;
use crate::domain::followed::models::NewFollowed;
use crate::domain::followed::ports::FollowedRepository;
use crate::domain::followed::ports::FollowedServicePort;

/// Domain service for followed items.
pub struct FollowedService<FR>
where
    FR: FollowedRepository,
{
    repository: Arc<FR>,
}

impl<FR> FollowedService<FR>
where
    FR: FollowedRepository,
{
    pub fn new(repository: Arc<FR>) -> Self {
        Self { repository }
    }

    /// Load an item and check the principal created it.
    ///
    /// Existence is checked first, so a missing id is 404 for everyone.
    async fn owned(
        &self,
        principal: &Principal,
        id: &FollowedId,
    ) -> Result<Followed, DomainError> {
        let followed = self.get(id).await?;

        if !followed.is_owned_by(&principal.user_id) {
            tracing::warn!(
                followed_id = %id,
                owner_id = %followed.created_by,
                user_id = %principal.user_id,
                "Rejected change to followed item owned by another user"
            );
            return Err(DomainError::Forbidden(
                "You do not own this followed item".to_string(),
            ));
        }

        Ok(followed)
    }
}

#[async_trait]
impl<FR> FollowedServicePort for FollowedService<FR>
where
    FR: FollowedRepository,
{
    async fn create(
        &self,
        principal: &Principal,
        command: FollowedCommand,
    ) -> Result<Followed, DomainError> {
        let now = Utc::now();

        let followed = self
            .repository
            .create(NewFollowed {
                name: command.name,
                level_type: command.level_type,
                level_number: command.level_number,
                episode_number: command.episode_number,
                created_by: principal.user_id,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::debug!(
            followed_id = %followed.id,
            user_id = %principal.user_id,
            "Followed item created"
        );

        Ok(followed)
    }

    async fn get(&self, id: &FollowedId) -> Result<Followed, DomainError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Followed", id))
    }

    async fn list_all(&self) -> Result<Vec<Followed>, DomainError> {
        self.repository.list_all().await
    }

    async fn list_by_owner(&self, principal: &Principal) -> Result<Vec<Followed>, DomainError> {
        self.repository.list_by_owner(&principal.user_id).await
    }

    async fn update(
        &self,
        principal: &Principal,
        id: &FollowedId,
        command: FollowedCommand,
    ) -> Result<Followed, DomainError> {
        let mut followed = self.owned(principal, id).await?;

        followed.name = command.name;
        followed.level_type = command.level_type;
        followed.level_number = command.level_number;
        followed.episode_number = command.episode_number;
        followed.updated_at = Utc::now();

        self.repository.update(followed).await
    }

    async fn delete(&self, principal: &Principal, id: &FollowedId) -> Result<(), DomainError> {
        self.owned(principal, id).await?;
        self.repository.delete(id).await
    }
}
