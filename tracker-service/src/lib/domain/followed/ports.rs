use async_trait::async_trait;

use crate::domain::auth::models::Principal;
use crate::domain::errors::DomainError;
use crate::domain::followed::models::Followed;
use crate::domain::followed::models::FollowedCommand;
use crate::domain::followed::models::FollowedId;
use crate::domain::followed::models::NewFollowed;
use crate::domain::user::models::UserId;

/// Port for followed item operations.
///
/// Mutations of a specific record are restricted to the user who created it.
#[async_trait]
pub trait FollowedServicePort: Send + Sync + 'static {
    /// Create a followed item owned by the principal.
    ///
    /// # Errors
    /// * `Internal` - Storage failed
    async fn create(
        &self,
        principal: &Principal,
        command: FollowedCommand,
    ) -> Result<Followed, DomainError>;

    /// # Errors
    /// * `NotFound` - No item with this id
    /// * `Internal` - Storage failed
    async fn get(&self, id: &FollowedId) -> Result<Followed, DomainError>;

    /// # Errors
    /// * `Internal` - Storage failed
    async fn list_all(&self) -> Result<Vec<Followed>, DomainError>;

    /// Items created by the principal, and nobody else.
    ///
    /// # Errors
    /// * `Internal` - Storage failed
    async fn list_by_owner(&self, principal: &Principal) -> Result<Vec<Followed>, DomainError>;

    /// Replace every field of an item the principal owns.
    ///
    /// # Errors
    /// * `NotFound` - No item with this id
    /// * `Forbidden` - Item belongs to another user
    /// * `Internal` - Storage failed
    async fn update(
        &self,
        principal: &Principal,
        id: &FollowedId,
        command: FollowedCommand,
    ) -> Result<Followed, DomainError>;

    /// # Errors
    /// * `NotFound` - No item with this id
    /// * `Forbidden` - Item belongs to another user
    /// * `Internal` - Storage failed
    async fn delete(&self, principal: &Principal, id: &FollowedId) -> Result<(), DomainError>;
}

/// Persistence operations for followed aggregate.
#[async_trait]
pub trait FollowedRepository: Send + Sync + 'static {
    async fn create(&self, followed: NewFollowed) -> Result<Followed, DomainError>;

    async fn find_by_id(&self, id: &FollowedId) -> Result<Option<Followed>, DomainError>;

    async fn list_all(&self) -> Result<Vec<Followed>, DomainError>;

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Followed>, DomainError>;

    /// Write back every mutable field of `followed`.
    ///
    /// # Errors
    /// * `NotFound` - Item vanished since it was read
    /// * `Internal` - Database operation failed
    async fn update(&self, followed: Followed) -> Result<Followed, DomainError>;

    /// # Errors
    /// * `NotFound` - Item does not exist
    /// * `Internal` - Database operation failed
    async fn delete(&self, id: &FollowedId) -> Result<(), DomainError>;
}
