use async_trait::async_trait;

use crate::domain::auth::models::Principal;
use crate::domain::errors::DomainError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for account operations on the calling user.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Load the account behind the principal.
    ///
    /// # Errors
    /// * `NotFound` - Account was deleted after the token was checked
    /// * `Internal` - Storage failed
    async fn user_info(&self, principal: &Principal) -> Result<User, DomainError>;

    /// Replace the password after re-checking the current one.
    ///
    /// # Errors
    /// * `Forbidden` - Current password is incorrect
    /// * `NotFound` - Account no longer exists
    /// * `Internal` - Storage or hashing failed
    async fn update_password(
        &self,
        principal: &Principal,
        current_password: String,
        new_password: Password,
    ) -> Result<(), DomainError>;

    /// Delete the account after re-checking the password.
    ///
    /// # Errors
    /// * `Forbidden` - Password is incorrect
    /// * `NotFound` - Account no longer exists
    /// * `Internal` - Storage failed
    async fn delete_account(&self, principal: &Principal, password: String)
        -> Result<(), DomainError>;
}

/// Persistence operations for user aggregate.
///
/// Every mutating operation is a single transaction. Username uniqueness is
/// enforced by the store itself, independently of any caller pre-check.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Returns
    /// Created user entity with its assigned id
    ///
    /// # Errors
    /// * `Conflict` - Username is already taken
    /// * `Internal` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `Internal` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Retrieve user by username.
    ///
    /// # Errors
    /// * `Internal` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, DomainError>;

    /// Check whether a username is taken.
    ///
    /// # Errors
    /// * `Internal` - Database operation failed
    async fn exists_by_username(&self, username: &Username) -> Result<bool, DomainError>;

    /// Store a new password hash.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Internal` - Database operation failed
    async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), DomainError>;

    /// Remove user from storage, together with everything it owns.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `Internal` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}
