use async_trait::async_trait;

use crate::domain::auth::models::AccessToken;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::Principal;
use crate::domain::auth::models::RegisterCommand;
use crate::domain::errors::DomainError;

/// Port for authentication operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Verify credentials and issue a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password (indistinguishable)
    /// * `Internal` - Storage, hashing or signing failed
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, DomainError>;

    /// Create a user with role USER and issue a token for it.
    ///
    /// # Errors
    /// * `Conflict` - Username already exists
    /// * `Internal` - Storage, hashing or signing failed
    async fn register(&self, command: RegisterCommand) -> Result<AccessToken, DomainError>;

    /// Turn a presented bearer token into a principal.
    ///
    /// # Errors
    /// * `Unauthorized` - Token does not verify, has expired, or names no existing user
    /// * `Internal` - Storage failed while resolving the subject
    async fn authenticate_token(&self, token: &str) -> Result<Principal, DomainError>;
}
