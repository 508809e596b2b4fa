use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::auth::models::Principal;
use crate::domain::auth::passwords;
use crate::domain::errors::DomainError;
use crate::domain::user::models::Password;
use crate::domain::user::models::User;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service for operations a user performs on their own account.
///
/// Sensitive operations re-verify the password even though the caller already
/// holds a valid token.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Shared password hasher and token service
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn load(&self, principal: &Principal) -> Result<User, DomainError> {
        self.repository
            .find_by_id(&principal.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", principal.user_id))
    }

    async fn password_matches(&self, user: &User, password: String) -> Result<bool, DomainError> {
        passwords::verify_password(&self.authenticator, password, user.password_hash.clone()).await
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn user_info(&self, principal: &Principal) -> Result<User, DomainError> {
        self.load(principal).await
    }

    async fn update_password(
        &self,
        principal: &Principal,
        current_password: String,
        new_password: Password,
    ) -> Result<(), DomainError> {
        let user = self.load(principal).await?;

        if !self.password_matches(&user, current_password).await? {
            return Err(DomainError::Forbidden(
                "Current password is incorrect".to_string(),
            ));
        }

        let password_hash =
            passwords::hash_password(&self.authenticator, new_password.into_inner()).await?;

        self.repository
            .update_password(&user.id, &password_hash)
            .await?;

        tracing::info!(user_id = %user.id, "Password updated");

        Ok(())
    }

    async fn delete_account(
        &self,
        principal: &Principal,
        password: String,
    ) -> Result<(), DomainError> {
        let user = self.load(principal).await?;

        if !self.password_matches(&user, password).await? {
            return Err(DomainError::Forbidden("Password is incorrect".to_string()));
        }

        self.repository.delete(&user.id).await?;

        tracing::info!(user_id = %user.id, "Account deleted");

        Ok(())
    }
}
