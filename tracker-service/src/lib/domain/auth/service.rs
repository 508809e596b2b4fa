use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use super::models::AccessToken;
use super::models::LoginCommand;
use super::models::Principal;
use super::models::RegisterCommand;
use super::passwords;
use super::ports::AuthServicePort;
use crate::domain::errors::DomainError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::Role;
use crate::domain::user::models::Username;
use crate::user::ports::UserRepository;

/// Domain service for login, registration and request-time token resolution.
///
/// Generic over the user store so tests can swap in a mock.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, command: LoginCommand) -> Result<AccessToken, DomainError> {
        let username =
            Username::new(command.username).map_err(|_| DomainError::InvalidCredentials)?;

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let stored_hash = user.password_hash.clone();
        let subject = user.username.as_str().to_string();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &subject)
        })
        .await
        .map_err(|e| DomainError::Internal(format!("Login task failed: {}", e)))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => DomainError::InvalidCredentials,
            other => DomainError::Internal(other.to_string()),
        })?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(result.into())
    }

    async fn register(&self, command: RegisterCommand) -> Result<AccessToken, DomainError> {
        // The store enforces uniqueness too; this only saves a hash on the common path.
        if self.repository.exists_by_username(&command.username).await? {
            return Err(DomainError::username_taken());
        }

        let password_hash =
            passwords::hash_password(&self.authenticator, command.password.into_inner()).await?;

        let user = self
            .repository
            .create(NewUser {
                username: command.username,
                password_hash,
                role: Role::User,
                created_at: Utc::now(),
            })
            .await?;

        let result = self
            .authenticator
            .issue_token(user.username.as_str())
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(result.into())
    }

    async fn authenticate_token(&self, token: &str) -> Result<Principal, DomainError> {
        let tokens = self.authenticator.tokens();

        let subject = tokens
            .subject_of(token)
            .map_err(|_| DomainError::Unauthorized)?;
        let username = Username::new(subject).map_err(|_| DomainError::Unauthorized)?;

        let user = self
            .repository
            .find_by_username(&username)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        if !tokens.is_valid(token, user.username.as_str()) {
            return Err(DomainError::Unauthorized);
        }

        Ok(Principal::from(&user))
    }
}
