use std::sync::Arc;

use auth::Authenticator;

use crate::domain::errors::DomainError;

// Argon2 is CPU-bound for tens of milliseconds; keep it off the async workers.

/// Hash `password` on the blocking pool.
pub(crate) async fn hash_password(
    authenticator: &Arc<Authenticator>,
    password: String,
) -> Result<String, DomainError> {
    let authenticator = Arc::clone(authenticator);

    tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
        .await
        .map_err(|e| DomainError::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| DomainError::Internal(e.to_string()))
}

/// Verify `password` against `stored_hash` on the blocking pool.
pub(crate) async fn verify_password(
    authenticator: &Arc<Authenticator>,
    password: String,
    stored_hash: String,
) -> Result<bool, DomainError> {
    let authenticator = Arc::clone(authenticator);

    tokio::task::spawn_blocking(move || authenticator.verify_password(&password, &stored_hash))
        .await
        .map_err(|e| DomainError::Internal(format!("Password verification task failed: {}", e)))?
        .map_err(|e| DomainError::Internal(e.to_string()))
}
