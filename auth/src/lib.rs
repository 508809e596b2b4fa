//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the service:
//! - Password hashing (Argon2id)
//! - HS256 JWT encoding and validation
//! - Token issuance, parsing and expiry checks
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_cost(8, 1, 1).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let token = tokens.issue("alice").unwrap();
//! assert!(tokens.is_valid(&token, "alice"));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher, TokenService};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     PasswordHasher::with_cost(8, 1, 1).unwrap(),
//!     TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)),
//! );
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, "alice").unwrap();
//!
//! // Validate token
//! assert_eq!(auth.tokens().subject_of(&result.access_token).unwrap(), "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenError;
pub use token::TokenService;
