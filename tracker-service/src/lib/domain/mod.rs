pub mod auth;
pub mod errors;
pub mod followed;
pub mod user;
