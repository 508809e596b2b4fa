pub mod cookies;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod policy;
pub mod router;
