pub mod followed;
pub mod user;

pub use followed::PostgresFollowedRepository;
pub use user::PostgresUserRepository;
