use axum::http::HeaderName;
use axum::http::HeaderValue;

use super::ApiSuccess;
use super::MessageData;

pub mod login;
pub mod logout;
pub mod register;

pub use login::login;
pub use logout::logout;
pub use register::register;

/// Acknowledgement that also sets or clears the token cookie.
pub type CookieResponse = ([(HeaderName, HeaderValue); 1], ApiSuccess<MessageData>);
