pub mod models;
pub(crate) mod passwords;
pub mod ports;
pub mod service;
