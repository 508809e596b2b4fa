pub mod delete_account;
pub mod update_password;
pub mod user_info;

pub use delete_account::delete_account;
pub use update_password::update_password;
pub use user_info::user_info;
