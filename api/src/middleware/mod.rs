pub mod auth;
pub mod cors;

pub use auth::CurrentUser;
