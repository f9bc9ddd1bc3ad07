pub mod auth;
pub mod health;

pub use self::auth::model::ProfileResponse;
