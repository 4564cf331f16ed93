pub mod auth;
pub mod dao;
pub mod draft;
pub mod slug;
pub mod templates;

pub use auth::AuthService;
pub use dao::*;
