pub mod admin;
pub mod auth;
pub mod invitation;
pub mod profile;
pub mod public;
pub mod rsvp;
pub mod template;
pub mod upload;
pub mod wish;
