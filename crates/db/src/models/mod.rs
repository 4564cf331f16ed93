pub mod guest;
pub mod invitation;
pub mod user;
pub mod wish;

pub use guest::{Guest, RsvpStatus};
pub use invitation::Invitation;
pub use user::{Plan, User, UserRole};
pub use wish::Wish;
