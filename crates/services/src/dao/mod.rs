pub mod base;
pub mod guest;
pub mod invitation;
pub mod user;
pub mod wish;

pub use base::BaseDao;
