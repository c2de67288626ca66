pub mod query;
pub mod user;

pub use query::ListOptions;
pub use user::{NewUser, PasswordState, User};
