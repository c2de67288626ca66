pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::config::{CONFIG, Config};
pub use crate::core::credentials::{PasswordHasher, PreparedUser, verify};
pub use crate::core::errors::{ErrorKind, FieldError, UserError};
pub use crate::core::models::{ListOptions, NewUser, PasswordState, User};
pub use crate::core::services::UserService;
pub use crate::core::validation::EmailPolicy;
pub use crate::infrastructure::storage::{UserStore, in_memory::InMemoryStorage};

#[cfg(test)]
mod tests;
