use crate::core::credentials::PreparedUser;
use crate::core::errors::UserError;
use crate::core::models::user::User;
use async_trait::async_trait;
use uuid::Uuid;

/// Durable home of user records.
///
/// Writes take a [`PreparedUser`], so the password hook has already run by the time a record can
/// become visible to readers.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates a record and assigns it a fresh unique id.
    async fn insert(&self, user: PreparedUser) -> Result<User, UserError>;
    /// Overwrites an existing record. Fails with `UserNotFound` when the id is unknown.
    async fn replace(&self, user: PreparedUser) -> Result<User, UserError>;
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserError>;
    /// Records ordered by `created_at`, newest first, after skipping `skip` and keeping at most `limit`.
    async fn find_newest(&self, skip: usize, limit: usize) -> Result<Vec<User>, UserError>;
}

pub mod in_memory;
