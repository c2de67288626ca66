//! Password hashing before writes and verification on demand.
//!
//! Hashes are bcrypt strings (`$2b$<cost>$<salt><digest>`), so the salt and cost needed for
//! verification travel with the stored value. Both directions are CPU bound and run on tokio's
//! blocking pool.

use tokio::task;
use tracing::{debug, error};

use crate::core::errors::UserError;
use crate::core::models::user::User;

pub const SALT_WORK_FACTOR: u32 = 10;
/// bcrypt only reads this many bytes of input; anything longer would be cut silently.
pub const MAX_PASSWORD_BYTES: usize = 72;

pub(crate) fn password_too_long(password: &str) -> UserError {
    UserError::invalid_field(
        "password",
        "Password too long",
        format!(
            "Path `password` is {} bytes long; at most {} bytes are allowed.",
            password.len(),
            MAX_PASSWORD_BYTES
        ),
    )
}

/// A user whose password has gone through [`PasswordHasher::prepare_for_write`].
///
/// Stores only accept this type, so nothing reaches them with a pending plaintext.
#[derive(Clone, Debug)]
pub struct PreparedUser(User);

impl PreparedUser {
    pub fn user(&self) -> &User {
        &self.0
    }

    /// Finishes a write: the returned record carries `id` and reads as persisted.
    pub fn persisted(self, id: uuid::Uuid) -> User {
        let mut user = self.0;
        user.assign_id(id);
        user
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        PasswordHasher::new(SALT_WORK_FACTOR)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        PasswordHasher { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes `plaintext` with a freshly generated salt. Plaintexts over [`MAX_PASSWORD_BYTES`]
    /// are rejected rather than truncated.
    pub async fn hash(&self, plaintext: String) -> Result<String, UserError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(password_too_long(&plaintext));
        }
        let cost = self.cost;
        task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| {
                error!(error = %e, "password hashing task failed");
                UserError::Credential(format!("Password hashing task failed: {}", e))
            })?
            .map_err(|e| {
                error!(error = %e, cost, "password hashing failed");
                UserError::Credential(format!("Password hashing error: {}", e))
            })
    }

    /// Replaces a modified password with its hash. Records whose password was not touched since
    /// they were loaded pass through unchanged.
    pub async fn prepare_for_write(&self, mut user: User) -> Result<PreparedUser, UserError> {
        if !user.is_password_modified() {
            return Ok(PreparedUser(user));
        }
        debug!(user_id = ?user.id(), cost = self.cost, "hashing modified password");
        let hash = self.hash(user.password().to_string()).await?;
        user.replace_with_hash(hash);
        Ok(PreparedUser(user))
    }
}

/// Checks `candidate` against a stored bcrypt hash. A malformed hash is an error, not a mismatch.
///
/// A candidate over [`MAX_PASSWORD_BYTES`] never matches, since [`PasswordHasher::hash`] refuses
/// such inputs and bcrypt would otherwise compare only its first 72 bytes.
pub async fn verify(candidate: &str, stored_hash: &str) -> Result<bool, UserError> {
    if candidate.len() > MAX_PASSWORD_BYTES {
        debug!(bytes = candidate.len(), "candidate password exceeds bcrypt input limit");
        return Ok(false);
    }
    let candidate = candidate.to_string();
    let stored_hash = stored_hash.to_string();
    task::spawn_blocking(move || bcrypt::verify(candidate, &stored_hash))
        .await
        .map_err(|e| {
            error!(error = %e, "password verification task failed");
            UserError::Credential(format!("Password verification task failed: {}", e))
        })?
        .map_err(|e| {
            error!(error = %e, "password verification failed");
            UserError::Credential(format!("Password verification error: {}", e))
        })
}
