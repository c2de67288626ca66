use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::credentials;
use crate::core::errors::UserError;

/// Where the `password` field sits in its lifecycle.
///
/// A record starts out `PlaintextPending`. Hashing before a write moves it to `Hashed`; any later
/// [`User::set_password`] puts it back to `PlaintextPending` for the new value. Records read back
/// from a store are always `Hashed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordState {
    PlaintextPending,
    Hashed,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: Option<Uuid>,
    pub username: String,
    pub mobile_number: String,
    pub email: String,
    #[serde(skip_serializing)]
    password: String,
    #[serde(skip_serializing)]
    password_state: PasswordState,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        mobile_number: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        User {
            id: None,
            username: username.into(),
            mobile_number: mobile_number.into(),
            email: email.into(),
            password: password.into(),
            password_state: PasswordState::PlaintextPending,
            created_at: Utc::now(),
        }
    }

    /// Overrides the creation timestamp, which otherwise defaults to construction time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// `None` until a store has created the record.
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current value of the password field: the bcrypt hash once the record has been written,
    /// the pending plaintext before that.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_state(&self) -> PasswordState {
        self.password_state
    }

    pub fn is_password_modified(&self) -> bool {
        self.password_state == PasswordState::PlaintextPending
    }

    /// Replaces the password with a new plaintext. The next write hashes it, whatever it looks like.
    pub fn set_password(&mut self, plaintext: impl Into<String>) {
        self.password = plaintext.into();
        self.password_state = PasswordState::PlaintextPending;
    }

    /// Checks `candidate` against the stored hash.
    pub async fn compare_password(&self, candidate: &str) -> Result<bool, UserError> {
        if self.is_password_modified() {
            return Err(UserError::Credential(
                "password has not been hashed yet".to_string(),
            ));
        }
        credentials::verify(candidate, &self.password).await
    }

    pub(crate) fn replace_with_hash(&mut self, hash: String) {
        self.password = hash;
        self.password_state = PasswordState::Hashed;
    }

    pub(crate) fn assign_id(&mut self, id: Uuid) {
        self.id = Some(id);
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("mobile_number", &self.mobile_number)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("password_state", &self.password_state)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Creation payload, e.g. a decoded request body.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub mobile_number: String,
    #[serde(default)]
    pub email: String,
    pub password: String,
}

impl From<NewUser> for User {
    fn from(new_user: NewUser) -> Self {
        User::new(
            new_user.username,
            new_user.mobile_number,
            new_user.email,
            new_user.password,
        )
    }
}
