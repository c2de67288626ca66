use crate::config::Config;
use crate::core::credentials::PasswordHasher;
use crate::core::errors::UserError;
use crate::core::models::{query::ListOptions, user::User};
use crate::core::validation::{self, EmailPolicy};
use crate::infrastructure::storage::UserStore;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Write path and lookups for user records.
///
/// Every write runs validation, then [`PasswordHasher::prepare_for_write`], then the store; a
/// failure at any step leaves the store untouched.
pub struct UserService<S: UserStore> {
    storage: S,
    hasher: PasswordHasher,
    email_policy: EmailPolicy,
}

impl<S: UserStore> UserService<S> {
    pub fn new(storage: S, hasher: PasswordHasher, email_policy: EmailPolicy) -> Self {
        UserService {
            storage,
            hasher,
            email_policy,
        }
    }

    pub fn from_config(storage: S, config: &Config) -> Self {
        let email_policy = if config.require_email {
            EmailPolicy::Required
        } else {
            EmailPolicy::Optional
        };
        UserService::new(storage, PasswordHasher::new(config.salt_work_factor), email_policy)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    pub async fn create(&self, user: User) -> Result<User, UserError> {
        if let Some(user_id) = user.id() {
            return Err(UserError::invalid_field(
                "id",
                "User already created",
                format!("User {} already exists; use update instead", user_id),
            ));
        }
        validation::validate_user(&user, self.email_policy).inspect_err(|e| {
            debug!(error = %e, "rejected new user");
        })?;
        let prepared = self.hasher.prepare_for_write(user).await?;
        let created = self.storage.insert(prepared).await?;
        info!(user_id = ?created.id(), username = %created.username, "user created");
        Ok(created)
    }

    pub async fn update(&self, user: User) -> Result<User, UserError> {
        let user_id = user.id().ok_or_else(|| {
            UserError::invalid_field(
                "id",
                "User not created",
                "Cannot update a user that was never created".to_string(),
            )
        })?;
        validation::validate_user(&user, self.email_policy).inspect_err(|e| {
            debug!(%user_id, error = %e, "rejected user update");
        })?;
        let password_changed = user.is_password_modified();
        let prepared = self.hasher.prepare_for_write(user).await?;
        let updated = self.storage.replace(prepared).await?;
        info!(%user_id, password_changed, "user updated");
        Ok(updated)
    }

    /// Creates the user when it has no id yet, updates it otherwise.
    pub async fn save(&self, user: User) -> Result<User, UserError> {
        match user.id() {
            Some(_) => self.update(user).await,
            None => self.create(user).await,
        }
    }

    pub async fn get(&self, user_id: Uuid) -> Result<User, UserError> {
        self.storage.find_by_id(user_id).await?.ok_or_else(|| {
            warn!(%user_id, "user lookup missed");
            UserError::UserNotFound(user_id)
        })
    }

    /// Users in descending order of `created_at`.
    pub async fn list(&self, options: ListOptions) -> Result<Vec<User>, UserError> {
        let users = self.storage.find_newest(options.skip, options.limit).await?;
        debug!(skip = options.skip, limit = options.limit, returned = users.len(), "listed users");
        Ok(users)
    }
}
