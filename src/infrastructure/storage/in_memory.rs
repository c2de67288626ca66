use crate::core::credentials::PreparedUser;
use crate::core::errors::UserError;
use crate::core::models::user::User;
use crate::infrastructure::storage::UserStore;
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryStorage {
    async fn insert(&self, user: PreparedUser) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        let mut user_id = Uuid::new_v4();
        while users.contains_key(&user_id) {
            user_id = Uuid::new_v4();
        }
        let stored = user.persisted(user_id);
        users.insert(user_id, stored.clone());
        Ok(stored)
    }

    async fn replace(&self, user: PreparedUser) -> Result<User, UserError> {
        let user_id = user
            .user()
            .id()
            .ok_or_else(|| UserError::Storage("cannot replace a record without an id".to_string()))?;
        let mut users = self.users.write().await;
        if !users.contains_key(&user_id) {
            return Err(UserError::UserNotFound(user_id));
        }
        let stored = user.persisted(user_id);
        users.insert(user_id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).cloned())
    }

    async fn find_newest(&self, skip: usize, limit: usize) -> Result<Vec<User>, UserError> {
        let users = self.users.read().await;
        let mut sorted: Vec<&User> = users.values().collect();
        // Same-instant records fall back to id order so pages stay stable.
        sorted.sort_by_key(|u| (Reverse(u.created_at()), u.id()));
        Ok(sorted.into_iter().skip(skip).take(limit).cloned().collect())
    }
}
