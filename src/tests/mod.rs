mod config_tests;

use crate::core::credentials::PasswordHasher;
use crate::core::models::user::User;
use crate::core::services::UserService;
use crate::core::validation::EmailPolicy;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

/// Lowest cost bcrypt accepts, to keep the suite fast.
pub const TEST_COST: u32 = 4;

pub fn create_test_service() -> UserService<InMemoryStorage> {
    let storage = InMemoryStorage::new();
    UserService::new(storage, PasswordHasher::new(TEST_COST), EmailPolicy::Optional)
}

pub fn sample_user(password: &str) -> User {
    User::new("Test User", "9876543210", "test@example.com", password)
}
