use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::core::credentials::SALT_WORK_FACTOR;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    /// bcrypt cost used when hashing new passwords
    pub salt_work_factor: u32,
    /// Reject users with an empty email instead of treating the field as optional
    pub require_email: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            salt_work_factor: SALT_WORK_FACTOR,
            require_email: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();

        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            salt_work_factor: env::var("SALT_WORK_FACTOR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.salt_work_factor),
            require_email: env::var("REQUIRE_EMAIL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.require_email),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
