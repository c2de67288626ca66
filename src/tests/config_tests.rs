use crate::config::{CONFIG, Config};
use crate::core::credentials::SALT_WORK_FACTOR;
use crate::infrastructure::logging::init_tracing;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.log_level, "info");
    assert_eq!(config.salt_work_factor, SALT_WORK_FACTOR);
    assert!(!config.require_email);
}

#[test]
fn test_global_config_matches_environment() {
    assert_eq!(*CONFIG, Config::from_env());
}

#[test]
fn test_init_tracing_only_installs_once() {
    assert!(init_tracing("debug").is_ok());
    assert!(init_tracing("debug").is_err());
}
