use crate::config::Config;
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::time::Duration;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

fn set(key: &str, value: &str) {
    // SAFETY: every test touching the environment holds ENV_LOCK.
    unsafe { env::set_var(key, value) };
}

fn clear(key: &str) {
    // SAFETY: every test touching the environment holds ENV_LOCK.
    unsafe { env::remove_var(key) };
}

#[test]
fn test_config_overrides_from_env() {
    let _guard = get_env_lock().lock().unwrap();
    set("POLL_INTERVAL_SECS", "45");
    set("CACHE_TTL_SECS", "10");
    set("CLASSIFIER_THRESHOLD", "0.25");
    set("BLACKLIST_KEYWORDS", "Youth, Amateur ,");
    set("SHOTS_ALERT_ENABLED", "true");

    let config = Config::from_env().unwrap();

    assert_eq!(config.polling.poll_interval, Duration::from_secs(45));
    assert_eq!(config.fetcher.cache_ttl, Duration::from_secs(10));
    assert!((config.strategy.classifier_threshold - 0.25).abs() < 1e-9);
    assert_eq!(
        config.strategy.blacklist_keywords,
        Some(vec!["youth".to_string(), "amateur".to_string()])
    );
    assert!(config.strategy.shots_alert_enabled);

    // Cleanup
    for key in [
        "POLL_INTERVAL_SECS",
        "CACHE_TTL_SECS",
        "CLASSIFIER_THRESHOLD",
        "BLACKLIST_KEYWORDS",
        "SHOTS_ALERT_ENABLED",
    ] {
        clear(key);
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    for key in ["POLL_INTERVAL_SECS", "MIN_VOTES", "BOT_TOKEN", "CHAT_ID"] {
        clear(key);
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.polling.poll_interval, Duration::from_secs(120));
    assert_eq!(config.polling.max_signals_per_cycle, 1);
    assert_eq!(config.strategy.min_votes, 2);
    assert_eq!(config.strategy.min_training_samples, 10);
    assert!(!config.notifier.telegram_enabled());
}

#[test]
fn test_invalid_value_is_an_error() {
    let _guard = get_env_lock().lock().unwrap();
    set("FETCH_MAX_ATTEMPTS", "many");

    let result = Config::from_env();
    assert!(result.is_err());

    clear("FETCH_MAX_ATTEMPTS");
}
