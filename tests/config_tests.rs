use basketball_training_bot::config::Config;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("BOT_TOKEN", "123456:test_token");
    env::set_var("GROUP_ID", "-1001234567890");
    env::set_var("FAIL_ON_SEND_ERROR", "true");

    let config = Config::from_env().unwrap();

    assert_eq!(config.bot_token, "123456:test_token");
    assert_eq!(config.group_id, -1001234567890);
    assert!(config.fail_on_send_error);

    // Clean up
    env::remove_var("BOT_TOKEN");
    env::remove_var("GROUP_ID");
    env::remove_var("FAIL_ON_SEND_ERROR");
}

#[test]
fn test_config_fail_on_send_error_defaults_to_false() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("BOT_TOKEN", "123456:test_token");
    env::set_var("GROUP_ID", "-4242");
    env::remove_var("FAIL_ON_SEND_ERROR");

    let config = Config::from_env().unwrap();

    assert_eq!(config.group_id, -4242);
    assert!(!config.fail_on_send_error);

    // Clean up
    env::remove_var("BOT_TOKEN");
    env::remove_var("GROUP_ID");
}

#[test]
fn test_config_missing_token() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::remove_var("BOT_TOKEN");
    env::set_var("GROUP_ID", "-4242");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("BOT_TOKEN must be set"));

    env::remove_var("GROUP_ID");
}

#[test]
fn test_config_empty_token_rejected() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("BOT_TOKEN", "   ");
    env::set_var("GROUP_ID", "-4242");

    let result = Config::from_env();
    assert!(result.is_err());

    env::remove_var("BOT_TOKEN");
    env::remove_var("GROUP_ID");
}

#[test]
fn test_config_missing_group_id() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("BOT_TOKEN", "123456:test_token");
    env::remove_var("GROUP_ID");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("GROUP_ID must be set"));

    env::remove_var("BOT_TOKEN");
}

#[test]
fn test_config_non_numeric_group_id() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("BOT_TOKEN", "123456:test_token");
    env::set_var("GROUP_ID", "not-a-number");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("GROUP_ID must be a number"));

    env::remove_var("BOT_TOKEN");
    env::remove_var("GROUP_ID");
}

#[test]
fn test_token_from_env_alone() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("BOT_TOKEN", "123456:discovery");
    env::remove_var("GROUP_ID");

    // The discovery tool needs only the token, not the full config.
    let token = Config::token_from_env().unwrap();
    assert_eq!(token, "123456:discovery");

    env::remove_var("BOT_TOKEN");
}
