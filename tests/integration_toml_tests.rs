//! Integration tests for the TOML configuration system
//!
//! These tests verify configuration loading from disk, validation, and
//! reloading through the configuration manager.

use softsell::utils::toml_config::{
    ConfigError, ConfigWarningKind, ProviderKind, SoftSellConfig, SoftSellConfigManager,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test helper: write a config file into a fresh temporary directory
fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("softsell.toml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_empty_file_uses_defaults() {
    let (_dir, path) = write_config("");

    let config = SoftSellConfig::load(&path).unwrap();

    assert_eq!(config.bind_address(), "127.0.0.1:3000");
    assert_eq!(config.assistant.provider, ProviderKind::Gemini);
    assert_eq!(config.assistant.model(), "gemini-1.5-flash");
    assert_eq!(config.assistant.api_key_env(), "GEMINI_API_KEY");
    assert_eq!(config.assistant.temperature, 0.7);
    assert_eq!(
        config.assistant.fallback_reply,
        "Sorry, something went wrong. Please try again or contact support."
    );
}

#[test]
fn test_full_file_is_loaded() {
    let (_dir, path) = write_config(
        r#"
[server]
host = "0.0.0.0"
port = 8080
log_level = "debug"
cors_origins = ["https://softsell.com"]

[assistant]
provider = "openai"
model = "gpt-4o-mini"
api_key_env = "SOFTSELL_TOML_TEST_OPENAI"
temperature = 0.2
max_tokens = 400
timeout_secs = 10
system_prompt = "Be brief."
fallback_reply = "Try again later."
"#,
    );

    let config = SoftSellConfig::load(&path).unwrap();

    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.server.cors_origins, vec!["https://softsell.com"]);
    assert_eq!(config.assistant.provider, ProviderKind::OpenAI);
    assert_eq!(config.assistant.model(), "gpt-4o-mini");
    assert_eq!(config.assistant.api_base(), "https://api.openai.com/v1");
    assert_eq!(config.assistant.max_tokens, Some(400));
    assert_eq!(config.assistant.timeout().as_secs(), 10);
    assert_eq!(config.assistant.system_prompt, "Be brief.");
}

#[test]
fn test_missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = SoftSellConfig::load(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn test_syntax_error_is_reported() {
    let (_dir, path) = write_config("[server\nport = 1");
    let err = SoftSellConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn test_unknown_provider_is_rejected() {
    let (_dir, path) = write_config("[assistant]\nprovider = \"ollama\"\n");
    assert!(matches!(
        SoftSellConfig::load(&path).unwrap_err(),
        ConfigError::ParseError(_)
    ));
}

#[test]
fn test_out_of_range_temperature_is_rejected() {
    let (_dir, path) = write_config("[assistant]\ntemperature = 3.5\n");
    let err = SoftSellConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert!(err.to_string().contains("temperature"));
}

#[test]
fn test_warnings_for_missing_key_and_open_cors() {
    let (_dir, path) =
        write_config("[assistant]\napi_key_env = \"SOFTSELL_TOML_TEST_NEVER_SET\"\n");

    let warnings = SoftSellConfig::load(&path)
        .unwrap()
        .validate_with_warnings()
        .unwrap();

    assert!(
        warnings
            .iter()
            .any(|w| w.kind == ConfigWarningKind::MissingApiKey
                && w.message.contains("SOFTSELL_TOML_TEST_NEVER_SET"))
    );
    assert!(
        warnings
            .iter()
            .any(|w| w.kind == ConfigWarningKind::PermissiveCors)
    );
}

#[test]
fn test_manager_reload_picks_up_changes() {
    let (_dir, path) = write_config("[assistant]\nfallback_reply = \"first\"\n");
    let manager = SoftSellConfigManager::new(&path).unwrap();
    assert_eq!(manager.config().assistant.fallback_reply, "first");

    fs::write(&path, "[assistant]\nfallback_reply = \"second\"\n").unwrap();
    manager.reload().unwrap();

    assert_eq!(manager.config().assistant.fallback_reply, "second");
}

#[test]
fn test_manager_keeps_previous_config_on_invalid_reload() {
    let (_dir, path) = write_config("[server]\nport = 4000\n");
    let manager = SoftSellConfigManager::new(&path).unwrap();

    fs::write(&path, "[assistant]\ntimeout_secs = 0\n").unwrap();
    assert!(manager.reload().is_err());

    assert_eq!(manager.config().server.port, 4000);
}

#[test]
fn test_manager_clones_share_config() {
    let (_dir, path) = write_config("[server]\nport = 4000\n");
    let manager = SoftSellConfigManager::new(&path).unwrap();
    let clone = manager.clone();

    fs::write(&path, "[server]\nport = 5000\n").unwrap();
    manager.reload().unwrap();

    assert_eq!(clone.config().server.port, 5000);
    assert_eq!(clone.path(), manager.path());
}

#[tokio::test]
async fn test_manager_hot_reloads_on_file_change() {
    let (_dir, path) = write_config("[server]\nport = 4000\n");
    let mut manager = SoftSellConfigManager::new(&path).unwrap();
    manager.start_watching().unwrap();

    // Give the watcher a moment to register
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    fs::write(&path, "[server]\nport = 4100\n").unwrap();

    let mut port = manager.config().server.port;
    for _ in 0..50 {
        if port == 4100 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        port = manager.config().server.port;
    }

    manager.stop_watching();
    assert_eq!(port, 4100);
}
