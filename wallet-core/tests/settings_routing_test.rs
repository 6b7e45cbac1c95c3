//! Settings persistence and backend routing through `WalletContext`
//!
//! Run with: cargo test --test settings_routing_test -- --nocapture

use std::net::TcpListener;

use tempfile::TempDir;

use wallet_core::adapters::fake_auth::{DEMO_EMAIL, DEMO_PASSWORD};
use wallet_core::config::Config;
use wallet_core::{Error, ThemeMode, WalletContext, WalletRepository};

/// Base URL of a port nobody listens on
fn unreachable_base_url() -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    format!("http://127.0.0.1:{}/", port)
}

#[test]
fn test_session_survives_new_context() {
    let temp_dir = TempDir::new().unwrap();
    {
        let ctx = WalletContext::new(temp_dir.path()).unwrap();
        ctx.auth_service.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    }

    let ctx = WalletContext::new(temp_dir.path()).unwrap();
    let session = ctx.auth_service.current_session().unwrap().unwrap();
    assert_eq!(session.user.id, "1");
    assert_eq!(
        ctx.auth_service.last_logged_email().unwrap().as_deref(),
        Some(DEMO_EMAIL)
    );
    // Balances are per process: a new context starts from the fixtures
    assert_eq!(
        ctx.wallet.get_account_summary().unwrap().balance_in_cents,
        100_000
    );
}

#[test]
fn test_remote_toggle_takes_effect_on_next_call() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = WalletContext::new(temp_dir.path()).unwrap();
    ctx.auth_service.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    ctx.wallet.transfer("acc2", 2_500).unwrap();

    ctx.set_base_url(&unreachable_base_url()).unwrap();
    ctx.set_use_remote(true).unwrap();
    match ctx.wallet.get_account_summary() {
        Err(Error::Transport(msg)) => assert_eq!(msg, "unable to connect to the wallet server"),
        other => panic!("expected Transport, got {:?}", other),
    }
    assert!(ctx.wallet.transfer("acc2", 100).unwrap_err().is_retryable());

    ctx.set_use_remote(false).unwrap();
    assert_eq!(
        ctx.wallet.get_account_summary().unwrap().balance_in_cents,
        97_500
    );
}

#[test]
fn test_remote_validation_runs_before_network() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = WalletContext::new(temp_dir.path()).unwrap();
    ctx.auth_service.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    ctx.set_base_url(&unreachable_base_url()).unwrap();
    ctx.set_use_remote(true).unwrap();

    assert!(matches!(ctx.wallet.transfer("acc2", 0), Err(Error::InvalidAmount)));
    assert!(matches!(ctx.wallet.transfer("self-1", 100), Err(Error::SelfTransfer)));
}

#[test]
fn test_own_account_id_is_self_transfer_on_every_path() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = WalletContext::new(temp_dir.path()).unwrap();
    ctx.auth_service.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();

    assert!(matches!(ctx.wallet.transfer("acc1", 100), Err(Error::SelfTransfer)));
    assert!(matches!(
        ctx.transfer_service.confirm("acc1", 100),
        Err(Error::SelfTransfer)
    ));
    assert_eq!(
        ctx.wallet.get_account_summary().unwrap().balance_in_cents,
        100_000
    );

    // Remote needs the server to tell its own account from an unknown id
    ctx.set_base_url(&unreachable_base_url()).unwrap();
    ctx.set_use_remote(true).unwrap();
    let err = ctx.transfer_service.confirm("acc1", 100).unwrap_err();
    assert!(err.is_retryable());
    assert!(!matches!(err, Error::InvalidContact));
}

#[test]
fn test_settings_file_edit_is_picked_up() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = WalletContext::new(temp_dir.path()).unwrap();
    assert!(!ctx.network_config().unwrap().use_remote_server);

    // Another process flips the backend
    std::fs::write(
        Config::settings_path(temp_dir.path()),
        r#"{"network":{"useRemoteServer":true,"baseUrl":"http://10.0.2.2:3000/"}}"#,
    )
    .unwrap();

    let config = ctx.network_config().unwrap();
    assert!(config.use_remote_server);
    assert_eq!(config.base_url, "http://10.0.2.2:3000/");
    assert_eq!(config.backend_name(), "remote");
}

#[test]
fn test_base_url_is_validated_and_normalised() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = WalletContext::new(temp_dir.path()).unwrap();

    let config = ctx.set_base_url("http://192.168.0.10:3000").unwrap();
    assert_eq!(config.base_url, "http://192.168.0.10:3000/");

    assert!(matches!(
        ctx.set_base_url("ftp://example.com"),
        Err(Error::Config(_))
    ));
    assert_eq!(
        ctx.network_config().unwrap().base_url,
        "http://192.168.0.10:3000/"
    );
}

#[test]
fn test_theme_follows_logged_in_user() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = WalletContext::new(temp_dir.path()).unwrap();

    ctx.set_theme(ThemeMode::Light).unwrap();
    ctx.auth_service.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    assert_eq!(ctx.theme().unwrap(), ThemeMode::System);

    ctx.set_theme(ThemeMode::Dark).unwrap();
    assert_eq!(ctx.theme().unwrap(), ThemeMode::Dark);

    ctx.auth_service.logout().unwrap();
    assert_eq!(ctx.theme().unwrap(), ThemeMode::Light);
}

#[test]
fn test_unknown_settings_survive_writes() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        Config::settings_path(temp_dir.path()),
        r#"{"network":{"useRemoteServer":false},"android":{"notifications":true}}"#,
    )
    .unwrap();

    let ctx = WalletContext::new(temp_dir.path()).unwrap();
    ctx.auth_service.login(DEMO_EMAIL, DEMO_PASSWORD).unwrap();
    ctx.set_use_remote(true).unwrap();

    let content = std::fs::read_to_string(Config::settings_path(temp_dir.path())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["android"]["notifications"], true);
    assert_eq!(value["network"]["useRemoteServer"], true);
    assert_eq!(value["session"]["user"]["id"], "1");
}
