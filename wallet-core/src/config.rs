//! Configuration management
//!
//! Settings live in `settings.json` inside the wallet directory:
//! ```json
//! {
//!   "network": { "useRemoteServer": false, "baseUrl": "http://127.0.0.1:3000/" },
//!   "session": { "token": "...", "user": { "id": "1", "name": "...", "email": "..." } },
//!   "preferences": { "themes": { "theme_user_1": "dark" }, "lastLoggedEmail": "..." }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::{NetworkConfig, Session, ThemeMode};

pub const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    network: NetworkSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    session: Option<Session>,
    #[serde(default)]
    preferences: PreferenceSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NetworkSettings {
    #[serde(flatten)]
    config: NetworkConfig,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreferenceSettings {
    #[serde(default)]
    themes: HashMap<String, ThemeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_logged_email: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Wallet configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub network: NetworkConfig,
    pub session: Option<Session>,
    pub themes: HashMap<String, ThemeMode>,
    pub last_logged_email: Option<String>,
    // Effective network config at load time, to tell env overrides apart
    // from caller changes when saving
    loaded_network: NetworkConfig,
    // Network fields set explicitly since load. These are written even when
    // they equal an environment override.
    use_remote_set: bool,
    base_url_set: bool,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            session: None,
            themes: HashMap::new(),
            last_logged_email: None,
            loaded_network: NetworkConfig::default(),
            use_remote_set: false,
            base_url_set: false,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Path of the settings file inside a wallet directory
    pub fn settings_path(wallet_dir: &Path) -> PathBuf {
        wallet_dir.join(SETTINGS_FILE)
    }

    /// Load config from the wallet directory
    ///
    /// The backend can be forced via environment (for CI/testing):
    /// 1. `WALLET_USE_REMOTE` - true/false
    /// 2. `WALLET_BASE_URL` - server base URL
    pub fn load(wallet_dir: &Path) -> Result<Self> {
        let raw = Self::read_raw(wallet_dir)?;

        let mut network = raw.network.config.clone();
        match std::env::var("WALLET_USE_REMOTE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => network.use_remote_server = true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => network.use_remote_server = false,
            _ => {}
        }
        if let Ok(url) = std::env::var("WALLET_BASE_URL") {
            if !url.trim().is_empty() {
                network.base_url = url;
            }
        }

        Ok(Self {
            loaded_network: network.clone(),
            network,
            use_remote_set: false,
            base_url_set: false,
            session: raw.session.clone(),
            themes: raw.preferences.themes.clone(),
            last_logged_email: raw.preferences.last_logged_email.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the wallet directory
    /// Preserves other settings that the wallet doesn't manage
    pub fn save(&self, wallet_dir: &Path) -> Result<()> {
        // Load existing settings to preserve fields we don't manage
        let mut settings = Self::read_raw(wallet_dir)?;

        // Environment overrides are never written back
        let file_network = &mut settings.network.config;
        if self.use_remote_set
            || self.network.use_remote_server != self.loaded_network.use_remote_server
        {
            file_network.use_remote_server = self.network.use_remote_server;
        }
        if self.base_url_set || self.network.base_url != self.loaded_network.base_url {
            file_network.base_url = self.network.base_url.clone();
        }
        settings.session = self.session.clone();
        settings.preferences.themes = self.themes.clone();
        settings.preferences.last_logged_email = self.last_logged_email.clone();

        std::fs::create_dir_all(wallet_dir)?;
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(Self::settings_path(wallet_dir), content)?;
        Ok(())
    }

    fn read_raw(wallet_dir: &Path) -> Result<SettingsFile> {
        let settings_path = Self::settings_path(wallet_dir);
        if !settings_path.exists() {
            return Ok(SettingsFile::default());
        }
        let content = std::fs::read_to_string(&settings_path)?;
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    /// Choose the backend; persisted on save even under `WALLET_USE_REMOTE`
    pub fn set_use_remote_server(&mut self, use_remote: bool) {
        self.network.use_remote_server = use_remote;
        self.use_remote_set = true;
    }

    /// Set the server base URL; persisted on save even under `WALLET_BASE_URL`
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.network.base_url = base_url.into();
        self.base_url_set = true;
    }

    /// Apply a whole network config, marking only the fields that change
    pub fn set_network(&mut self, network: &NetworkConfig) {
        if network.use_remote_server != self.network.use_remote_server {
            self.set_use_remote_server(network.use_remote_server);
        }
        if network.base_url != self.network.base_url {
            self.set_base_url(network.base_url.clone());
        }
    }

    /// Preference key for a user's theme
    pub fn theme_key(user_id: Option<&str>) -> String {
        match user_id {
            Some(id) => format!("theme_user_{}", id),
            None => "theme_global".to_string(),
        }
    }
}
