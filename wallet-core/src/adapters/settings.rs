//! Preferences and session persisted in `settings.json`
//!
//! Every call loads the file again, so edits made by another process (or by
//! `wallet settings`) are seen on the next call.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::result::{Error, Result};
use crate::domain::{NetworkConfig, Session, ThemeMode};
use crate::ports::{AppPreferences, AuthStorage, UserPreferences};

pub struct SettingsStore {
    wallet_dir: PathBuf,
}

impl SettingsStore {
    pub fn new(wallet_dir: &Path) -> Self {
        Self {
            wallet_dir: wallet_dir.to_path_buf(),
        }
    }

    pub fn wallet_dir(&self) -> &Path {
        &self.wallet_dir
    }

    fn load(&self) -> Result<Config> {
        Config::load(&self.wallet_dir).map_err(|e| Error::Config(e.to_string()))
    }

    /// Choose the backend, persisting the choice even under an env override
    pub fn set_use_remote_server(&self, use_remote: bool) -> Result<NetworkConfig> {
        self.update(|config| config.set_use_remote_server(use_remote))?;
        self.network_config()
    }

    /// Set the server base URL, persisting it even under an env override
    pub fn set_base_url(&self, base_url: &str) -> Result<NetworkConfig> {
        self.update(|config| config.set_base_url(base_url))?;
        self.network_config()
    }

    fn update(&self, apply: impl FnOnce(&mut Config)) -> Result<()> {
        let mut config = self.load()?;
        apply(&mut config);
        config
            .save(&self.wallet_dir)
            .map_err(|e| Error::Config(e.to_string()))
    }
}

impl AppPreferences for SettingsStore {
    fn network_config(&self) -> Result<NetworkConfig> {
        Ok(self.load()?.network)
    }

    fn set_network_config(&self, network: &NetworkConfig) -> Result<()> {
        self.update(|config| config.set_network(network))
    }
}

impl UserPreferences for SettingsStore {
    fn theme_for_user(&self, user_id: Option<&str>) -> Result<ThemeMode> {
        Ok(self
            .load()?
            .themes
            .get(&Config::theme_key(user_id))
            .copied()
            .unwrap_or_default())
    }

    fn set_theme_for_user(&self, user_id: Option<&str>, mode: ThemeMode) -> Result<()> {
        self.update(|config| {
            config.themes.insert(Config::theme_key(user_id), mode);
        })
    }

    fn last_logged_email(&self) -> Result<Option<String>> {
        Ok(self.load()?.last_logged_email)
    }

    fn set_last_logged_email(&self, email: Option<&str>) -> Result<()> {
        self.update(|config| config.last_logged_email = email.map(str::to_string))
    }
}

impl AuthStorage for SettingsStore {
    fn save_session(&self, session: &Session) -> Result<()> {
        self.update(|config| config.session = Some(session.clone()))
    }

    fn load_session(&self) -> Result<Option<Session>> {
        Ok(self.load()?.session)
    }

    fn clear_session(&self) -> Result<()> {
        self.update(|config| config.session = None)
    }
}
