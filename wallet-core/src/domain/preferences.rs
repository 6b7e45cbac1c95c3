//! Preference models: backend routing and display theme

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Base URL used when none has been configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000/";

/// Where wallet and authorization calls are served from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    #[serde(default)]
    pub use_remote_server: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            use_remote_server: false,
            base_url: default_base_url(),
        }
    }
}

impl NetworkConfig {
    pub fn local() -> Self {
        Self::default()
    }

    pub fn remote(base_url: impl Into<String>) -> Self {
        Self {
            use_remote_server: true,
            base_url: base_url.into(),
        }
    }

    /// Short label for the active backend
    pub fn backend_name(&self) -> &'static str {
        if self.use_remote_server {
            "remote"
        } else {
            "local"
        }
    }
}

/// Display theme, stored per user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(ThemeMode::System),
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}
