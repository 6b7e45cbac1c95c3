//! Preference ports

use crate::domain::result::Result;
use crate::domain::{NetworkConfig, ThemeMode};

/// Application-wide settings: which backend serves wallet calls
///
/// Implementations must return the current value on every call; callers
/// rely on a changed setting taking effect on the next request.
pub trait AppPreferences: Send + Sync {
    fn network_config(&self) -> Result<NetworkConfig>;

    fn set_network_config(&self, config: &NetworkConfig) -> Result<()>;
}

/// Per-user display settings
pub trait UserPreferences: Send + Sync {
    /// Theme for a user, or the global theme when `user_id` is `None`
    fn theme_for_user(&self, user_id: Option<&str>) -> Result<ThemeMode>;

    fn set_theme_for_user(&self, user_id: Option<&str>, mode: ThemeMode) -> Result<()>;

    fn last_logged_email(&self) -> Result<Option<String>>;

    fn set_last_logged_email(&self, email: Option<&str>) -> Result<()>;
}
