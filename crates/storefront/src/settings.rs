//! Session preferences.

use serde::{Deserialize, Serialize};
use tracing::debug;

use gourmet_core::Language;

/// User preferences for the current session. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub notifications_enabled: bool,
    pub language: Language,
    pub dark_theme: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notifications_enabled: true,
            language: Language::Spanish,
            dark_theme: false,
        }
    }
}

impl Settings {
    pub fn set_notifications(&mut self, enabled: bool) {
        debug!(enabled, "Notifications setting changed");
        self.notifications_enabled = enabled;
    }

    pub fn set_language(&mut self, language: Language) {
        debug!(%language, "Language setting changed");
        self.language = language;
    }

    pub fn set_dark_theme(&mut self, enabled: bool) {
        debug!(enabled, "Dark theme setting changed");
        self.dark_theme = enabled;
    }
}
