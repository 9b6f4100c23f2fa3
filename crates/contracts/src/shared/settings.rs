//! User preferences edited on the settings screen

use crate::shared::config::ConsoleConfig;
use crate::shared::i18n::Language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Used as the `data-theme` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// On/off switches of the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    EmailNotifications,
    PushNotifications,
    AutomaticUpdates,
    Analytics,
}

impl Preference {
    pub fn all() -> [Preference; 4] {
        [
            Preference::EmailNotifications,
            Preference::PushNotifications,
            Preference::AutomaticUpdates,
            Preference::Analytics,
        ]
    }

    /// Translation key of the switch label
    pub fn label_key(&self) -> &'static str {
        match self {
            Preference::EmailNotifications => "emailNotifications",
            Preference::PushNotifications => "pushNotifications",
            Preference::AutomaticUpdates => "automaticUpdates",
            Preference::Analytics => "analytics",
        }
    }

    pub fn description_key(&self) -> &'static str {
        match self {
            Preference::EmailNotifications => "emailNotificationsDescription",
            Preference::PushNotifications => "pushNotificationsDescription",
            Preference::AutomaticUpdates => "automaticUpdatesDescription",
            Preference::Analytics => "analyticsDescription",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub theme: Theme,
    pub language: Language,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub automatic_updates: bool,
    pub analytics: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            language: Language::default(),
            email_notifications: true,
            push_notifications: false,
            automatic_updates: true,
            analytics: true,
        }
    }
}

impl AppSettings {
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self {
            theme: config.ui.default_theme,
            language: config.ui.default_language,
            ..Self::default()
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn get(&self, preference: Preference) -> bool {
        match preference {
            Preference::EmailNotifications => self.email_notifications,
            Preference::PushNotifications => self.push_notifications,
            Preference::AutomaticUpdates => self.automatic_updates,
            Preference::Analytics => self.analytics,
        }
    }

    pub fn set(&mut self, preference: Preference, enabled: bool) {
        let slot = match preference {
            Preference::EmailNotifications => &mut self.email_notifications,
            Preference::PushNotifications => &mut self.push_notifications,
            Preference::AutomaticUpdates => &mut self.automatic_updates,
            Preference::Analytics => &mut self.analytics,
        };
        *slot = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert!(!settings.is_dark());
        assert!(settings.get(Preference::EmailNotifications));
        assert!(!settings.get(Preference::PushNotifications));
        assert!(settings.get(Preference::AutomaticUpdates));
        assert!(settings.get(Preference::Analytics));
    }

    #[test]
    fn test_toggle_theme() {
        let mut settings = AppSettings::default();
        settings.toggle_theme();
        assert_eq!(settings.theme, Theme::Dark);
        settings.toggle_theme();
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_set_preference_only_touches_one_switch() {
        let mut settings = AppSettings::default();
        settings.set(Preference::PushNotifications, true);
        settings.set(Preference::Analytics, false);
        assert!(settings.push_notifications);
        assert!(!settings.analytics);
        assert!(settings.email_notifications);
        assert!(settings.automatic_updates);
    }

    #[test]
    fn test_from_config() {
        let mut config = ConsoleConfig::default();
        config.ui.default_language = Language::Zh;
        config.ui.default_theme = Theme::Dark;
        let settings = AppSettings::from_config(&config);
        assert_eq!(settings.language, Language::Zh);
        assert!(settings.is_dark());
        assert!(settings.email_notifications);
    }
}
