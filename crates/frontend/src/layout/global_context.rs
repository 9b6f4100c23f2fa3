use contracts::shared::config::ConsoleConfig;
use contracts::shared::i18n::{translate, Language, Translate};
use contracts::shared::settings::AppSettings;
use leptos::prelude::*;

/// Screens reachable from the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    Dashboard,
    MasterData,
    FieldManagement,
    Settings,
}

impl AppPage {
    pub fn all() -> [AppPage; 4] {
        [
            AppPage::Dashboard,
            AppPage::MasterData,
            AppPage::FieldManagement,
            AppPage::Settings,
        ]
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "dashboard",
            AppPage::MasterData => "masterData",
            AppPage::FieldManagement => "fieldManagement",
            AppPage::Settings => "settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AppPage::Dashboard => "layout-dashboard",
            AppPage::MasterData => "database",
            AppPage::FieldManagement => "list",
            AppPage::Settings => "settings",
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_page: RwSignal<AppPage>,
    pub settings: RwSignal<AppSettings>,
    pub left_open: RwSignal<bool>,
    /// Rows per page on the data-management screens
    pub page_size: usize,
}

impl AppGlobalContext {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            active_page: RwSignal::new(AppPage::default()),
            settings: RwSignal::new(AppSettings::from_config(config)),
            left_open: RwSignal::new(true),
            page_size: config.ui.page_size,
        }
    }

    /// Current language, tracked.
    pub fn language(&self) -> Language {
        self.settings.with(|s| s.language)
    }

    pub fn language_untracked(&self) -> Language {
        self.settings.with_untracked(|s| s.language)
    }

    pub fn set_language(&self, language: Language) {
        log::debug!("language switched to {}", language.as_str());
        self.settings.update(|s| s.language = language);
    }

    pub fn toggle_theme(&self) {
        self.settings.update(|s| s.toggle_theme());
    }

    pub fn open_page(&self, page: AppPage) {
        self.active_page.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

/// Reactive lookup: re-runs when the language changes.
impl Translate for AppGlobalContext {
    fn t(&self, key: &str) -> String {
        translate(self.language(), key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::i18n::Language;

    #[test]
    fn test_every_page_label_is_translated() {
        for page in AppPage::all() {
            for language in Language::all() {
                assert_ne!(
                    translate(language, page.label_key()),
                    page.label_key(),
                    "{:?} in {}",
                    page,
                    language.as_str()
                );
            }
        }
    }
}
