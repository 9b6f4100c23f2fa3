pub mod config;
pub mod i18n;
pub mod list;
pub mod settings;
