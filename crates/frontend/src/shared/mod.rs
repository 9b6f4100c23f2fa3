pub mod components;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod theme;
pub mod toast;
