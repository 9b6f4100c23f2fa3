//! Applies the selected colour theme to the document.

use contracts::shared::settings::Theme;
use web_sys::window;

/// Sets the `data-theme` attribute on body; stylesheets key off it.
pub fn apply_theme(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
    // dark variants of the stylesheet are scoped under `html.dark`
    if let Some(root) = document.document_element() {
        let _ = root.class_list().toggle_with_force("dark", theme == Theme::Dark);
    }
    log::debug!("theme applied: {}", theme.as_str());
}
