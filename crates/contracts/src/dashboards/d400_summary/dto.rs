use serde::{Deserialize, Serialize};

/// Summary card on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    /// Translation key of the card title
    pub title_key: String,
    /// Pre-formatted value
    pub value: String,
    /// Translation key of the caption under the value
    pub description_key: String,
    /// Icon name from the frontend icon set
    pub icon: String,
}

/// Tile of the "quick actions" block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub title_key: String,
    pub description_key: String,
}

fn card(title_key: &str, value: &str, description_key: &str, icon: &str) -> SummaryCard {
    SummaryCard {
        title_key: title_key.to_string(),
        value: value.to_string(),
        description_key: description_key.to_string(),
        icon: icon.to_string(),
    }
}

fn action(title_key: &str, description_key: &str) -> QuickAction {
    QuickAction {
        title_key: title_key.to_string(),
        description_key: description_key.to_string(),
    }
}

/// Fixed figures shown on the dashboard
pub fn summary_cards() -> Vec<SummaryCard> {
    vec![
        card("masterData", "1,234", "totalRecords", "file-text"),
        card("users", "56", "activeUsers", "layout-dashboard"),
        card("settings", "12", "configurations", "settings"),
    ]
}

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        action("create", "addRecords"),
        action("search", "findData"),
        action("update", "modifyRecords"),
        action("delete", "removeData"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::{translate, Language};

    #[test]
    fn test_every_key_is_translated() {
        let keys = summary_cards()
            .into_iter()
            .flat_map(|c| [c.title_key, c.description_key])
            .chain(
                quick_actions()
                    .into_iter()
                    .flat_map(|a| [a.title_key, a.description_key]),
            );
        for key in keys {
            assert_ne!(translate(Language::Th, &key), key.as_str(), "{}", key);
        }
    }
}
