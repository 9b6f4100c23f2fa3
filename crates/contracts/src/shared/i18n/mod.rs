//! Flat key lookup of user-facing labels.
//!
//! A key missing from the catalog of the active language resolves to the key
//! itself, so a lookup can never fail.

mod catalog;

use serde::{Deserialize, Serialize};

/// Languages offered by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Th,
    Ja,
    Zh,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Th => "th",
            Language::Ja => "ja",
            Language::Zh => "zh",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Th => "ไทย",
            Language::Ja => "日本語",
            Language::Zh => "中文",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::Th => "🇹🇭",
            Language::Ja => "🇯🇵",
            Language::Zh => "🇨🇳",
        }
    }

    pub fn all() -> [Language; 4] {
        [Language::En, Language::Th, Language::Ja, Language::Zh]
    }

    /// Accepts bare tags and region-qualified ones (`ja-JP`, `zh_CN`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let tag = normalized.split(['-', '_']).next().unwrap_or("");
        Language::all().into_iter().find(|l| l.as_str() == tag)
    }
}

/// Resolve `key` in `language`, echoing the key on a miss.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    match catalog::lookup(language, key) {
        Some(label) => label,
        None => {
            log::debug!("translation miss: {}:{}", language.as_str(), key);
            key
        }
    }
}

/// Anything that can turn a translation key into a label.
pub trait Translate {
    fn t(&self, key: &str) -> String;
}

impl Translate for Language {
    fn t(&self, key: &str) -> String {
        translate(*self, key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_per_language() {
        assert_eq!(translate(Language::En, "masterData"), "Master Data");
        assert_eq!(translate(Language::Th, "delete"), "ลบ");
        assert_eq!(translate(Language::Ja, "createSuccess"), "正常に作成されました");
        assert_eq!(translate(Language::Zh, "settings"), "设置");
    }

    #[test]
    fn test_miss_echoes_key() {
        assert_eq!(translate(Language::Ja, "noSuchLabel"), "noSuchLabel");
        assert_eq!(Language::Zh.t(""), "");
    }

    #[test]
    fn test_every_language_has_every_english_key() {
        for key in catalog::keys(Language::En) {
            for language in Language::all() {
                assert!(
                    catalog::lookup(language, key).is_some(),
                    "{} missing in {}",
                    key,
                    language.as_str()
                );
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Language::parse("th"), Some(Language::Th));
        assert_eq!(Language::parse("ja-JP"), Some(Language::Ja));
        assert_eq!(Language::parse(" ZH_cn "), Some(Language::Zh));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse(""), None);
    }
}
