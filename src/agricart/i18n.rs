//! # Localization
//!
//! The storefront ships two locales, Brazilian Portuguese (the default) and English.
//! Tables are nested JSON documents embedded at compile time and addressed with
//! dotted keys: `"products.filters.sortBy"`.
//!
//! Lookup never fails. A key missing from the active locale is looked up in the other
//! one (and a warning logged); a key missing from both comes back unchanged, so a
//! gap in the tables shows up as the raw key in the UI instead of an error.

use crate::error::CatalogError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

static PT_BR: Lazy<Value> = Lazy::new(|| parse_table(include_str!("locales/pt-BR.json")));
static EN: Lazy<Value> = Lazy::new(|| parse_table(include_str!("locales/en.json")));

fn parse_table(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        warn!(error = %e, "embedded translation table is not valid JSON");
        Value::Null
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::PtBr => "pt-BR",
            Language::En => "en",
        }
    }

    pub fn other(&self) -> Language {
        match self {
            Language::PtBr => Language::En,
            Language::En => Language::PtBr,
        }
    }

    /// Pick a locale from an environment tag such as `en_US.UTF-8`.
    ///
    /// Only English tags select English; everything else, including an absent tag,
    /// falls back to Portuguese.
    pub fn detect(tag: Option<&str>) -> Language {
        match tag {
            Some(tag) if tag.to_lowercase().starts_with("en") => Language::En,
            _ => Language::PtBr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Language::PtBr),
            "en" => Ok(Language::En),
            _ => Err(CatalogError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Translation lookup over a pair of tables.
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    pt_br: &'static Value,
    en: &'static Value,
}

impl Translator {
    /// Translator over the embedded tables.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            pt_br: &*PT_BR,
            en: &*EN,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    fn table(&self, language: Language) -> &Value {
        match language {
            Language::PtBr => self.pt_br,
            Language::En => self.en,
        }
    }

    pub fn translate(&self, key: &str) -> String {
        translate_in(self.table(self.language), self.table(self.language.other()), key)
    }
}

fn lookup<'a>(table: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(table, |node, part| node.get(part))
        .and_then(Value::as_str)
}

fn translate_in(primary: &Value, fallback: &Value, key: &str) -> String {
    if let Some(text) = lookup(primary, key) {
        return text.to_string();
    }
    warn!(key, "translation key not found");
    lookup(fallback, key).unwrap_or(key).to_string()
}

/// One-shot lookup against the embedded tables.
pub fn translate(language: Language, key: &str) -> String {
    Translator::new(language).translate(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn portuguese_is_the_default() {
        assert_eq!(Language::default(), Language::PtBr);
        assert_eq!(translate(Language::default(), "common.cart"), "Carrinho");
    }

    #[test]
    fn nested_keys_resolve_per_language() {
        assert_eq!(
            translate(Language::En, "products.filters.sortBy"),
            "Sort by"
        );
        assert_eq!(translate(Language::PtBr, "common.brand"), "Marca");
    }

    #[test]
    fn missing_key_falls_back_to_other_locale() {
        let pt = json!({ "common": { "home": "Início" } });
        let en = json!({ "common": { "home": "Home", "cart": "Cart" } });

        assert_eq!(translate_in(&pt, &en, "common.home"), "Início");
        assert_eq!(translate_in(&pt, &en, "common.cart"), "Cart");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        assert_eq!(translate(Language::En, "nope.missing"), "nope.missing");
        // a section is not a translation
        assert_eq!(translate(Language::En, "common"), "common");
    }

    #[test]
    fn embedded_tables_have_the_same_sections() {
        let pt = PT_BR.as_object().unwrap();
        let en = EN.as_object().unwrap();
        let mut pt_keys: Vec<_> = pt.keys().collect();
        let mut en_keys: Vec<_> = en.keys().collect();
        pt_keys.sort();
        en_keys.sort();
        assert_eq!(pt_keys, en_keys);
    }

    #[test]
    fn language_parsing_and_detection() {
        assert_eq!("pt-BR".parse::<Language>().unwrap(), Language::PtBr);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(CatalogError::UnknownLanguage(_))
        ));

        assert_eq!(Language::detect(Some("en_US.UTF-8")), Language::En);
        assert_eq!(Language::detect(Some("de_DE")), Language::PtBr);
        assert_eq!(Language::detect(None), Language::PtBr);
    }

    #[test]
    fn switching_language_changes_lookups() {
        let mut translator = Translator::new(Language::PtBr);
        assert_eq!(translator.translate("common.search"), "Buscar");
        translator.set_language(Language::En);
        assert_eq!(translator.translate("common.search"), "Search");
    }
}
