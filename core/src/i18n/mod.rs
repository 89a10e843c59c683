//! Localized narration for step descriptions
//!
//! Runners never branch on language. They receive a [`Narrator`] (catalog +
//! locale) and resolve message keys through it, so translations stay a
//! separate concern from algorithmic logic.
//!
//! # Resolution
//! `locale → en → "[key]"`: a key missing from the requested locale falls
//! back to English with a warning, and a key missing everywhere renders as
//! the bracketed key so the gap is visible instead of fatal.
//!
//! Templates use `{name}` placeholders. Placeholders without a matching
//! argument are left intact.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

mod en;
mod es;

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use log::warn;
use serde::{Deserialize, Serialize};

/// Supported narration languages
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Parse a BCP-47-ish tag, ignoring region (`"es-MX"` → `Es`)
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Key → template tables for every locale
#[derive(Debug)]
pub struct MessageCatalog {
    tables: HashMap<Locale, HashMap<&'static str, &'static str>>,
}

impl MessageCatalog {
    /// Catalog built from explicit tables
    pub fn from_tables(tables: &[(Locale, &'static [(&'static str, &'static str)])]) -> Self {
        let tables = tables
            .iter()
            .map(|(locale, entries)| (*locale, entries.iter().copied().collect()))
            .collect();
        Self { tables }
    }

    /// Process-wide catalog with the bundled English and Spanish strings
    pub fn builtin() -> &'static MessageCatalog {
        static BUILTIN: OnceLock<MessageCatalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            MessageCatalog::from_tables(&[(Locale::En, en::MESSAGES), (Locale::Es, es::MESSAGES)])
        })
    }

    /// Raw template lookup with English fallback
    pub fn template(&self, locale: Locale, key: &str) -> Option<&'static str> {
        if let Some(template) = self.lookup(locale, key) {
            return Some(template);
        }
        if locale != Locale::En {
            if let Some(template) = self.lookup(Locale::En, key) {
                warn!("missing {} translation for '{}', using English", locale, key);
                return Some(template);
            }
        }
        None
    }

    /// Resolve and interpolate
    pub fn format(&self, locale: Locale, key: &str, args: &[(&str, String)]) -> String {
        match self.template(locale, key) {
            Some(template) => interpolate(template, args),
            None => {
                warn!("unknown message key '{}'", key);
                format!("[{}]", key)
            }
        }
    }

    /// Keys present in English but absent from `locale`, sorted
    pub fn missing_keys(&self, locale: Locale) -> Vec<&'static str> {
        let Some(reference) = self.tables.get(&Locale::En) else {
            return Vec::new();
        };
        let mut missing: Vec<&'static str> = reference
            .keys()
            .filter(|key| self.lookup(locale, key).is_none())
            .copied()
            .collect();
        missing.sort_unstable();
        missing
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&'static str> {
        self.tables.get(&locale).and_then(|table| table.get(key)).copied()
    }
}

/// Replace `{name}` placeholders with matching arguments
pub fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(arg, _)| *arg == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Catalog + locale handed to every runner
#[derive(Debug, Clone, Copy)]
pub struct Narrator<'a> {
    catalog: &'a MessageCatalog,
    locale: Locale,
}

impl<'a> Narrator<'a> {
    pub fn new(catalog: &'a MessageCatalog, locale: Locale) -> Self {
        Self { catalog, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn text(&self, key: &str, args: &[(&str, String)]) -> String {
        self.catalog.format(self.locale, key, args)
    }
}

impl Narrator<'static> {
    /// Narrator over the bundled catalog
    pub fn builtin(locale: Locale) -> Self {
        Self::new(MessageCatalog::builtin(), locale)
    }
}

/// `say!(narrator, "key", name = value, ...)` resolves a localized message
macro_rules! say {
    ($narrator:expr, $key:literal $(, $name:ident = $value:expr)* $(,)?) => {
        $narrator.text($key, &[$((stringify!($name), ($value).to_string())),*])
    };
}

pub(crate) use say;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_tags() {
        assert_eq!(Locale::from_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("EN_us"), Some(Locale::En));
        assert_eq!(Locale::from_tag("fr"), None);
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn test_interpolation() {
        let args = [("a", "3".to_owned()), ("b", "5".to_owned())];
        assert_eq!(interpolate("Compare {a} and {b}", &args), "Compare 3 and 5");
        assert_eq!(interpolate("{missing} stays", &args), "{missing} stays");
        assert_eq!(interpolate("no placeholders", &args), "no placeholders");
        assert_eq!(interpolate("dangling {a", &args), "dangling {a");
        // values are not re-expanded
        let nested = [("a", "{b}".to_owned()), ("b", "x".to_owned())];
        assert_eq!(interpolate("{a}", &nested), "{b}");
    }

    #[test]
    fn test_fallback_chain() {
        static EN: &[(&str, &str)] = &[("greet", "Hello {name}"), ("only.en", "English")];
        static ES: &[(&str, &str)] = &[("greet", "Hola {name}")];
        let catalog = MessageCatalog::from_tables(&[(Locale::En, EN), (Locale::Es, ES)]);

        let es = Narrator::new(&catalog, Locale::Es);
        assert_eq!(say!(es, "greet", name = "Ada"), "Hola Ada");
        assert_eq!(say!(es, "only.en"), "English");
        assert_eq!(say!(es, "nope"), "[nope]");
        assert_eq!(catalog.missing_keys(Locale::Es), vec!["only.en"]);
    }

    #[test]
    fn test_builtin_spanish_is_complete() {
        let catalog = MessageCatalog::builtin();
        assert!(catalog.missing_keys(Locale::Es).is_empty(), "{:?}", catalog.missing_keys(Locale::Es));
    }
}
