//! English / Romanian text lookup over nested JSON tables.
//!
//! Lookups never fail: a missing segment, or a segment that is not a
//! mapping, degrades to the caller's fallback or to the raw key.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;

use serde_json::Value;

use crate::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    En,
    Ro,
}

impl Lang {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ro => "ro",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Self::En),
            "ro" => Some(Self::Ro),
            _ => None,
        }
    }

    /// Pick a language from the browser's preferred language tag.
    #[must_use]
    pub fn from_browser(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("ro") {
            Self::Ro
        } else {
            Self::En
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ro,
            Self::Ro => Self::En,
        }
    }

    /// Label and flag shown on the language switcher.
    #[must_use]
    pub const fn badge(self) -> (&'static str, &'static str) {
        match self {
            Self::En => ("EN", "🇬🇧"),
            Self::Ro => ("RO", "🇷🇴"),
        }
    }
}

/// Resolve the starting language: saved preference, then browser hint.
#[must_use]
pub fn initial_lang<S>(store: &S, browser_tag: Option<&str>) -> Lang
where
    S: PreferenceStore + ?Sized,
{
    store
        .load_lang()
        .as_deref()
        .and_then(Lang::from_code)
        .unwrap_or_else(|| browser_tag.map_or(Lang::En, Lang::from_browser))
}

/// Walk a dot-separated key path through nested objects.
#[must_use]
pub fn lookup_path<'a>(table: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(table, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        _ => None,
    })
}

/// Translation tables keyed by language code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleTables {
    tables: BTreeMap<String, Value>,
}

impl LocaleTables {
    /// Build from an object mapping language codes to tables.
    ///
    /// Anything that is not an object yields empty tables.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let tables = match value {
            Value::Object(map) => map.into_iter().collect(),
            _ => BTreeMap::new(),
        };
        Self { tables }
    }

    /// Parse embedded JSON sources; unparsable ones are skipped.
    #[must_use]
    pub fn from_json_sources(sources: &[(&str, &str)]) -> Self {
        let tables = sources
            .iter()
            .filter_map(|(code, json)| match serde_json::from_str::<Value>(json) {
                Ok(table) => Some(((*code).to_string(), table)),
                Err(err) => {
                    log::warn!("skipping locale {code}: {err}");
                    None
                }
            })
            .collect();
        Self { tables }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn table(&self, lang: Lang) -> Option<&Value> {
        self.tables
            .get(lang.code())
            .or_else(|| self.tables.get(Lang::En.code()))
    }

    #[must_use]
    pub fn lookup(&self, lang: Lang, key: &str) -> Option<&Value> {
        self.table(lang).and_then(|table| lookup_path(table, key))
    }
}

/// Notification emitted after the active language changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChanged {
    pub lang: Lang,
}

/// Active language plus its tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Localizer {
    lang: Lang,
    tables: LocaleTables,
}

impl Localizer {
    #[must_use]
    pub const fn new(tables: LocaleTables, lang: Lang) -> Self {
        Self { lang, tables }
    }

    #[must_use]
    pub const fn lang(&self) -> Lang {
        self.lang
    }

    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
    }

    /// Translate `key`, returning the key itself when nothing is found.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.t_or(key, None)
    }

    /// Translate `key` with an explicit fallback.
    ///
    /// An empty fallback counts as no fallback.
    #[must_use]
    pub fn t_or(&self, key: &str, fallback: Option<&str>) -> String {
        self.text_for(key).unwrap_or_else(|| {
            fallback
                .filter(|f| !f.is_empty())
                .unwrap_or(key)
                .to_string()
        })
    }

    /// The translation only when it is a plain string.
    ///
    /// Used for text replacement so a key that points at a nested table
    /// leaves the element untouched.
    #[must_use]
    pub fn text_for(&self, key: &str) -> Option<String> {
        self.tables
            .lookup(self.lang, key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Flip to the other language and persist the choice.
    ///
    /// Persistence failures are logged; the switch still takes effect.
    pub fn toggle<S>(&mut self, store: &S) -> LanguageChanged
    where
        S: PreferenceStore + ?Sized,
    {
        self.lang = self.lang.toggled();
        if let Err(err) = store.save_lang(self.lang.code()) {
            log::warn!("could not persist language {}: {err}", self.lang.code());
        }
        LanguageChanged { lang: self.lang }
    }
}

/// Preference store kept in memory, for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    lang: RefCell<Option<String>>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn with_lang(code: &str) -> Self {
        Self {
            lang: RefCell::new(Some(code.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    type Error = Infallible;

    fn load_lang(&self) -> Option<String> {
        self.lang.borrow().clone()
    }

    fn save_lang(&self, code: &str) -> Result<(), Self::Error> {
        *self.lang.borrow_mut() = Some(code.to_string());
        Ok(())
    }
}
