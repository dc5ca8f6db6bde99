//! Locale coverage: every language carries the same keys and all weather codes.

use serde_json::Value;
use std::collections::BTreeSet;

const WEATHER_CODES: &[u16] = &[
    0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85,
    86, 95, 96, 99,
];

fn locale_codes() -> Vec<String> {
    let mut locales = Vec::new();
    let entries = std::fs::read_dir("i18n").expect("i18n directory should exist");
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            locales.push(stem.to_string());
        }
    }
    locales.sort();
    locales
}

fn load_locale(locale: &str) -> Value {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"))
}

fn collect_keys(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let next_prefix = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(&next_prefix, v, out);
            } else {
                out.insert(next_prefix);
            }
        }
    }
}

#[test]
fn locales_have_matching_keys() {
    let locales = locale_codes();
    assert_eq!(locales, vec!["en".to_string(), "ro".to_string()]);

    let mut base_keys = BTreeSet::new();
    collect_keys("", &load_locale("en"), &mut base_keys);

    for locale in locales {
        let mut keys = BTreeSet::new();
        collect_keys("", &load_locale(&locale), &mut keys);
        let missing: Vec<_> = base_keys.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&base_keys).collect();
        assert!(missing.is_empty(), "{locale} is missing keys: {missing:?}");
        assert!(extra.is_empty(), "{locale} has extra keys: {extra:?}");
    }
}

#[test]
fn every_weather_code_is_described() {
    for locale in locale_codes() {
        let json = load_locale(&locale);
        for code in WEATHER_CODES {
            let key = code.to_string();
            assert!(
                json["weather"][key.as_str()].is_string(),
                "{locale} lacks weather.{code}"
            );
        }
        assert!(json["weather"]["unknown"].is_string());
    }
}

#[test]
fn all_values_are_non_empty_strings() {
    for locale in locale_codes() {
        let mut keys = BTreeSet::new();
        let json = load_locale(&locale);
        collect_keys("", &json, &mut keys);
        for key in keys {
            let value = gate_core::lookup_path(&json, &key);
            assert!(
                value.and_then(Value::as_str).is_some_and(|s| !s.trim().is_empty()),
                "{locale}: {key} should be a non-empty string"
            );
        }
    }
}
