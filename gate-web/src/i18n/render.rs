use crate::i18n::bundle::with_localizer;
use std::collections::BTreeMap;

fn interpolate(mut text: String, args: &BTreeMap<&str, &str>) -> String {
    for (k, v) in args {
        let ph1 = format!("{{{{{k}}}}}");
        let ph2 = format!("{{{k}}}");
        text = text.replace(&ph1, v);
        text = text.replace(&ph2, v);
    }
    text
}

/// Translate a key to the current language
///
/// Returns the key itself when no string is found.
#[must_use]
pub fn t(key: &str) -> String {
    with_localizer(|loc| loc.t(key))
}

/// Translate a key, falling back to `fallback` instead of the key.
#[must_use]
pub fn t_or(key: &str, fallback: &str) -> String {
    with_localizer(|loc| loc.t_or(key, Some(fallback)))
}

/// Translation only when the key resolves to a plain string.
#[must_use]
pub fn text_for(key: &str) -> Option<String> {
    with_localizer(|loc| loc.text_for(key))
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    let text = t(key);
    match args {
        Some(args_map) => interpolate(text, args_map),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_handles_braced_forms() {
        let mut args = BTreeMap::new();
        args.insert("index", "2");
        let resolved = interpolate("Digit {index} / {{index}}".into(), &args);
        assert_eq!(resolved, "Digit 2 / 2");
    }

    #[test]
    fn missing_keys_fall_back() {
        assert_eq!(t("missing.key"), "missing.key");
        assert_eq!(t_or("weather.12", "Unknown"), "Unknown");
        assert_eq!(text_for("weather"), None);
        assert_eq!(t("weather.2"), "Partly cloudy");
    }
}
