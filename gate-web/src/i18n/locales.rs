use gate_core::LocaleTables;

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("ro", include_str!("../../i18n/ro.json")),
];

/// Tables compiled into the bundle.
#[must_use]
pub fn embedded_tables() -> LocaleTables {
    LocaleTables::from_json_sources(LOCALE_TABLE)
}

/// Tables injected by the host page as `window.LOCALES`, if any.
#[cfg(target_arch = "wasm32")]
pub fn host_tables() -> Option<LocaleTables> {
    let win = web_sys::window()?;
    let value = js_sys::Reflect::get(&win, &wasm_bindgen::JsValue::from_str("LOCALES")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<serde_json::Value>(value) {
        Ok(json) => Some(LocaleTables::from_value(json)).filter(|tables| !tables.is_empty()),
        Err(err) => {
            log::warn!("ignoring window.LOCALES: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gate_core::Lang;

    #[test]
    fn embedded_tables_cover_both_languages() {
        let tables = embedded_tables();
        for lang in [Lang::En, Lang::Ro] {
            assert!(
                tables.lookup(lang, "device_online").is_some(),
                "{} table missing",
                lang.code()
            );
        }
    }
}
