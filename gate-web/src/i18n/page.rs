//! Translation pass over host-page markup flagged with `data-i18n` and
//! `data-i18n-alt`, and the window-level language broadcast.

use gate_core::LanguageChanged;

pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

#[cfg(target_arch = "wasm32")]
const TEXT_ATTR: &str = "data-i18n";
#[cfg(target_arch = "wasm32")]
const ALT_ATTR: &str = "data-i18n-alt";

/// Rewrite every flagged element of the document in the active language.
///
/// Text is replaced only when the key resolves to a string; `alt` texts
/// always receive the lookup result.
pub fn apply_translations() {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(doc) = crate::dom::document() else {
            return;
        };
        for el in crate::dom::query_all(&doc, &format!("[{TEXT_ATTR}]")) {
            if let Some(text) = el
                .get_attribute(TEXT_ATTR)
                .and_then(|key| super::text_for(&key))
            {
                el.set_text_content(Some(&text));
            }
        }
        for el in crate::dom::query_all(&doc, &format!("[{ALT_ATTR}]")) {
            if let Some(key) = el.get_attribute(ALT_ATTR) {
                let _ = el.set_attribute("alt", &super::t(&key));
            }
        }
    }
}

/// Dispatch `languageChanged` on `window` with `detail.lang`.
pub(super) fn broadcast(changed: LanguageChanged) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;

        let Some(win) = crate::dom::window() else {
            return;
        };
        let detail = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &detail,
            &JsValue::from_str("lang"),
            &JsValue::from_str(changed.lang.code()),
        );
        let init = web_sys::CustomEventInit::new();
        init.set_detail(&detail);
        match web_sys::CustomEvent::new_with_event_init_dict(LANGUAGE_CHANGED_EVENT, &init) {
            Ok(event) => {
                let _ = win.dispatch_event(&event);
            }
            Err(err) => crate::dom::console_error(&format!(
                "Failed to broadcast language change: {}",
                crate::dom::js_error_message(&err)
            )),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("language changed to {}", changed.lang.code());
    }
}
