use gate_core::{Lang, LanguageChanged, Localizer};
use std::cell::RefCell;

use crate::i18n::locales::embedded_tables;

fn initial_localizer() -> Localizer {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        let tables = super::locales::host_tables().unwrap_or_else(embedded_tables);
        let browser = web_sys::window().and_then(|win| win.navigator().language());
        let lang = gate_core::initial_lang(&preferences(), browser.as_deref());
        Localizer::new(tables, lang)
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        Localizer::new(embedded_tables(), Lang::En)
    }
}

#[cfg(target_arch = "wasm32")]
fn preferences() -> crate::platform::WebPreferences {
    crate::platform::WebPreferences
}

#[cfg(not(target_arch = "wasm32"))]
fn preferences() -> gate_core::MemoryPreferences {
    gate_core::MemoryPreferences::default()
}

thread_local! {
    static CURRENT: RefCell<Localizer> = RefCell::new(initial_localizer());
}

pub(super) fn with_localizer<R>(f: impl FnOnce(&Localizer) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn with_localizer_mut<R>(f: impl FnOnce(&mut Localizer) -> R) -> R {
    CURRENT.with(|cell| f(&mut cell.borrow_mut()))
}

fn sync_document_lang(lang: Lang) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", lang.code());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
    }
}

/// Set the active language without persisting it.
///
/// Keeps the `<html lang>` attribute in step.
pub fn set_lang(lang: Lang) {
    with_localizer_mut(|loc| loc.set_lang(lang));
    sync_document_lang(lang);
}

/// Get the active language.
#[must_use]
pub fn current_lang() -> Lang {
    with_localizer(Localizer::lang)
}

/// Toggle between English and Romanian.
///
/// Persists the choice, re-runs the page translation pass and broadcasts a
/// `languageChanged` event so widgets can re-render derived text.
pub fn switch_language() -> LanguageChanged {
    let store = preferences();
    let changed = with_localizer_mut(|loc| loc.toggle(&store));
    sync_document_lang(changed.lang);
    super::page::apply_translations();
    super::page::broadcast(changed);
    changed
}
