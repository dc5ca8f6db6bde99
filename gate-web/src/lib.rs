#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod dom;
pub mod hooks;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod mount;
pub mod platform;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Sync <html lang> with the saved or browser language before first paint
    crate::i18n::set_lang(crate::i18n::current_lang());
    crate::i18n::apply_translations();
    crate::mount::mount_widgets();
}

/// Toggle the page language from host-page scripts.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = switchLanguage)]
pub fn switch_language() -> String {
    crate::i18n::switch_language().lang.code().to_string()
}

/// Re-run the `data-i18n` pass after the host page inserted new markup.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = applyTranslations)]
pub fn apply_translations() {
    crate::i18n::apply_translations();
}
