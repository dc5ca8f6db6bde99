use gate_core::Lang;
use yew::prelude::*;

/// Active language, re-rendering the caller whenever `languageChanged` fires.
#[hook]
pub fn use_language() -> Lang {
    let lang = use_state(crate::i18n::current_lang);

    {
        let lang = lang.clone();
        use_effect_with((), move |()| {
            #[cfg(target_arch = "wasm32")]
            let listener = crate::dom::window().map(|win| {
                gloo::events::EventListener::new(
                    &win,
                    crate::i18n::LANGUAGE_CHANGED_EVENT,
                    move |_| lang.set(crate::i18n::current_lang()),
                )
            });
            #[cfg(not(target_arch = "wasm32"))]
            let _ = lang;

            move || {
                #[cfg(target_arch = "wasm32")]
                drop(listener);
            }
        });
    }

    *lang
}
