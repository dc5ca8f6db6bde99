//! Attach each widget to its host-page placeholder.
//!
//! A page that lacks a placeholder simply does not get that widget.

pub const BARRIER_ROOT: &str = "barrier-widget";
pub const GENERATOR_ROOT: &str = "pin-generator-widget";
pub const WEATHER_ROOT: &str = "weather-widget";
pub const LANG_ROOT: &str = "lang-switcher";

/// Parse a `data-lat` / `data-lon` attribute value.
#[must_use]
pub fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Render every widget whose root element is present.
pub fn mount_widgets() {
    #[cfg(target_arch = "wasm32")]
    {
        use crate::components::{
            BarrierPanel, PinGenerator, WeatherWidget, weather_widget,
        };
        use crate::dom::element_by_id;

        if let Some(root) = element_by_id(BARRIER_ROOT) {
            yew::Renderer::<BarrierPanel>::with_root(root).render();
        }
        if let Some(root) = element_by_id(GENERATOR_ROOT) {
            yew::Renderer::<PinGenerator>::with_root(root).render();
        }
        if let Some(root) = element_by_id(WEATHER_ROOT) {
            let props = weather_widget::Props {
                latitude: parse_coordinate(root.get_attribute("data-lat").as_deref()),
                longitude: parse_coordinate(root.get_attribute("data-lon").as_deref()),
            };
            yew::Renderer::<WeatherWidget>::with_root_and_props(root, props).render();
        }
        if let Some(root) = element_by_id(LANG_ROOT) {
            mount_lang_switcher(root);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!(
            "no DOM; skipping {BARRIER_ROOT}, {GENERATOR_ROOT}, {WEATHER_ROOT} and {LANG_ROOT}"
        );
    }
}

/// Make the host element itself toggle the language and render the badge
/// into it. The host may be a `<button>`.
#[cfg(target_arch = "wasm32")]
pub fn mount_lang_switcher(root: web_sys::Element) {
    gloo::events::EventListener::new(&root, "click", |_| {
        let changed = crate::i18n::switch_language();
        log::debug!("switched language to {}", changed.lang.code());
    })
    .forget();
    yew::Renderer::<crate::components::LangSwitcher>::with_root(root).render();
}
