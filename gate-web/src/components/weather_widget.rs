use gate_core::{Coordinates, Lang, WeatherSnapshot, load_weather};
use yew::prelude::*;

use crate::hooks::use_language;
use crate::i18n;
use crate::platform::WebForecast;

/// What the widget currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum WeatherView {
    Loading,
    Ready(WeatherSnapshot),
    Unavailable,
}

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    #[prop_or_default]
    pub latitude: Option<f64>,
    #[prop_or_default]
    pub longitude: Option<f64>,
}

/// Current conditions for the configured coordinate.
///
/// One fetch on mount, no retry. The weather code is kept in state so the
/// description follows language switches without refetching.
#[function_component(WeatherWidget)]
pub fn weather_widget(p: &Props) -> Html {
    let view = use_state(|| WeatherView::Loading);
    let lang = use_language();

    {
        let view = view.clone();
        let coords = Coordinates::or_default(p.latitude, p.longitude);
        use_effect_with(coords, move |coords| {
            let coords = *coords;
            wasm_bindgen_futures::spawn_local(async move {
                match load_weather(&WebForecast, coords).await {
                    Ok(snapshot) => view.set(WeatherView::Ready(snapshot)),
                    Err(err) => {
                        log::warn!("weather fetch failed: {err}");
                        view.set(WeatherView::Unavailable);
                    }
                }
            });
            || {}
        });
    }

    html! { <WeatherPanel view={(*view).clone()} {lang} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PanelProps {
    pub view: WeatherView,
    pub lang: Lang,
}

fn description(snapshot: &WeatherSnapshot) -> String {
    i18n::t_or(&snapshot.description_key(), &i18n::t("weather.unknown"))
}

fn humidity_text(humidity: Option<f64>) -> String {
    humidity.map_or_else(|| "--".to_string(), |h| h.to_string())
}

#[function_component(WeatherPanel)]
pub fn weather_panel(p: &PanelProps) -> Html {
    let loading_text = match p.view {
        WeatherView::Unavailable => i18n::t("weather_unavailable"),
        _ => i18n::t("weather_loading"),
    };
    let snapshot = match &p.view {
        WeatherView::Ready(snapshot) => Some(snapshot),
        _ => None,
    };
    let loading_class = classes!("weather-loading", snapshot.is_some().then_some("hidden"));
    let data_class = classes!("weather-data", snapshot.is_none().then_some("hidden"));

    let data = snapshot.map_or_else(Html::default, |snap| {
        html! {
          <>
            <span id="weather-emoji" class="weather-emoji" aria-hidden="true">{ snap.icon().glyph() }</span>
            <span id="weather-temp" class="weather-temp">{ format!("{}°F", snap.temperature) }</span>
            <span id="weather-desc" class="weather-desc">{ description(snap) }</span>
            <span class="weather-label">{ i18n::t("wind_label") }</span>
            <span id="weather-wind">{ snap.windspeed.to_string() }</span>
            <span class="weather-label">{ i18n::t("humidity_label") }</span>
            <span id="weather-humidity">{ humidity_text(snap.humidity) }</span>
          </>
        }
    });

    html! {
      <div class="weather" lang={p.lang.code()}>
        <p id="weather-loading" class={loading_class}>{ loading_text }</p>
        <div id="weather-data" class={data_class}>{ data }</div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use gate_core::WeatherIcon;
    use yew::LocalServerRenderer;

    fn snapshot(code: u16, humidity: Option<f64>) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: 88.5,
            windspeed: 9.0,
            humidity,
            code,
        }
    }

    fn render(view: WeatherView, lang: Lang) -> String {
        i18n::set_lang(lang);
        let html = block_on(
            LocalServerRenderer::<WeatherPanel>::with_props(PanelProps { view, lang }).render(),
        );
        i18n::set_lang(Lang::En);
        html
    }

    #[test]
    fn widget_starts_loading() {
        i18n::set_lang(Lang::En);
        let html = block_on(LocalServerRenderer::<WeatherWidget>::new().render());
        assert!(html.contains("Loading weather"), "{html}");
        assert!(html.contains("weather-data hidden"), "{html}");
    }

    #[test]
    fn ready_view_fills_fields() {
        let html = render(WeatherView::Ready(snapshot(61, Some(51.0))), Lang::En);
        assert!(html.contains("88.5°F"), "{html}");
        assert!(html.contains(WeatherIcon::Rain.glyph()), "{html}");
        assert!(html.contains(">51<"), "{html}");
        assert!(html.contains(">9<"), "{html}");
        assert!(html.contains("weather-loading hidden"), "{html}");
    }

    #[test]
    fn description_follows_language() {
        let view = WeatherView::Ready(snapshot(2, None));
        assert!(render(view.clone(), Lang::En).contains("Partly cloudy"));
        let ro = render(view, Lang::Ro);
        assert!(!ro.contains("Partly cloudy"), "{ro}");
        assert!(ro.contains(">--<"), "{ro}");
    }

    #[test]
    fn unknown_code_and_failure_texts() {
        let html = render(WeatherView::Ready(snapshot(12, None)), Lang::En);
        assert!(html.contains("Unknown conditions"), "{html}");
        assert!(html.contains(WeatherIcon::Unknown.glyph()), "{html}");

        let html = render(WeatherView::Unavailable, Lang::En);
        assert!(html.contains("Weather unavailable"), "{html}");
    }
}
