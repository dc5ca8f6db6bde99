use async_trait::async_trait;
use futures::executor::block_on;
use gate_core::{
    ApiError, Coordinates, ForecastResponse, ForecastSource, Lang, LocaleTables, Localizer,
    WeatherIcon, load_weather,
};
use serde_json::json;

const SAMPLE: &str = r#"{
    "latitude": 30.72,
    "longitude": -97.93,
    "current_weather": {
        "temperature": 88.5,
        "windspeed": 9.4,
        "winddirection": 180,
        "weathercode": 61,
        "is_day": 1,
        "time": "2024-07-04T16:00"
    },
    "hourly": {
        "time": ["2024-07-04T15:00", "2024-07-04T16:00", "2024-07-04T17:00"],
        "relative_humidity_2m": [48, 51, null]
    }
}"#;

struct StaticForecast(Option<&'static str>);

#[async_trait(?Send)]
impl ForecastSource for StaticForecast {
    async fn forecast(&self, _coords: Coordinates) -> Result<ForecastResponse, ApiError> {
        let body = self.0.ok_or_else(|| ApiError::Request("timeout".into()))?;
        Ok(serde_json::from_str(body)?)
    }
}

#[test]
fn provider_reply_becomes_snapshot() {
    let snap = block_on(load_weather(&StaticForecast(Some(SAMPLE)), Coordinates::default()))
        .expect("sample parses");
    assert!((snap.temperature - 88.5).abs() < f64::EPSILON);
    assert!((snap.windspeed - 9.4).abs() < f64::EPSILON);
    assert_eq!(snap.humidity, Some(51.0));
    assert_eq!(snap.icon(), WeatherIcon::Rain);
}

#[test]
fn transport_and_parse_failures_propagate() {
    let err = block_on(load_weather(&StaticForecast(None), Coordinates::default())).unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
    let err = block_on(load_weather(
        &StaticForecast(Some(r#"{"hourly":{}}"#)),
        Coordinates::default(),
    ))
    .unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[test]
fn description_retranslates_from_retained_code() {
    let snap = block_on(load_weather(&StaticForecast(Some(SAMPLE)), Coordinates::default()))
        .expect("sample parses");
    let tables = LocaleTables::from_value(json!({
        "en": { "weather": { "61": "Light rain", "unknown": "Unknown" } },
        "ro": { "weather": { "61": "Ploaie ușoară", "unknown": "Necunoscut" } }
    }));
    let mut loc = Localizer::new(tables, Lang::En);
    let describe = |loc: &Localizer| {
        let unknown = loc.t("weather.unknown");
        loc.t_or(&snap.description_key(), Some(&unknown))
    };
    assert_eq!(describe(&loc), "Light rain");
    loc.set_lang(Lang::Ro);
    assert_eq!(describe(&loc), "Ploaie ușoară");
}

#[test]
fn unlisted_code_uses_unknown_description() {
    let tables = LocaleTables::from_value(json!({ "en": { "weather": { "unknown": "Unknown" } } }));
    let loc = Localizer::new(tables, Lang::En);
    let unknown = loc.t("weather.unknown");
    assert_eq!(loc.t_or("weather.12", Some(&unknown)), "Unknown");
    assert_eq!(WeatherIcon::from_code(12), WeatherIcon::Unknown);
}
