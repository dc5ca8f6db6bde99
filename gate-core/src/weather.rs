//! Current-conditions snapshot from the Open-Meteo forecast API.
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::ForecastSource;
use crate::api::ApiError;

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Location shown when the host page gives none.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    latitude: 30.72,
    longitude: -97.93,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Use the caller's coordinates, falling back per axis to the default.
    #[must_use]
    pub fn or_default(latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            latitude: latitude.unwrap_or(DEFAULT_COORDINATES.latitude),
            longitude: longitude.unwrap_or(DEFAULT_COORDINATES.longitude),
        }
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        DEFAULT_COORDINATES
    }
}

/// Forecast request in imperial units with hourly humidity.
#[must_use]
pub fn forecast_url(coords: Coordinates) -> String {
    format!(
        "{FORECAST_URL}?latitude={lat}&longitude={lon}&current_weather=true\
         &hourly=relative_humidity_2m&timezone=auto&wind_speed_unit=mph\
         &temperature_unit=fahrenheit&precipitation_unit=inch",
        lat = coords.latitude,
        lon = coords.longitude,
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: u16,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub relative_humidity_2m: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: CurrentWeather,
    #[serde(default)]
    pub hourly: HourlySeries,
}

/// Values rendered by the weather widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub windspeed: f64,
    pub humidity: Option<f64>,
    pub code: u16,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn icon(&self) -> WeatherIcon {
        WeatherIcon::from_code(self.code)
    }

    /// Key of the localized description for this code.
    #[must_use]
    pub fn description_key(&self) -> String {
        format!("weather.{}", self.code)
    }
}

impl From<&ForecastResponse> for WeatherSnapshot {
    fn from(reply: &ForecastResponse) -> Self {
        let current = &reply.current_weather;
        let humidity = hour_of(&current.time)
            .and_then(|hour| {
                reply
                    .hourly
                    .time
                    .iter()
                    .position(|t| hour_of(t) == Some(hour))
            })
            .and_then(|idx| reply.hourly.relative_humidity_2m.get(idx).copied().flatten());
        Self {
            temperature: current.temperature,
            windspeed: current.windspeed,
            humidity,
            code: current.weathercode,
        }
    }
}

fn hour_of(timestamp: &str) -> Option<u32> {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|dt| dt.hour())
}

/// Sky category drawn next to the temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

const ICON_CODES: &[(WeatherIcon, &[u16])] = &[
    (WeatherIcon::Clear, &[0, 1]),
    (WeatherIcon::PartlyCloudy, &[2, 3]),
    (WeatherIcon::Fog, &[45, 48]),
    (WeatherIcon::Rain, &[51, 53, 55, 61, 63, 65, 80, 81, 82]),
    (WeatherIcon::Snow, &[71, 73, 75, 85, 86]),
    (WeatherIcon::Thunderstorm, &[95, 96, 99]),
];

impl WeatherIcon {
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        ICON_CODES
            .iter()
            .find(|(_, codes)| codes.contains(&code))
            .map_or(Self::Unknown, |(icon, _)| *icon)
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Fog => "🌫️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
            Self::Unknown => "❓",
        }
    }
}

/// Fetch and condense current conditions.
///
/// # Errors
///
/// Returns the transport error from the forecast source.
pub async fn load_weather<S>(source: &S, coords: Coordinates) -> Result<WeatherSnapshot, ApiError>
where
    S: ForecastSource + ?Sized,
{
    let reply = source.forecast(coords).await?;
    Ok(WeatherSnapshot::from(&reply))
}
