//! Gate access core
//!
//! Platform-agnostic logic behind the gate access pages: four-cell PIN
//! capture, barrier opening, guest PIN generation, current weather and the
//! English / Romanian text tables. No browser or UI dependencies live here;
//! hosts plug in their own transport and storage through the traits below.

pub mod api;
pub mod barrier;
pub mod generator;
pub mod locale;
pub mod pin;
pub mod weather;

use async_trait::async_trait;

pub use api::{
    ApiError, DEFAULT_API_BASE, DeviceStatusResponse, Endpoints, GeneratePinRequest,
    GeneratePinResponse, OpenBarrierRequest, OpenBarrierResponse, decode_reply,
};
pub use barrier::{
    BarrierController, BarrierOutcome, BarrierPhase, DeviceStatus, OPENED_STATUS_MS, check_device,
    request_open,
};
pub use generator::{
    COPY_CONFIRM_MS, GenerateOutcome, GeneratorController, GeneratorNotice, guest_link,
    request_guest_pin,
};
pub use locale::{
    Lang, LanguageChanged, LocaleTables, Localizer, MemoryPreferences, initial_lang, lookup_path,
};
pub use pin::{PIN_LENGTH, PinFill, PinPad};
pub use weather::{
    Coordinates, DEFAULT_COORDINATES, ForecastResponse, WeatherIcon, WeatherSnapshot,
    forecast_url, load_weather,
};

/// Remote PIN / barrier service.
///
/// Browser futures are not `Send`, so implementations are single-threaded.
#[async_trait(?Send)]
pub trait GateApi {
    /// Ask whether the barrier controller is reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the reply cannot be decoded.
    async fn device_status(&self) -> Result<DeviceStatusResponse, ApiError>;

    /// Submit a PIN to open the barrier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the reply cannot be decoded.
    async fn open_barrier(&self, pin: &str) -> Result<OpenBarrierResponse, ApiError>;

    /// Mint a guest PIN, authenticated by the admin PIN.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the reply cannot be decoded.
    async fn generate_pin(&self, admin_pin: &str) -> Result<GeneratePinResponse, ApiError>;
}

/// Weather provider.
#[async_trait(?Send)]
pub trait ForecastSource {
    /// Fetch the forecast for a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the reply cannot be decoded.
    async fn forecast(&self, coords: Coordinates) -> Result<ForecastResponse, ApiError>;
}

/// Persistence for the selected language.
pub trait PreferenceStore {
    type Error: std::error::Error + 'static;

    /// Saved language code, if any.
    fn load_lang(&self) -> Option<String>;

    /// Save the language code for future sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the write.
    fn save_lang(&self, code: &str) -> Result<(), Self::Error>;
}
