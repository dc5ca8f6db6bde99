//! Browser implementations of the gate-core collaborator traits.
//!
//! HTTP goes through `gloo-net` (the browser `fetch`), the language
//! preference through `localStorage`.

use async_trait::async_trait;
use gate_core::{
    ApiError, Coordinates, DeviceStatusResponse, Endpoints, ForecastResponse, ForecastSource,
    GateApi, GeneratePinRequest, GeneratePinResponse, OpenBarrierRequest, OpenBarrierResponse,
    PreferenceStore, decode_reply, forecast_url,
};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::dom;

/// `localStorage` key holding the selected language code.
pub const LANG_KEY: &str = "lang";

fn request_error(err: &gloo_net::Error) -> ApiError {
    ApiError::Request(err.to_string())
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn read_reply<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned + gate_core::api::Envelope,
{
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.map_err(|e| request_error(&e))?;
    decode_reply(status, &status_text, &body)
}

/// PIN / barrier worker reached with `fetch`.
#[derive(Debug, Clone)]
pub struct WebGateApi {
    endpoints: Endpoints,
}

impl WebGateApi {
    #[must_use]
    pub const fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

impl Default for WebGateApi {
    fn default() -> Self {
        Self::new(crate::config::endpoints())
    }
}

#[async_trait(?Send)]
impl GateApi for WebGateApi {
    async fn device_status(&self) -> Result<DeviceStatusResponse, ApiError> {
        let response = Request::get(&self.endpoints.device_status())
            .send()
            .await
            .map_err(|e| request_error(&e))?;
        read_reply(response).await
    }

    async fn open_barrier(&self, pin: &str) -> Result<OpenBarrierResponse, ApiError> {
        let body = OpenBarrierRequest {
            pin: pin.to_string(),
        };
        let response = Request::post(&self.endpoints.open_barrier())
            .json(&body)
            .map_err(|e| request_error(&e))?
            .send()
            .await
            .map_err(|e| request_error(&e))?;
        read_reply(response).await
    }

    async fn generate_pin(&self, admin_pin: &str) -> Result<GeneratePinResponse, ApiError> {
        let body = GeneratePinRequest {
            admin_pin: admin_pin.to_string(),
        };
        let response = Request::post(&self.endpoints.generate_pin())
            .json(&body)
            .map_err(|e| request_error(&e))?
            .send()
            .await
            .map_err(|e| request_error(&e))?;
        read_reply(response).await
    }
}

/// Open-Meteo reached with `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebForecast;

#[async_trait(?Send)]
impl ForecastSource for WebForecast {
    async fn forecast(&self, coords: Coordinates) -> Result<ForecastResponse, ApiError> {
        let response = Request::get(&forecast_url(coords))
            .send()
            .await
            .map_err(|e| request_error(&e))?;
        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }
        let body = response.text().await.map_err(|e| request_error(&e))?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Language preference kept in `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebPreferences;

impl PreferenceStore for WebPreferences {
    type Error = PreferenceError;

    fn load_lang(&self) -> Option<String> {
        dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(LANG_KEY).ok().flatten())
    }

    fn save_lang(&self, code: &str) -> Result<(), Self::Error> {
        let storage = dom::local_storage()
            .map_err(|err| PreferenceError::Storage(dom::js_error_message(&err)))?;
        storage
            .set_item(LANG_KEY, code)
            .map_err(|err| PreferenceError::Storage(dom::js_error_message(&err)))
    }
}
