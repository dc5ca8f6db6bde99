use async_trait::async_trait;
use gate_core::{
    ApiError, Coordinates, DeviceStatusResponse, Endpoints, ForecastResponse, ForecastSource,
    GateApi, GeneratePinRequest, GeneratePinResponse, OpenBarrierRequest, OpenBarrierResponse,
    decode_reply, forecast_url,
};
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn request_error(err: &reqwest::Error) -> ApiError {
    ApiError::Request(err.to_string())
}

fn build_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| request_error(&e))
}

async fn read_reply<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: DeserializeOwned + gate_core::api::Envelope,
{
    let status = response.status();
    let reason = status.canonical_reason().unwrap_or_default().to_string();
    let body = response.text().await.map_err(|e| request_error(&e))?;
    decode_reply(status.as_u16(), &reason, &body)
}

/// Gate service reached over native HTTP.
#[derive(Debug, Clone)]
pub struct NativeGateApi {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl NativeGateApi {
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new(endpoints: Endpoints) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_client()?,
            endpoints,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

#[async_trait(?Send)]
impl GateApi for NativeGateApi {
    async fn device_status(&self) -> Result<DeviceStatusResponse, ApiError> {
        let response = self
            .client
            .get(self.endpoints.device_status())
            .send()
            .await
            .map_err(|e| request_error(&e))?;
        read_reply(response).await
    }

    async fn open_barrier(&self, pin: &str) -> Result<OpenBarrierResponse, ApiError> {
        let response = self
            .client
            .post(self.endpoints.open_barrier())
            .json(&OpenBarrierRequest {
                pin: pin.to_string(),
            })
            .send()
            .await
            .map_err(|e| request_error(&e))?;
        read_reply(response).await
    }

    async fn generate_pin(&self, admin_pin: &str) -> Result<GeneratePinResponse, ApiError> {
        let response = self
            .client
            .post(self.endpoints.generate_pin())
            .json(&GeneratePinRequest {
                admin_pin: admin_pin.to_string(),
            })
            .send()
            .await
            .map_err(|e| request_error(&e))?;
        read_reply(response).await
    }
}

/// Open-Meteo reached over native HTTP.
#[derive(Debug, Clone)]
pub struct NativeForecast {
    client: reqwest::Client,
}

impl NativeForecast {
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self {
            client: build_client()?,
        })
    }
}

#[async_trait(?Send)]
impl ForecastSource for NativeForecast {
    async fn forecast(&self, coords: Coordinates) -> Result<ForecastResponse, ApiError> {
        let response = self
            .client
            .get(forecast_url(coords))
            .send()
            .await
            .map_err(|e| request_error(&e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        let body = response.text().await.map_err(|e| request_error(&e))?;
        Ok(serde_json::from_str(&body)?)
    }
}
