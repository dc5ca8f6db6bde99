//! Wire types and transport errors for the gate API.
//!
//! The remote service answers every call with a small JSON object. Logical
//! refusals (`success` false or absent) are part of the normal response shape and are
//! kept apart from transport failures, which surface as [`ApiError`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Production base URL of the PIN / barrier worker.
pub const DEFAULT_API_BASE: &str = "https://pin-api.ctr-gate.workers.dev";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP {status}: {status_text}")]
    Status { status: u16, status_text: String },
    #[error("Response parsing failed: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Endpoint URLs derived from a base address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn device_status(&self) -> String {
        format!("{}/device-status", self.base)
    }

    #[must_use]
    pub fn open_barrier(&self) -> String {
        format!("{}/open-barrier", self.base)
    }

    #[must_use]
    pub fn generate_pin(&self) -> String {
        format!("{}/generate-pin", self.base)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStatusResponse {
    #[serde(default)]
    pub online: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenBarrierRequest {
    pub pin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenBarrierResponse {
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePinRequest {
    pub admin_pin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePinResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub pin: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Response bodies that may carry a logical refusal.
///
/// A non-2xx reply whose body is a well-formed refusal is reported as that
/// refusal rather than as a transport failure.
pub trait Envelope {
    fn is_refusal(&self) -> bool;
}

impl Envelope for DeviceStatusResponse {
    fn is_refusal(&self) -> bool {
        false
    }
}

impl Envelope for OpenBarrierResponse {
    fn is_refusal(&self) -> bool {
        !self.success
    }
}

impl Envelope for GeneratePinResponse {
    fn is_refusal(&self) -> bool {
        !self.success
    }
}

/// Decode a raw HTTP reply into a typed response.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] when a 2xx body is not the expected JSON and
/// [`ApiError::Status`] for any other non-2xx reply.
pub fn decode_reply<T>(status: u16, status_text: &str, body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Envelope,
{
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body)?);
    }
    match serde_json::from_str::<T>(body) {
        Ok(parsed) if parsed.is_refusal() => Ok(parsed),
        _ => Err(ApiError::Status {
            status,
            status_text: status_text.to_string(),
        }),
    }
}
