//! Barrier opening: PIN entry, device status and submission outcome.

use crate::GateApi;
use crate::api::{ApiError, OpenBarrierResponse};
use crate::pin::PinPad;

/// Delay before an accepted status and the opened button state are hidden.
pub const OPENED_STATUS_MS: u32 = 3_000;

/// Reported reachability of the barrier controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl DeviceStatus {
    #[must_use]
    pub const fn from_online(online: bool) -> Self {
        if online { Self::Online } else { Self::Offline }
    }

    #[must_use]
    pub const fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Unknown => "device_checking",
            Self::Online => "device_online",
            Self::Offline => "device_offline",
        }
    }
}

/// Server verdict on a submitted PIN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierOutcome {
    Accepted,
    Rejected,
}

impl From<OpenBarrierResponse> for BarrierOutcome {
    fn from(reply: OpenBarrierResponse) -> Self {
        if reply.success {
            Self::Accepted
        } else {
            Self::Rejected
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarrierPhase {
    #[default]
    Idle,
    Submitting,
    Accepted,
    Rejected,
    NetworkError,
}

impl BarrierPhase {
    /// Status line for the phase, `None` when nothing is shown.
    #[must_use]
    pub const fn i18n_key(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Submitting => Some("checking_pin"),
            Self::Accepted => Some("barrier_opened"),
            Self::Rejected => Some("pin_wrong"),
            Self::NetworkError => Some("error_sending"),
        }
    }

    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Rejected | Self::NetworkError)
    }
}

/// Per-widget state of the barrier panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarrierController {
    pad: PinPad,
    device: DeviceStatus,
    phase: BarrierPhase,
}

impl BarrierController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn pad(&self) -> &PinPad {
        &self.pad
    }

    #[must_use]
    pub const fn device(&self) -> DeviceStatus {
        self.device
    }

    #[must_use]
    pub const fn phase(&self) -> BarrierPhase {
        self.phase
    }

    pub fn input(&mut self, index: usize, raw: &str) -> Option<usize> {
        self.pad.input(index, raw)
    }

    #[must_use]
    pub fn backspace(&self, index: usize) -> Option<usize> {
        self.pad.backspace(index)
    }

    pub fn set_device(&mut self, status: DeviceStatus) {
        self.device = status;
    }

    /// Submission needs a full PIN, an online device and no request in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.pad.is_complete() && self.device.is_online() && self.phase != BarrierPhase::Submitting
    }

    /// Enter `Submitting` and hand back the PIN to send.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let pin = self.pad.assemble()?;
        self.phase = BarrierPhase::Submitting;
        Some(pin)
    }

    /// Apply the result of an open request.
    ///
    /// Returns the cell to focus when the PIN was cleared. A transport failure
    /// leaves the entered PIN in place.
    pub fn finish(&mut self, result: Result<BarrierOutcome, ApiError>) -> Option<usize> {
        match result {
            Ok(BarrierOutcome::Accepted) => {
                self.phase = BarrierPhase::Accepted;
                Some(self.pad.reset())
            }
            Ok(BarrierOutcome::Rejected) => {
                self.phase = BarrierPhase::Rejected;
                Some(self.pad.reset())
            }
            Err(err) => {
                log::warn!("open-barrier request failed: {err}");
                self.phase = BarrierPhase::NetworkError;
                None
            }
        }
    }

    /// Hide the accepted status once its display delay elapsed.
    ///
    /// Any other status is left alone.
    pub fn clear_status(&mut self) {
        if self.phase == BarrierPhase::Accepted {
            self.phase = BarrierPhase::Idle;
        }
    }

    #[must_use]
    pub fn is_opened(&self) -> bool {
        self.phase == BarrierPhase::Accepted
    }
}

/// Resolve the device status; any failure counts as offline.
pub async fn check_device<A>(api: &A) -> DeviceStatus
where
    A: GateApi + ?Sized,
{
    match api.device_status().await {
        Ok(reply) => DeviceStatus::from_online(reply.online),
        Err(err) => {
            log::warn!("device-status request failed: {err}");
            DeviceStatus::Offline
        }
    }
}

/// Send the PIN and classify the reply.
///
/// # Errors
///
/// Returns the transport error when the request or its decoding failed.
pub async fn request_open<A>(api: &A, pin: &str) -> Result<BarrierOutcome, ApiError>
where
    A: GateApi + ?Sized,
{
    api.open_barrier(pin).await.map(BarrierOutcome::from)
}
