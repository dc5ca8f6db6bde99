//! Remote probes run by the tester, one per gate-core operation.

use gate_core::{
    BarrierOutcome, Coordinates, DeviceStatus, ForecastSource, GateApi, GenerateOutcome, PIN_LENGTH,
    check_device, load_weather, request_guest_pin, request_open,
};
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Device,
    Weather,
    Open,
    Generate,
}

impl Check {
    pub const ALL: [Self; 4] = [Self::Device, Self::Weather, Self::Open, Self::Generate];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Weather => "weather",
            Self::Open => "open",
            Self::Generate => "generate",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Device => "Query the barrier controller's online flag",
            Self::Weather => "Fetch current conditions from Open-Meteo",
            Self::Open => "Submit --pin to open the barrier (opens the real gate)",
            Self::Generate => "Mint a guest PIN with --admin-pin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|check| check.name() == name)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("missing --{0}")]
    Missing(&'static str),
    #[error("--{flag} must be {expected} characters, got {len}")]
    Length {
        flag: &'static str,
        expected: usize,
        len: usize,
    },
}

/// Validate a PIN argument the way the pad would assemble it.
///
/// # Errors
/// Returns an error if the PIN is absent or not exactly four characters.
pub fn pin_arg<'a>(flag: &'static str, value: Option<&'a str>) -> Result<&'a str, InputError> {
    let pin = value.ok_or(InputError::Missing(flag))?;
    let len = pin.chars().count();
    if len == PIN_LENGTH {
        Ok(pin)
    } else {
        Err(InputError::Length {
            flag,
            expected: PIN_LENGTH,
            len,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub detail: String,
    #[serde(serialize_with = "as_millis")]
    pub duration: Duration,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(d.as_millis())
}

impl CheckResult {
    fn new(check: Check, status: CheckStatus, detail: impl Into<String>, started: Instant) -> Self {
        Self {
            name: check.name().to_string(),
            status,
            detail: detail.into(),
            duration: started.elapsed(),
        }
    }

    pub fn passed(&self) -> bool {
        self.status != CheckStatus::Failed
    }
}

pub struct CheckCtx<'a, A: ?Sized, F: ?Sized> {
    pub api: &'a A,
    pub forecast: &'a F,
    pub coords: Coordinates,
    pub pin: Option<&'a str>,
    pub admin_pin: Option<&'a str>,
}

pub async fn run_check<A, F>(check: Check, ctx: &CheckCtx<'_, A, F>) -> CheckResult
where
    A: GateApi + ?Sized,
    F: ForecastSource + ?Sized,
{
    let started = Instant::now();
    let (status, detail) = match check {
        Check::Device => match check_device(ctx.api).await {
            DeviceStatus::Online => (CheckStatus::Passed, "device online".to_string()),
            other => (CheckStatus::Failed, format!("device {other:?}").to_lowercase()),
        },
        Check::Weather => match load_weather(ctx.forecast, ctx.coords).await {
            Ok(snap) => (
                CheckStatus::Passed,
                format!(
                    "{}°F, wind {} mph, humidity {}, code {} {}",
                    snap.temperature,
                    snap.windspeed,
                    snap.humidity
                        .map_or_else(|| "--".to_string(), |h| format!("{h}%")),
                    snap.code,
                    snap.icon().glyph()
                ),
            ),
            Err(err) => (CheckStatus::Failed, err.to_string()),
        },
        Check::Open => match pin_arg("pin", ctx.pin) {
            Err(err) => (CheckStatus::Skipped, err.to_string()),
            Ok(pin) => match request_open(ctx.api, pin).await {
                Ok(BarrierOutcome::Accepted) => (CheckStatus::Passed, "barrier opened".into()),
                Ok(BarrierOutcome::Rejected) => (CheckStatus::Failed, "PIN rejected".into()),
                Err(err) => (CheckStatus::Failed, err.to_string()),
            },
        },
        Check::Generate => match pin_arg("admin-pin", ctx.admin_pin) {
            Err(err) => (CheckStatus::Skipped, err.to_string()),
            Ok(admin_pin) => match request_guest_pin(ctx.api, admin_pin).await {
                Ok(GenerateOutcome::Generated(pin)) => {
                    (CheckStatus::Passed, format!("guest PIN {pin}"))
                }
                Ok(GenerateOutcome::Refused { reason }) => (
                    CheckStatus::Failed,
                    reason.unwrap_or_else(|| "refused without reason".into()),
                ),
                Err(err) => (CheckStatus::Failed, err.to_string()),
            },
        },
    };
    log::debug!("{} finished: {detail}", check.name());
    CheckResult::new(check, status, detail, started)
}
