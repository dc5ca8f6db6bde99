//! Guest PIN generation behind an admin PIN.

use crate::GateApi;
use crate::api::{ApiError, GeneratePinResponse};
use crate::pin::PinPad;

/// How long a copy confirmation stays visible.
pub const COPY_CONFIRM_MS: u32 = 2_000;

/// Path of the guest page, relative to the site origin.
pub const GUEST_PATH: &str = "/guests";

/// Server verdict on a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Generated(String),
    Refused { reason: Option<String> },
}

impl TryFrom<GeneratePinResponse> for GenerateOutcome {
    type Error = ApiError;

    fn try_from(reply: GeneratePinResponse) -> Result<Self, Self::Error> {
        if !reply.success {
            return Ok(Self::Refused {
                reason: reply.reason.filter(|r| !r.is_empty()),
            });
        }
        reply
            .pin
            .map(Self::Generated)
            .ok_or_else(|| ApiError::Parse("generated PIN missing from reply".into()))
    }
}

/// Message shown below the generator after an attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorNotice {
    /// Admin PIN not fully entered.
    Incomplete,
    /// Refused with the server's own wording.
    Reason(String),
    /// Refused without a reason.
    Unknown,
    Network,
}

impl GeneratorNotice {
    /// Translation key for notices that have no server-supplied text.
    #[must_use]
    pub fn i18n_key(&self) -> Option<&'static str> {
        match self {
            Self::Incomplete => Some("admin_pin_incomplete"),
            Self::Reason(_) => None,
            Self::Unknown => Some("error_unknown"),
            Self::Network => Some("error_network"),
        }
    }
}

/// Per-widget state of the guest PIN generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorController {
    pad: PinPad,
    busy: bool,
    generated: Option<String>,
    notice: Option<GeneratorNotice>,
}

impl GeneratorController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn pad(&self) -> &PinPad {
        &self.pad
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn generated(&self) -> Option<&str> {
        self.generated.as_deref()
    }

    #[must_use]
    pub const fn notice(&self) -> Option<&GeneratorNotice> {
        self.notice.as_ref()
    }

    pub fn input(&mut self, index: usize, raw: &str) -> Option<usize> {
        self.pad.input(index, raw)
    }

    #[must_use]
    pub fn backspace(&self, index: usize) -> Option<usize> {
        self.pad.backspace(index)
    }

    #[must_use]
    pub fn can_generate(&self) -> bool {
        !self.busy && self.pad.is_complete()
    }

    /// Start one generation request.
    ///
    /// Hides the previous notice and result. Returns the admin PIN to send,
    /// or `None` when the PIN is incomplete or a request is already running.
    pub fn begin(&mut self) -> Option<String> {
        if self.busy {
            return None;
        }
        self.notice = None;
        self.generated = None;
        let Some(admin_pin) = self.pad.assemble() else {
            self.notice = Some(GeneratorNotice::Incomplete);
            return None;
        };
        self.busy = true;
        Some(admin_pin)
    }

    /// Apply a finished request. The admin PIN is cleared whatever the
    /// outcome and focus goes back to the first cell.
    pub fn finish(&mut self, result: Result<GenerateOutcome, ApiError>) -> usize {
        match result {
            Ok(GenerateOutcome::Generated(pin)) => self.generated = Some(pin),
            Ok(GenerateOutcome::Refused { reason }) => {
                self.notice = Some(reason.map_or(GeneratorNotice::Unknown, GeneratorNotice::Reason));
            }
            Err(err) => {
                log::warn!("generate-pin request failed: {err}");
                self.notice = Some(GeneratorNotice::Network);
            }
        }
        self.busy = false;
        self.pad.reset()
    }
}

/// Build the link handed to guests from the page origin.
#[must_use]
pub fn guest_link(origin: &str) -> String {
    format!("{}{GUEST_PATH}", origin.trim_end_matches('/'))
}

/// Ask the service for a new guest PIN.
///
/// # Errors
///
/// Returns the transport error when the request failed, could not be decoded
/// or claimed success without a PIN.
pub async fn request_guest_pin<A>(api: &A, admin_pin: &str) -> Result<GenerateOutcome, ApiError>
where
    A: GateApi + ?Sized,
{
    api.generate_pin(admin_pin)
        .await
        .and_then(GenerateOutcome::try_from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> GeneratorController {
        let mut ctl = GeneratorController::new();
        for i in 0..4 {
            ctl.input(i, "9");
        }
        ctl
    }

    #[test]
    fn incomplete_pin_sends_nothing() {
        let mut ctl = GeneratorController::new();
        ctl.input(0, "1");
        assert!(!ctl.can_generate());
        assert_eq!(ctl.begin(), None);
        assert_eq!(ctl.notice(), Some(&GeneratorNotice::Incomplete));
        assert!(!ctl.is_busy());
    }

    #[test]
    fn busy_disables_generate_until_finish() {
        let mut ctl = filled();
        assert_eq!(ctl.begin().as_deref(), Some("9999"));
        assert!(ctl.is_busy());
        assert!(!ctl.can_generate());
        assert_eq!(ctl.begin(), None);
        ctl.finish(Ok(GenerateOutcome::Generated("4821".into())));
        assert!(!ctl.is_busy());
        assert_eq!(ctl.generated(), Some("4821"));
        assert!(ctl.pad().assemble().is_none());
    }

    #[test]
    fn refusal_prefers_server_reason() {
        let mut ctl = filled();
        ctl.begin();
        ctl.finish(Ok(GenerateOutcome::Refused {
            reason: Some("Invalid admin PIN".into()),
        }));
        assert_eq!(
            ctl.notice(),
            Some(&GeneratorNotice::Reason("Invalid admin PIN".into()))
        );

        let mut ctl = filled();
        ctl.begin();
        ctl.finish(Ok(GenerateOutcome::Refused { reason: None }));
        assert_eq!(ctl.notice().and_then(GeneratorNotice::i18n_key), Some("error_unknown"));
    }

    #[test]
    fn network_failure_still_clears_cells() {
        let mut ctl = filled();
        ctl.begin();
        assert_eq!(ctl.finish(Err(ApiError::Request("down".into()))), 0);
        assert_eq!(ctl.notice(), Some(&GeneratorNotice::Network));
        assert!(ctl.pad().assemble().is_none());
        assert!(!ctl.is_busy());
    }

    #[test]
    fn new_attempt_hides_previous_result() {
        let mut ctl = filled();
        ctl.begin();
        ctl.finish(Ok(GenerateOutcome::Generated("1111".into())));
        for i in 0..4 {
            ctl.input(i, "2");
        }
        ctl.begin();
        assert_eq!(ctl.generated(), None);
    }

    #[test]
    fn reply_without_success_flag_surfaces_reason() {
        let reply: GeneratePinResponse =
            serde_json::from_str(r#"{"reason":"Admin PIN invalid"}"#).unwrap();
        let outcome = GenerateOutcome::try_from(reply).unwrap();
        let mut ctl = filled();
        ctl.begin();
        assert_eq!(ctl.finish(Ok(outcome)), 0);
        assert_eq!(
            ctl.notice(),
            Some(&GeneratorNotice::Reason("Admin PIN invalid".into()))
        );
        assert!(ctl.pad().assemble().is_none());
    }

    #[test]
    fn success_without_pin_is_a_parse_error() {
        let reply = GeneratePinResponse {
            success: true,
            pin: None,
            reason: None,
        };
        assert!(matches!(
            GenerateOutcome::try_from(reply),
            Err(ApiError::Parse(_))
        ));
    }

    #[test]
    fn guest_link_appends_path() {
        assert_eq!(guest_link("https://gate.ctr.farm"), "https://gate.ctr.farm/guests");
        assert_eq!(guest_link("https://gate.ctr.farm/"), "https://gate.ctr.farm/guests");
    }
}
