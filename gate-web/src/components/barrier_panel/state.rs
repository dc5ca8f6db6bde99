use gate_core::{ApiError, BarrierController, BarrierOutcome, DeviceStatus};
use std::rc::Rc;
use yew::Reducible;

use crate::components::FocusRequest;

#[derive(Debug)]
pub enum BarrierAction {
    Input(usize, String),
    Backspace(usize),
    DeviceResolved(DeviceStatus),
    SubmitStarted,
    Finished(Result<BarrierOutcome, ApiError>),
    HideStatus,
}

/// Barrier controller plus the focus request derived from its moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarrierState {
    pub controller: BarrierController,
    pub focus: FocusRequest,
}

impl BarrierState {
    fn focus_to(&mut self, target: Option<usize>) {
        if let Some(idx) = target {
            self.focus = self.focus.to(idx);
        }
    }
}

impl Reducible for BarrierState {
    type Action = BarrierAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BarrierAction::Input(idx, raw) => {
                let target = next.controller.input(idx, &raw);
                next.focus_to(target);
            }
            BarrierAction::Backspace(idx) => {
                let target = next.controller.backspace(idx);
                next.focus_to(target);
            }
            BarrierAction::DeviceResolved(status) => next.controller.set_device(status),
            BarrierAction::SubmitStarted => {
                // The PIN was already taken by the click handler.
                if next.controller.begin_submit().is_none() {
                    return self;
                }
            }
            BarrierAction::Finished(result) => {
                let target = next.controller.finish(result);
                next.focus_to(target);
            }
            BarrierAction::HideStatus => next.controller.clear_status(),
        }
        if next == *self { self } else { Rc::new(next) }
    }
}
