use gate_core::{ApiError, GenerateOutcome, GeneratorController};
use std::rc::Rc;
use yew::Reducible;

use crate::components::FocusRequest;

/// Which copy confirmation a timer refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Pin,
    Link,
}

#[derive(Debug)]
pub enum GeneratorAction {
    Input(usize, String),
    Backspace(usize),
    Begin,
    Finished(Result<GenerateOutcome, ApiError>),
    Copied(CopyTarget),
    HideCopied(CopyTarget),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorState {
    pub controller: GeneratorController,
    pub focus: FocusRequest,
    pub pin_copied: bool,
    pub link_copied: bool,
}

impl GeneratorState {
    fn copied_flag(&mut self, target: CopyTarget) -> &mut bool {
        match target {
            CopyTarget::Pin => &mut self.pin_copied,
            CopyTarget::Link => &mut self.link_copied,
        }
    }
}

impl Reducible for GeneratorState {
    type Action = GeneratorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GeneratorAction::Input(idx, raw) => {
                if let Some(target) = next.controller.input(idx, &raw) {
                    next.focus = next.focus.to(target);
                }
            }
            GeneratorAction::Backspace(idx) => {
                if let Some(target) = next.controller.backspace(idx) {
                    next.focus = next.focus.to(target);
                }
            }
            GeneratorAction::Begin => {
                let _ = next.controller.begin();
            }
            GeneratorAction::Finished(result) => {
                let target = next.controller.finish(result);
                next.focus = next.focus.to(target);
                next.pin_copied = false;
            }
            GeneratorAction::Copied(CopyTarget::Pin) if next.controller.generated().is_none() => {}
            GeneratorAction::Copied(target) => *next.copied_flag(target) = true,
            GeneratorAction::HideCopied(target) => *next.copied_flag(target) = false,
        }
        if next == *self { self } else { Rc::new(next) }
    }
}
