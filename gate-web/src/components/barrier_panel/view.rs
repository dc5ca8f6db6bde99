use gate_core::{BarrierPhase, DeviceStatus, Lang};
use yew::prelude::*;

use super::state::BarrierState;
use crate::components::PinInputs;
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewProps {
    pub state: BarrierState,
    /// Active language; part of the props so a switch re-renders the texts.
    pub lang: Lang,
    pub on_input: Callback<(usize, String)>,
    pub on_backspace: Callback<usize>,
    pub on_open: Callback<MouseEvent>,
}

const fn device_class(status: DeviceStatus) -> &'static str {
    match status {
        DeviceStatus::Online => "device-status text-green-600",
        DeviceStatus::Offline => "device-status text-red-500",
        DeviceStatus::Unknown => "device-status text-slate-500",
    }
}

fn status_line(phase: BarrierPhase) -> (String, &'static str) {
    let Some(key) = phase.i18n_key() else {
        return (String::new(), "barrier-status hidden");
    };
    let text = i18n::t(key);
    match phase {
        BarrierPhase::Accepted => (format!("✅ {text}"), "barrier-status text-green-600"),
        BarrierPhase::Submitting => (text, "barrier-status text-slate-500"),
        _ => (text, "barrier-status text-red-500"),
    }
}

#[function_component(BarrierView)]
pub fn barrier_view(p: &ViewProps) -> Html {
    let ctl = &p.state.controller;
    let values: Vec<AttrValue> = ctl.pad().values().into_iter().map(AttrValue::from).collect();
    let (status_text, status_class) = status_line(ctl.phase());
    let button_class = classes!("open-btn", ctl.is_opened().then_some("btn-opened"));

    html! {
      <div class="barrier-panel" lang={p.lang.code()}>
        <p id="device-status" class={device_class(ctl.device())} aria-live="polite">
          { i18n::t(ctl.device().i18n_key()) }
        </p>
        <PinInputs
          id="pin-inputs"
          {values}
          focus={p.state.focus}
          on_input={p.on_input.clone()}
          on_backspace={p.on_backspace.clone()}
        />
        <button
          id="open-btn"
          class={button_class}
          disabled={!ctl.can_submit()}
          onclick={p.on_open.clone()}
        >
          { i18n::t("open_barrier") }
        </button>
        <p id="barrier-status" class={status_class} role="status" aria-live="polite">
          { status_text }
        </p>
      </div>
    }
}
