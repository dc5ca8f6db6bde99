//! PIN pad that opens the barrier.
//!
//! The device status is fetched once on mount. Submission goes through the
//! reducer so a second click while a request is in flight is ignored.

mod state;
mod view;

pub use state::{BarrierAction, BarrierState};
pub use view::{BarrierView, ViewProps};

use gate_core::{BarrierOutcome, OPENED_STATUS_MS, check_device, request_open};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_language;
use crate::platform::WebGateApi;

fn schedule_hide(dispatcher: UseReducerDispatcher<BarrierState>) {
    gloo::timers::callback::Timeout::new(OPENED_STATUS_MS, move || {
        dispatcher.dispatch(BarrierAction::HideStatus);
    })
    .forget();
}

#[function_component(BarrierPanel)]
pub fn barrier_panel() -> Html {
    let state = use_reducer(BarrierState::default);
    let lang = use_language();

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let status = check_device(&WebGateApi::default()).await;
                dispatcher.dispatch(BarrierAction::DeviceResolved(status));
            });
            || {}
        });
    }

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(idx, raw): (usize, String)| {
            dispatcher.dispatch(BarrierAction::Input(idx, raw));
        })
    };
    let on_backspace = {
        let dispatcher = state.dispatcher();
        Callback::from(move |idx: usize| dispatcher.dispatch(BarrierAction::Backspace(idx)))
    };
    let on_open = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut probe = state.controller.clone();
            let Some(pin) = probe.begin_submit() else {
                return;
            };
            let dispatcher = state.dispatcher();
            dispatcher.dispatch(BarrierAction::SubmitStarted);
            spawn_local(async move {
                let result = request_open(&WebGateApi::default(), &pin).await;
                let accepted = matches!(result, Ok(BarrierOutcome::Accepted));
                dispatcher.dispatch(BarrierAction::Finished(result));
                if accepted {
                    schedule_hide(dispatcher);
                }
            });
        })
    };

    html! {
      <BarrierView
        state={(*state).clone()}
        {lang}
        {on_input}
        {on_backspace}
        {on_open}
      />
    }
}
