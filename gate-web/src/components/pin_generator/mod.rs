//! Admin form that mints guest PINs.

mod state;
mod view;

pub use state::{CopyTarget, GeneratorAction, GeneratorState};
pub use view::{GeneratorView, ViewProps};

use gate_core::{COPY_CONFIRM_MS, guest_link, request_guest_pin};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::dom;
use crate::hooks::use_language;
use crate::platform::WebGateApi;

fn confirm_copy(dispatcher: &UseReducerDispatcher<GeneratorState>, target: CopyTarget) {
    dispatcher.dispatch(GeneratorAction::Copied(target));
    let dispatcher = dispatcher.clone();
    gloo::timers::callback::Timeout::new(COPY_CONFIRM_MS, move || {
        dispatcher.dispatch(GeneratorAction::HideCopied(target));
    })
    .forget();
}

#[function_component(PinGenerator)]
pub fn pin_generator() -> Html {
    let state = use_reducer(GeneratorState::default);
    let lang = use_language();

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(idx, raw): (usize, String)| {
            dispatcher.dispatch(GeneratorAction::Input(idx, raw));
        })
    };
    let on_backspace = {
        let dispatcher = state.dispatcher();
        Callback::from(move |idx: usize| dispatcher.dispatch(GeneratorAction::Backspace(idx)))
    };
    let on_generate = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut probe = state.controller.clone();
            let admin_pin = probe.begin();
            let dispatcher = state.dispatcher();
            dispatcher.dispatch(GeneratorAction::Begin);
            let Some(admin_pin) = admin_pin else {
                return;
            };
            spawn_local(async move {
                let result = request_guest_pin(&WebGateApi::default(), &admin_pin).await;
                dispatcher.dispatch(GeneratorAction::Finished(result));
            });
        })
    };
    let on_copy_pin = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(pin) = state.controller.generated() else {
                return;
            };
            dom::copy_to_clipboard(pin);
            confirm_copy(&state.dispatcher(), CopyTarget::Pin);
        })
    };
    let on_copy_link = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let Some(origin) = dom::page_origin() else {
                dom::console_error("Failed to copy: page origin unavailable");
                return;
            };
            dom::copy_to_clipboard(&guest_link(&origin));
            confirm_copy(&dispatcher, CopyTarget::Link);
        })
    };

    html! {
      <GeneratorView
        state={(*state).clone()}
        {lang}
        {on_input}
        {on_backspace}
        {on_generate}
        {on_copy_pin}
        {on_copy_link}
      />
    }
}
