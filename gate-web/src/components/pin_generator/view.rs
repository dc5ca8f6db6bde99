use gate_core::{GeneratorNotice, Lang};
use yew::prelude::*;

use super::state::GeneratorState;
use crate::components::PinInputs;
use crate::i18n;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewProps {
    pub state: GeneratorState,
    pub lang: Lang,
    pub on_input: Callback<(usize, String)>,
    pub on_backspace: Callback<usize>,
    pub on_generate: Callback<MouseEvent>,
    pub on_copy_pin: Callback<MouseEvent>,
    pub on_copy_link: Callback<MouseEvent>,
}

fn notice_text(notice: &GeneratorNotice) -> String {
    match notice {
        GeneratorNotice::Reason(reason) => reason.clone(),
        other => other.i18n_key().map(i18n::t).unwrap_or_default(),
    }
}

fn hidden_unless(shown: bool, base: &'static str) -> Classes {
    classes!(base, (!shown).then_some("hidden"))
}

#[function_component(GeneratorView)]
pub fn generator_view(p: &ViewProps) -> Html {
    let ctl = &p.state.controller;
    let values: Vec<AttrValue> = ctl.pad().values().into_iter().map(AttrValue::from).collect();
    let label = if ctl.is_busy() {
        i18n::t("generating")
    } else {
        i18n::t("generate_button")
    };
    let notice = ctl.notice().map(notice_text);
    let generated = ctl.generated().map(str::to_string);
    let error_class = hidden_unless(notice.is_some(), "text-red-500");
    let result_class = hidden_unless(generated.is_some(), "generated-result");

    html! {
      <div class="pin-generator" lang={p.lang.code()}>
        <PinInputs
          id="admin-pin-inputs"
          {values}
          focus={p.state.focus}
          on_input={p.on_input.clone()}
          on_backspace={p.on_backspace.clone()}
        />
        <button
          id="generate-btn"
          class="generate-btn"
          disabled={!ctl.can_generate()}
          onclick={p.on_generate.clone()}
        >
          { label }
        </button>
        <p id="generate-error" class={error_class} role="alert">
          { notice.unwrap_or_default() }
        </p>
        <div id="generated-result" class={result_class}>
          <span class="generated-label">{ i18n::t("generated_pin_label") }</span>
          <strong id="generated-pin">{ generated.unwrap_or_default() }</strong>
          <button class="copy-pin-btn" onclick={p.on_copy_pin.clone()}>{ i18n::t("copy_pin") }</button>
          <span id="copy-pin-msg" class={hidden_unless(p.state.pin_copied, "copy-msg")}>
            { i18n::t("pin_copied") }
          </span>
        </div>
        <button class="copy-link-btn" onclick={p.on_copy_link.clone()}>{ i18n::t("copy_guest_link") }</button>
        <span id="copy-link-msg" class={hidden_unless(p.state.link_copied, "copy-msg")}>
          { i18n::t("link_copied") }
        </span>
      </div>
    }
}
