use gate_core::PIN_LENGTH;
use std::collections::BTreeMap;
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

/// Request to move keyboard focus to a cell.
///
/// `serial` changes on every request so asking for the same cell twice still
/// triggers the focus effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusRequest {
    pub index: Option<usize>,
    pub serial: u32,
}

impl FocusRequest {
    #[must_use]
    pub const fn to(self, index: usize) -> Self {
        Self {
            index: Some(index),
            serial: self.serial.wrapping_add(1),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Id of the wrapping container.
    pub id: AttrValue,
    pub values: Vec<AttrValue>,
    #[prop_or_default]
    pub focus: FocusRequest,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<(usize, String)>,
    pub on_backspace: Callback<usize>,
}

fn first_char(raw: &str) -> String {
    raw.chars().next().map(String::from).unwrap_or_default()
}

/// Row of single-character PIN cells.
#[function_component(PinInputs)]
pub fn pin_inputs(p: &Props) -> Html {
    let refs = use_memo((), |()| {
        (0..PIN_LENGTH).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });

    {
        let refs = refs.clone();
        use_effect_with(p.focus, move |focus| {
            if let Some(input) = focus
                .index
                .and_then(|idx| refs.get(idx))
                .and_then(NodeRef::cast::<HtmlInputElement>)
            {
                let _ = input.focus();
            }
        });
    }

    let cells = (0..PIN_LENGTH).map(|idx| {
        let value = p.values.get(idx).cloned().unwrap_or_default();
        let oninput = {
            let cb = p.on_input.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let kept = first_char(&input.value());
                if kept != input.value() {
                    input.set_value(&kept);
                }
                cb.emit((idx, kept));
            })
        };
        let onkeydown = {
            let cb = p.on_backspace.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Backspace" {
                    cb.emit(idx);
                }
            })
        };
        let position = (idx + 1).to_string();
        let mut args = BTreeMap::new();
        args.insert("index", position.as_str());
        let label = crate::i18n::tr("pin_digit", Some(&args));

        html! {
          <input
            ref={refs[idx].clone()}
            class="pin-input"
            type="tel"
            inputmode="numeric"
            autocomplete="off"
            maxlength="1"
            aria-label={label}
            data-index={idx.to_string()}
            disabled={p.disabled}
            {value}
            {oninput}
            {onkeydown}
          />
        }
    });

    html! {
      <div id={p.id.clone()} class="pin-inputs">
        { for cells }
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(values: &[&str]) -> Props {
        Props {
            id: "pin-inputs".into(),
            values: values.iter().map(|v| AttrValue::from(v.to_string())).collect(),
            focus: FocusRequest::default(),
            disabled: false,
            on_input: Callback::noop(),
            on_backspace: Callback::noop(),
        }
    }

    #[test]
    fn renders_four_labelled_cells() {
        crate::i18n::set_lang(gate_core::Lang::En);
        let html = block_on(
            LocalServerRenderer::<PinInputs>::with_props(props(&["1", "", "", ""])).render(),
        );
        assert_eq!(html.matches("class=\"pin-input\"").count(), PIN_LENGTH);
        assert!(html.contains("aria-label=\"PIN digit 1\""), "{html}");
        assert!(html.contains("aria-label=\"PIN digit 4\""), "{html}");
        assert!(html.contains("maxlength=\"1\""));
    }

    #[test]
    fn focus_requests_bump_serial() {
        let first = FocusRequest::default().to(2);
        let again = first.to(2);
        assert_eq!(first.index, Some(2));
        assert_ne!(first, again);
    }

    #[test]
    fn pasted_text_keeps_first_character() {
        assert_eq!(first_char("1234"), "1");
        assert_eq!(first_char(""), "");
    }
}
