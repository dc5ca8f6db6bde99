use yew::prelude::*;

use crate::hooks::use_language;
use crate::i18n;

/// Badge of the active language.
///
/// The host element is the clickable control; the click is wired by
/// `mount::mount_lang_switcher`, so nothing interactive is rendered
/// inside it.
#[function_component(LangSwitcher)]
pub fn lang_switcher() -> Html {
    let lang = use_language();
    let (badge, flag) = lang.badge();

    html! {
      <span class="lang-switch" title={i18n::t("language_switch")}>
        <span class="lang-code">{ badge }</span>
        {" "}
        <span class="lang-flag" aria-hidden="true">{ flag }</span>
      </span>
    }
}
