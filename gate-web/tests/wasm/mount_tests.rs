use gate_core::Lang;
use gate_web::{dom, i18n, mount};
use wasm_bindgen_test::*;

use super::fresh_root;

#[wasm_bindgen_test]
fn absent_roots_are_skipped() {
    let doc = dom::document().expect("document");
    for id in [mount::BARRIER_ROOT, mount::GENERATOR_ROOT] {
        if let Some(el) = doc.get_element_by_id(id) {
            el.remove();
        }
    }
    mount::mount_widgets();
    assert!(doc.get_element_by_id("pin-inputs").is_none());
    assert!(doc.get_element_by_id("admin-pin-inputs").is_none());
}

#[wasm_bindgen_test]
fn lang_switcher_mounts_into_its_root() {
    i18n::set_lang(Lang::En);
    let root = fresh_root(mount::LANG_ROOT);
    mount::mount_lang_switcher(root.clone());
    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("EN"), "{text}");
    assert!(root.query_selector("button").ok().flatten().is_none());
}

#[wasm_bindgen_test]
fn clicking_button_root_toggles_language() {
    use wasm_bindgen::JsCast;

    i18n::set_lang(Lang::En);
    let doc = dom::document().expect("document");
    if let Some(old) = doc.get_element_by_id(mount::LANG_ROOT) {
        old.remove();
    }
    let root = doc.create_element("button").expect("create button");
    root.set_id(mount::LANG_ROOT);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    mount::mount_lang_switcher(root.clone());

    root.unchecked_ref::<web_sys::HtmlElement>().click();
    assert_eq!(i18n::current_lang(), Lang::Ro);
    assert!(root.query_selector("button").ok().flatten().is_none());
    i18n::set_lang(Lang::En);
    root.remove();
}
