use gate_core::Lang;
use gate_web::{dom, i18n, platform};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use super::fresh_root;

#[wasm_bindgen_test]
fn flagged_markup_is_translated() {
    let root = fresh_root("i18n-fixture");
    root.set_inner_html(
        r#"<h1 data-i18n="open_barrier">placeholder</h1>
           <p data-i18n="weather">keep me</p>
           <img data-i18n-alt="language_switch" alt="">"#,
    );

    i18n::set_lang(Lang::Ro);
    i18n::apply_translations();
    let doc = dom::document().expect("document");
    let heading = doc.query_selector("[data-i18n='open_barrier']").unwrap().unwrap();
    assert_eq!(heading.text_content().as_deref(), Some("Deschide bariera"));
    let object_key = doc.query_selector("[data-i18n='weather']").unwrap().unwrap();
    assert_eq!(object_key.text_content().as_deref(), Some("keep me"));
    let img = doc.query_selector("[data-i18n-alt]").unwrap().unwrap();
    assert_eq!(img.get_attribute("alt").as_deref(), Some("Schimbă limba"));

    i18n::set_lang(Lang::En);
    i18n::apply_translations();
    assert_eq!(heading.text_content().as_deref(), Some("Open barrier"));
}

#[wasm_bindgen_test]
fn switching_persists_and_broadcasts() {
    i18n::set_lang(Lang::En);
    let seen: Rc<RefCell<Option<String>>> = Rc::default();
    let win = dom::window().expect("window");
    let listener = {
        let seen = seen.clone();
        gloo::events::EventListener::new(&win, i18n::LANGUAGE_CHANGED_EVENT, move |event| {
            let detail = event
                .dyn_ref::<web_sys::CustomEvent>()
                .map(web_sys::CustomEvent::detail)
                .and_then(|detail| {
                    js_sys::Reflect::get(&detail, &wasm_bindgen::JsValue::from_str("lang")).ok()
                })
                .and_then(|lang| lang.as_string());
            *seen.borrow_mut() = detail;
        })
    };

    let changed = i18n::switch_language();
    assert_eq!(changed.lang, Lang::Ro);
    assert_eq!(seen.borrow().as_deref(), Some("ro"));

    let storage = dom::local_storage().expect("localStorage");
    assert_eq!(
        storage.get_item(platform::LANG_KEY).unwrap().as_deref(),
        Some("ro")
    );
    let html_lang = dom::document()
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.get_attribute("lang"));
    assert_eq!(html_lang.as_deref(), Some("ro"));

    i18n::switch_language();
    assert_eq!(
        storage.get_item(platform::LANG_KEY).unwrap().as_deref(),
        Some("en")
    );
    drop(listener);
}
