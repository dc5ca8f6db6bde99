#![cfg(target_arch = "wasm32")]

mod i18n_page_tests;
mod mount_tests;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub fn fresh_root(id: &str) -> web_sys::Element {
    let doc = gate_web::dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id(id) {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}
