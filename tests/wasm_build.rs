//! WASM build test
//!
//! Checks that the module builds for the browser and that the DOM-side
//! behavior (cell patching, reload swap, listener lifecycle, option parsing)
//! works in a real JS environment.
//! Browser-only: run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use admin_wasm::api::helpers;
use admin_wasm::events::EventBindings;
use admin_wasm::protocol::WidgetLoadResponse;
use admin_wasm::widget::table::{self, TableConfig, TableWidget};
use admin_wasm::{dom, AdminContext, Widget};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Append `html` to the page body and return the host element.
fn mount(html: &str) -> web_sys::Element {
    let host = document().create_element("div").unwrap();
    host.set_inner_html(html);
    document().body().unwrap().append_child(&host).unwrap();
    host
}

#[wasm_bindgen_test]
fn context_installs_once_per_page() {
    let first = AdminContext::install("https://example.com/", "admin");
    let second = AdminContext::install("https://elsewhere.example/", "other");
    assert_eq!(first.admin_url(), "https://example.com/admin/");
    assert_eq!(second.admin_url(), "https://example.com/admin/");
}

#[wasm_bindgen_test]
fn table_options_parse_from_js_object() {
    let options = js_sys::JSON::parse(
        r#"{"obj_type":"article","pagination":{"page":2,"num_per_page":25}}"#,
    )
    .unwrap();
    let config: TableConfig = serde_wasm_bindgen::from_value(options).unwrap();
    assert_eq!(config.obj_type, "article");
    assert_eq!(config.pagination.page, 2);
    assert_eq!(config.pagination.num_per_page, 25);
}

#[wasm_bindgen_test]
fn invalid_options_surface_serialization_error() {
    let err = helpers::deserialize::<TableConfig>(
        JsValue::from_f64(5.0),
        "invalid table widget options",
    )
    .unwrap_err();
    let message = err.as_string().unwrap();
    assert!(message.contains("serialization error"));
    assert!(message.contains("invalid table widget options"));
}

#[wasm_bindgen_test]
fn inline_patch_replaces_exactly_one_cell() {
    let host = mount(
        r#"<div id="grid_inline">
             <div data-obj-id="42">
               <span data-property="status">old</span>
               <span data-property="title">keep</span>
             </div>
           </div>"#,
    );

    let root = dom::element_by_id("grid_inline").unwrap();
    dom::set_cell_html(&root, "42", "status", "<span>Active</span>").unwrap();

    let row = dom::row(&root, "42").unwrap();
    assert_eq!(
        dom::cell(&row, "status").unwrap().inner_html(),
        "<span>Active</span>"
    );
    assert_eq!(dom::cell(&row, "title").unwrap().inner_html(), "keep");

    host.remove();
}

#[wasm_bindgen_test]
fn reload_swap_adopts_server_assigned_id() {
    let host = mount(r#"<div id="grid_before"><p>stale</p></div>"#);

    let config: TableConfig = serde_json::from_value(serde_json::json!({
        "obj_type": "article",
        "widget_id": "grid_before",
    }))
    .unwrap();
    let ctx = Rc::new(AdminContext::new("https://example.com/", "admin"));
    let widget = TableWidget::new(ctx, config).shared();

    // The server is authoritative: the response carries a fresh root id.
    let response = WidgetLoadResponse {
        success: true,
        widget_html: r#"<div id="grid_after"><p>fresh</p></div>"#.to_string(),
        widget_id: "grid_after".to_string(),
    };
    table::apply_reload(&widget, &response).unwrap();

    assert_eq!(widget.borrow().root_element_id(), Some("grid_after"));
    assert!(document().get_element_by_id("grid_before").is_none());
    let fresh = document().get_element_by_id("grid_after").unwrap();
    assert_eq!(fresh.inner_html(), "<p>fresh</p>");

    host.remove();
}

#[wasm_bindgen_test]
fn detached_listeners_no_longer_fire() {
    let button = document().create_element("button").unwrap();
    document().body().unwrap().append_child(&button).unwrap();

    let clicks = Rc::new(Cell::new(0));
    let mut bindings = EventBindings::new();
    assert!(bindings.is_empty());
    {
        let clicks = Rc::clone(&clicks);
        bindings
            .on_click(&button, move |_| clicks.set(clicks.get() + 1))
            .unwrap();
    }
    assert_eq!(bindings.len(), 1);

    button.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
    assert_eq!(clicks.get(), 1);

    bindings.detach();
    assert!(bindings.is_empty());
    button.dyn_ref::<web_sys::HtmlElement>().unwrap().click();
    assert_eq!(clicks.get(), 1);

    button.remove();
}
