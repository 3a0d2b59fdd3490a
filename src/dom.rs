//! DOM helpers for widget markup
//!
//! Addressing convention: a table row carries `data-obj-id`, an editable cell
//! inside it carries `data-property`, so every cell is reachable by the
//! stable `(obj_id, property)` pair. Server-rendered markup follows this
//! convention; inline-edit patching depends on it.
//!
//! Every helper re-queries the live document and returns an error instead of
//! panicking when its target is gone — a completion callback may fire after
//! an overlapping reload has already replaced the subtree it was aimed at.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Event, HtmlInputElement};

use crate::error::AdminError;

/// A checked row of the sublist, captured as a keyed pair so bulk responses
/// never have to be re-correlated by position in the DOM.
pub struct CheckedRow {
    pub obj_id: String,
    pub element: Element,
}

pub fn document() -> Result<Document, AdminError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AdminError::MissingNode("document".to_string()))
}

pub fn element_by_id(id: &str) -> Result<Element, AdminError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| AdminError::MissingNode(format!("#{id}")))
}

/// All elements under `root` matching `selector`, in document order.
pub fn select_all(root: &Element, selector: &str) -> Result<Vec<Element>, AdminError> {
    let list = root
        .query_selector_all(selector)
        .map_err(|err| selector_error(selector, &err))?;
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                elements.push(element);
            }
        }
    }
    Ok(elements)
}

/// Replace the element `#old_id` wholesale with `html`.
///
/// The old subtree (and every listener attached to it) is discarded; the
/// caller is expected to re-bind on the fresh markup.
pub fn replace_root(old_id: &str, html: &str) -> Result<(), AdminError> {
    let element = element_by_id(old_id)?;
    element.set_outer_html(html);
    Ok(())
}

/// The row of `root` carrying `data-obj-id="obj_id"`.
pub fn row(root: &Element, obj_id: &str) -> Result<Element, AdminError> {
    let selector = format!("[data-obj-id=\"{}\"]", escape_attr(obj_id));
    root.query_selector(&selector)
        .map_err(|err| selector_error(&selector, &err))?
        .ok_or_else(|| AdminError::MissingNode(format!("row {obj_id}")))
}

/// The cell of `row` tagged `data-property="property"`.
pub fn cell(row: &Element, property: &str) -> Result<Element, AdminError> {
    let selector = format!("[data-property=\"{}\"]", escape_attr(property));
    row.query_selector(&selector)
        .map_err(|err| selector_error(&selector, &err))?
        .ok_or_else(|| AdminError::MissingNode(format!("cell {property}")))
}

/// Replace the content of the `(obj_id, property)` cell under `root`.
pub fn set_cell_html(
    root: &Element,
    obj_id: &str,
    property: &str,
    html: &str,
) -> Result<(), AdminError> {
    let row = row(root, obj_id)?;
    let cell = cell(&row, property)?;
    cell.set_inner_html(html);
    Ok(())
}

/// The sublist: rows of `root` whose checkbox is currently checked, in DOM
/// order, paired with their `obj_id`.
pub fn checked_rows(root: &Element) -> Result<Vec<CheckedRow>, AdminError> {
    let mut checked = Vec::new();
    for row in select_all(root, "[data-obj-id]")? {
        let Some(obj_id) = row.get_attribute("data-obj-id") else {
            continue;
        };
        let is_checked = row
            .query_selector("input[type=\"checkbox\"]")
            .ok()
            .flatten()
            .and_then(|input| input.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.checked())
            .unwrap_or(false);
        if is_checked {
            checked.push(CheckedRow { obj_id, element: row });
        }
    }
    Ok(checked)
}

/// Resolve the `obj_id` of the row containing the event's target.
pub fn obj_id_from_event(event: &Event) -> Option<String> {
    let target = event.target()?;
    let element = target.dyn_into::<Element>().ok()?;
    let row = element.closest("[data-obj-id]").ok().flatten()?;
    row.get_attribute("data-obj-id")
}

/// Blocking notification, used after a failed delete.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking confirmation; answers `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn escape_attr(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn selector_error(selector: &str, err: &JsValue) -> AdminError {
    AdminError::MissingNode(format!(
        "selector {selector} failed: {}",
        err.as_string().unwrap_or_default()
    ))
}
