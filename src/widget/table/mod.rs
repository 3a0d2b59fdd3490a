//! Table widget: paginated, filterable object listing
//!
//! The table widget renders a collection of domain objects as a grid and
//! keeps it current without page navigations: single-row and bulk inline
//! editing patch individual cells, quick create/edit opens a modal object
//! form, and deletion (after confirmation) triggers a full reload. A reload
//! swaps the root subtree wholesale, adopts the server-assigned root id, and
//! re-binds every event group on the fresh markup.
//!
//! All network completion runs back on the single browser thread; callbacks
//! re-resolve their DOM targets at completion time because an overlapping
//! reload may have replaced the markup a request was aimed at. Responses
//! arriving out of order follow last-write-wins by arrival; there is no
//! cancellation or de-duplication.

pub mod config;
pub mod plan;

pub use config::{Pagination, TableConfig};
pub use plan::CellPatch;

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::{json, Value};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use crate::context::AdminContext;
use crate::dialog;
use crate::dom;
use crate::error::AdminError;
use crate::events::EventBindings;
use crate::layout::HasGridStack;
use crate::protocol::{
    self, ObjectDeleteRequest, ObjectDeleteResponse, TableInlineMultiRequest,
    TableInlineMultiResponse, TableInlineRequest, TableInlineResponse, WidgetLoadResponse,
};
use crate::widget::{load_widget, Widget};

pub const TABLE_WIDGET_TYPE: &str = "table";
pub const OBJECT_FORM_WIDGET_TYPE: &str = "objectForm";

/// Sentinel `obj_id` asking the object form for a new, unsaved object.
pub const NEW_OBJECT_ID: &str = "";

/// Shared handle used by event closures and async completions.
pub type SharedTableWidget = Rc<RefCell<TableWidget>>;

pub struct TableWidget {
    ctx: Rc<AdminContext>,
    config: TableConfig,
    root_element_id: Option<String>,
    confirm: Box<dyn Fn(&str) -> bool>,
    on_navigate: Option<Box<dyn Fn(&str)>>,
    bindings: Option<EventBindings>,
}

impl TableWidget {
    pub fn new(ctx: Rc<AdminContext>, config: TableConfig) -> Self {
        let root_element_id = config.widget_id.clone();
        TableWidget {
            ctx,
            config,
            root_element_id,
            confirm: Box::new(dom::confirm),
            on_navigate: None,
            bindings: None,
        }
    }

    pub fn shared(self) -> SharedTableWidget {
        Rc::new(RefCell::new(self))
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn obj_type(&self) -> &str {
        &self.config.obj_type
    }

    /// Replace the confirmation step used before destructive operations.
    /// Defaults to the browser's blocking confirm dialog.
    pub fn set_confirm_hook(&mut self, hook: impl Fn(&str) -> bool + 'static) {
        self.confirm = Box::new(hook);
    }

    /// Install the navigation hook invoked by the row edit action. The table
    /// itself only resolves the row's `obj_id`; where to go with it is the
    /// embedding page's decision.
    pub fn set_navigate_hook(&mut self, hook: impl Fn(&str) + 'static) {
        self.on_navigate = Some(Box::new(hook));
    }
}

impl Widget for TableWidget {
    fn widget_type(&self) -> &str {
        TABLE_WIDGET_TYPE
    }

    fn widget_options(&self) -> Value {
        self.config.widget_options()
    }

    fn root_element_id(&self) -> Option<&str> {
        self.root_element_id.as_deref()
    }

    fn set_root_element_id(&mut self, id: String) {
        self.root_element_id = Some(id);
    }
}

impl HasGridStack for TableWidget {
    fn grid_stack_override(&self) -> Option<&Value> {
        self.config.grid_stack_override()
    }
}

// ----------------------------------------------------------------------------
// Event binding
// ----------------------------------------------------------------------------

/// Attach all event groups to the widget's current markup.
///
/// Must only be called on markup with no live bindings (fresh markup, or
/// right after `apply_reload` detached the previous set), so handlers never
/// stack.
pub fn attach(widget: &SharedTableWidget) -> Result<(), AdminError> {
    let root_id = widget
        .borrow()
        .root_element_id
        .clone()
        .ok_or_else(|| AdminError::MissingNode("widget root id".to_string()))?;
    let root = dom::element_by_id(&root_id)?;

    let mut bindings = EventBindings::new();
    bind(&mut bindings, &root, ".obj-edit", widget, |widget, event| {
        if let Some(obj_id) = dom::obj_id_from_event(&event) {
            navigate_edit(&widget, &obj_id);
        }
    })?;
    bind(&mut bindings, &root, ".obj-quick-edit", widget, |widget, event| {
        if let Some(obj_id) = dom::obj_id_from_event(&event) {
            quick_edit(&widget, obj_id);
        }
    })?;
    bind(&mut bindings, &root, ".obj-inline-edit", widget, |widget, event| {
        if let Some(obj_id) = dom::obj_id_from_event(&event) {
            inline_edit(&widget, obj_id);
        }
    })?;
    bind(&mut bindings, &root, ".obj-delete", widget, |widget, event| {
        if let Some(obj_id) = dom::obj_id_from_event(&event) {
            delete_object(&widget, obj_id);
        }
    })?;
    bind(&mut bindings, &root, ".list-quick-create", widget, |widget, _event| {
        quick_create(&widget);
    })?;
    bind(&mut bindings, &root, ".sublist-inline-edit", widget, |widget, _event| {
        inline_edit_checked(&widget);
    })?;

    widget.borrow_mut().bindings = Some(bindings);
    Ok(())
}

fn bind<F>(
    bindings: &mut EventBindings,
    root: &Element,
    selector: &str,
    widget: &SharedTableWidget,
    handler: F,
) -> Result<(), AdminError>
where
    F: Fn(SharedTableWidget, Event) + Copy + 'static,
{
    for element in dom::select_all(root, selector)? {
        // Weak capture: the bindings live inside the widget, a strong handle
        // here would keep the widget alive forever.
        let weak = Rc::downgrade(widget);
        bindings.on_click(&element, move |event| {
            if let Some(widget) = weak.upgrade() {
                handler(widget, event);
            }
        })?;
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Operations
// ----------------------------------------------------------------------------

/// Row edit action: resolve the row's `obj_id` and hand it to the embedding
/// page's navigation hook. No network call originates here.
pub fn navigate_edit(widget: &SharedTableWidget, obj_id: &str) {
    let widget = widget.borrow();
    match &widget.on_navigate {
        Some(hook) => hook(obj_id),
        None => log::debug!("obj-edit for {obj_id}: no navigation hook installed"),
    }
}

/// Open the quick-edit form for an existing object in the modal dialog.
pub fn quick_edit(widget: &SharedTableWidget, obj_id: String) {
    open_object_form(widget, obj_id);
}

/// Open the quick-create form for a new object in the modal dialog.
pub fn quick_create(widget: &SharedTableWidget) {
    open_object_form(widget, NEW_OBJECT_ID.to_string());
}

fn open_object_form(widget: &SharedTableWidget, obj_id: String) {
    let (ctx, obj_type) = {
        let widget = widget.borrow();
        (Rc::clone(&widget.ctx), widget.config.obj_type.clone())
    };
    spawn_local(async move {
        let options = json!({"obj_type": obj_type, "obj_id": obj_id});
        match load_widget(&ctx, OBJECT_FORM_WIDGET_TYPE, options).await {
            Ok(response) => {
                if let Err(err) = dialog::open(&response.widget_html) {
                    log::warn!("quick form dialog failed: {err}");
                }
            }
            Err(err) => {
                log::warn!("quick form load failed: {err}");
                let _ = dialog::open_error("The form could not be loaded.");
            }
        }
    });
}

/// Single-row inline edit: fetch rendered editors for the row and patch each
/// `(obj_id, property)` cell in place. Idempotent against unchanged server
/// state.
pub fn inline_edit(widget: &SharedTableWidget, obj_id: String) {
    let (ctx, obj_type) = {
        let widget = widget.borrow();
        (Rc::clone(&widget.ctx), widget.config.obj_type.clone())
    };
    let widget = Rc::clone(widget);
    spawn_local(async move {
        let request = TableInlineRequest {
            obj_type,
            obj_id: obj_id.clone(),
        };
        match protocol::post_action::<_, TableInlineResponse>(
            &ctx,
            protocol::TABLE_INLINE,
            &request,
        )
        .await
        {
            Ok(response) => {
                let patches = plan::single_row(&obj_id, &response.inline_properties);
                apply_to_root(&widget, &patches);
            }
            // Legacy behavior: the row keeps its previous state and no error
            // UI is shown; the console still records the failure.
            Err(err) => log::warn!("inline edit of {obj_id} failed: {err}"),
        }
    });
}

/// Bulk inline edit over the sublist (currently checked rows).
///
/// Rows travel as `{obj_id, element}` pairs; the response's `objects` array
/// must line up with the request one-to-one or the whole patch is refused.
pub fn inline_edit_checked(widget: &SharedTableWidget) {
    let (ctx, obj_type, root_id) = {
        let widget = widget.borrow();
        (
            Rc::clone(&widget.ctx),
            widget.config.obj_type.clone(),
            widget.root_element_id.clone(),
        )
    };
    let Some(root_id) = root_id else {
        log::warn!("bulk inline edit skipped: widget has no root");
        return;
    };
    let root = match dom::element_by_id(&root_id) {
        Ok(root) => root,
        Err(err) => {
            log::warn!("bulk inline edit skipped: {err}");
            return;
        }
    };
    let rows = match dom::checked_rows(&root) {
        Ok(rows) => rows,
        Err(err) => {
            log::warn!("bulk inline edit skipped: {err}");
            return;
        }
    };
    if rows.is_empty() {
        return;
    }

    let obj_ids: Vec<String> = rows.iter().map(|row| row.obj_id.clone()).collect();
    spawn_local(async move {
        let request = TableInlineMultiRequest {
            obj_type,
            obj_ids: obj_ids.clone(),
        };
        match protocol::post_action::<_, TableInlineMultiResponse>(
            &ctx,
            protocol::TABLE_INLINE_MULTI,
            &request,
        )
        .await
        {
            Ok(response) => match plan::bulk(&obj_ids, &response.objects) {
                Ok(patches) => apply_to_rows(&rows, &patches),
                // Correlation is unknowable; nothing was applied.
                Err(err) => log::warn!("bulk inline edit aborted: {err}"),
            },
            Err(err) => log::warn!("bulk inline edit failed: {err}"),
        }
    });
}

/// Delete one object after explicit confirmation.
///
/// The row is never removed optimistically: on success the whole widget
/// reloads so the server can recompute pagination and row counts, on failure
/// a blocking notification is raised and the grid is left untouched.
pub fn delete_object(widget: &SharedTableWidget, obj_id: String) {
    let (ctx, obj_type, confirmed) = {
        let widget = widget.borrow();
        let confirmed = (widget.confirm)("Are you sure you want to delete this object?");
        (
            Rc::clone(&widget.ctx),
            widget.config.obj_type.clone(),
            confirmed,
        )
    };
    // Nothing goes on the wire without an affirmative answer.
    if !confirmed {
        return;
    }

    let widget = Rc::clone(widget);
    spawn_local(async move {
        let request = ObjectDeleteRequest {
            obj_type,
            obj_id: obj_id.clone(),
        };
        match protocol::post_action::<_, ObjectDeleteResponse>(
            &ctx,
            protocol::OBJECT_DELETE,
            &request,
        )
        .await
        {
            Ok(_) => reload(&widget),
            Err(err) => {
                log::warn!("delete of {obj_id} failed: {err}");
                dom::alert("The object could not be deleted.");
            }
        }
    });
}

/// Re-fetch the widget's markup and swap it in place.
pub fn reload(widget: &SharedTableWidget) {
    reload_with(widget, None);
}

/// `reload` with an optional completion callback, invoked with the raw
/// response after the swap succeeded.
pub fn reload_with(
    widget: &SharedTableWidget,
    on_complete: Option<Box<dyn FnOnce(&WidgetLoadResponse)>>,
) {
    let (ctx, widget_type, options) = {
        let widget = widget.borrow();
        (
            Rc::clone(&widget.ctx),
            widget.widget_type().to_string(),
            widget.widget_options(),
        )
    };
    let widget = Rc::clone(widget);
    spawn_local(async move {
        match load_widget(&ctx, &widget_type, options).await {
            Ok(response) => match apply_reload(&widget, &response) {
                Ok(()) => {
                    if let Some(callback) = on_complete {
                        callback(&response);
                    }
                }
                Err(err) => log::warn!("reload could not swap markup: {err}"),
            },
            Err(err) => log::warn!("widget reload failed: {err}"),
        }
    });
}

/// Swap in fresh markup from an already-fetched reload response: detach
/// listeners, replace the root subtree, adopt the server-assigned root id,
/// re-attach listeners. The detach/attach pair around the replacement is
/// what keeps handlers from ever stacking.
pub fn apply_reload(
    widget: &SharedTableWidget,
    response: &WidgetLoadResponse,
) -> Result<(), AdminError> {
    {
        let mut widget = widget.borrow_mut();
        let old_id = widget
            .root_element_id
            .clone()
            .ok_or_else(|| AdminError::MissingNode("widget root id".to_string()))?;
        if let Some(mut bindings) = widget.bindings.take() {
            bindings.detach();
        }
        dom::replace_root(&old_id, &response.widget_html)?;
        // The server is authoritative and may assign a fresh id.
        widget.set_root_element_id(response.widget_id.clone());
    }
    attach(widget)
}

// ----------------------------------------------------------------------------
// Patch application
// ----------------------------------------------------------------------------

/// Apply patches against the widget's current root, re-resolved by id at
/// completion time. A root replaced by an overlapping reload makes this a
/// logged no-op.
fn apply_to_root(widget: &SharedTableWidget, patches: &[CellPatch]) {
    let root_id = match widget.borrow().root_element_id.clone() {
        Some(id) => id,
        None => {
            log::warn!("inline patch dropped: widget has no root");
            return;
        }
    };
    let root = match dom::element_by_id(&root_id) {
        Ok(root) => root,
        Err(err) => {
            log::warn!("inline patch dropped: {err}");
            return;
        }
    };
    for patch in patches {
        if let Err(err) = dom::set_cell_html(&root, &patch.obj_id, &patch.property, &patch.html) {
            log::warn!("cell ({}, {}) not patched: {err}", patch.obj_id, patch.property);
        }
    }
}

/// Apply bulk patches through the captured row pairs, skipping rows that
/// left the document while the request was in flight.
fn apply_to_rows(rows: &[dom::CheckedRow], patches: &[CellPatch]) {
    for patch in patches {
        let Some(row) = rows.iter().find(|row| row.obj_id == patch.obj_id) else {
            continue;
        };
        if !row.element.is_connected() {
            log::warn!("row {} no longer in the document, patch dropped", patch.obj_id);
            continue;
        }
        match dom::cell(&row.element, &patch.property) {
            Ok(cell) => cell.set_inner_html(&patch.html),
            Err(err) => {
                log::warn!("cell ({}, {}) not patched: {err}", patch.obj_id, patch.property)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn widget_with(config: TableConfig) -> SharedTableWidget {
        let ctx = Rc::new(AdminContext::new("https://example.com/", "admin"));
        TableWidget::new(ctx, config).shared()
    }

    #[test]
    fn table_widget_type_is_fixed() {
        let widget = widget_with(TableConfig::default());
        assert_eq!(widget.borrow().widget_type(), TABLE_WIDGET_TYPE);
    }

    #[test]
    fn root_id_comes_from_constructor_options() {
        let config: TableConfig =
            serde_json::from_value(json!({"widget_id": "widget_1"})).unwrap();
        let widget = widget_with(config);
        assert_eq!(widget.borrow().root_element_id(), Some("widget_1"));
    }

    #[test]
    fn cancelled_confirmation_issues_no_request() {
        let widget = widget_with(TableConfig::default());
        let asked = Rc::new(Cell::new(0));
        {
            let asked = Rc::clone(&asked);
            widget
                .borrow_mut()
                .set_confirm_hook(move |_| {
                    asked.set(asked.get() + 1);
                    false
                });
        }
        // Returns before any network future is even created.
        delete_object(&widget, "42".to_string());
        assert_eq!(asked.get(), 1);
    }

    #[test]
    fn navigate_resolves_id_and_delegates() {
        let widget = widget_with(TableConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            widget
                .borrow_mut()
                .set_navigate_hook(move |obj_id| seen.borrow_mut().push(obj_id.to_string()));
        }
        navigate_edit(&widget, "7");
        assert_eq!(*seen.borrow(), vec!["7".to_string()]);
    }

    #[test]
    fn widget_options_reflect_current_config() {
        let config: TableConfig = serde_json::from_value(json!({
            "obj_type": "article",
            "pagination": {"page": 2, "num_per_page": 25},
        }))
        .unwrap();
        let widget = widget_with(config);
        assert_eq!(
            widget.borrow().widget_options(),
            json!({
                "obj_type": "article",
                "properties": null,
                "properties_options": null,
                "filters": null,
                "orders": null,
                "pagination": {"page": 2, "num_per_page": 25},
            })
        );
    }
}
