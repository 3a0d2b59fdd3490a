//! Exported table widget handle
//!
//! One handle per embedded grid. The constructor installs (or reuses) the
//! page's `AdminContext`, deserializes the widget options, and binds the
//! event groups to the already-rendered markup; the server-rendered page is
//! expected to contain the widget's root element before the handle is built.

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::api::helpers;
use crate::context::AdminContext;
use crate::layout::GridLayoutDecorator;
use crate::widget::table::{self, SharedTableWidget, TableConfig, TableWidget};
use crate::widget::Widget;

#[wasm_bindgen(js_name = TableWidget)]
pub struct TableWidgetHandle {
    inner: SharedTableWidget,
}

#[wasm_bindgen(js_class = TableWidget)]
impl TableWidgetHandle {
    /// Build a table widget over already-rendered markup.
    ///
    /// # Parameters
    /// - `base_url`: site base URL, e.g. `"https://example.com/"`
    /// - `admin_path`: admin path segment, e.g. `"admin"`
    /// - `options`: widget constructor options (`obj_type`, `widget_id`,
    ///   `properties`, `properties_options`, `filters`, `orders`,
    ///   `pagination`, `grid_stack`), merged over the class defaults
    #[wasm_bindgen(constructor)]
    pub fn new(
        base_url: String,
        admin_path: String,
        options: JsValue,
    ) -> Result<TableWidgetHandle, JsValue> {
        let ctx = AdminContext::install(base_url, admin_path);
        let config: TableConfig = helpers::deserialize(options, "invalid table widget options")?;
        let widget = TableWidget::new(Rc::clone(&ctx), config).shared();
        table::attach(&widget)?;
        Ok(TableWidgetHandle { inner: widget })
    }

    /// Re-fetch the widget's markup and swap it in place.
    pub fn reload(&self) {
        table::reload(&self.inner);
    }

    /// Inline-edit one row by its `obj_id`.
    #[wasm_bindgen(js_name = inlineEdit)]
    pub fn inline_edit(&self, obj_id: String) {
        table::inline_edit(&self.inner, obj_id);
    }

    /// Inline-edit every currently checked row.
    #[wasm_bindgen(js_name = inlineEditChecked)]
    pub fn inline_edit_checked(&self) {
        table::inline_edit_checked(&self.inner);
    }

    /// Open the quick-edit form for an existing object.
    #[wasm_bindgen(js_name = quickEdit)]
    pub fn quick_edit(&self, obj_id: String) {
        table::quick_edit(&self.inner, obj_id);
    }

    /// Open the quick-create form for a new object.
    #[wasm_bindgen(js_name = quickCreate)]
    pub fn quick_create(&self) {
        table::quick_create(&self.inner);
    }

    /// Delete an object after confirmation, then reload on success.
    #[wasm_bindgen(js_name = deleteObject)]
    pub fn delete_object(&self, obj_id: String) {
        table::delete_object(&self.inner, obj_id);
    }

    /// The widget's current `widget_options` snapshot, as sent on reload.
    #[wasm_bindgen(js_name = widgetOptions)]
    pub fn widget_options(&self) -> Result<JsValue, JsValue> {
        helpers::serialize(
            &self.inner.borrow().widget_options(),
            "widget options not serializable",
        )
    }

    /// Current root element id (the server may change it on reload).
    #[wasm_bindgen(js_name = rootElementId)]
    pub fn root_element_id(&self) -> Option<String> {
        self.inner.borrow().root_element_id().map(str::to_string)
    }

    /// Merged dashboard placement descriptor for this widget.
    #[wasm_bindgen(js_name = gridStack)]
    pub fn grid_stack(&self) -> Result<JsValue, JsValue> {
        let decorator = GridLayoutDecorator::new(self.inner.borrow().config().clone());
        helpers::serialize(decorator.grid_stack(), "grid stack layout not serializable")
    }
}
