//! Widget abstraction and shared reload plumbing
//!
//! A widget is a server-rendered admin component: the server owns the markup,
//! the client owns the lifecycle. Concrete widgets implement the `Widget`
//! trait and reuse `load_widget` for the reload round-trip; what to do with
//! the fresh markup (swap the root, fill a dialog) is the concrete widget's
//! decision, not the base plumbing's.

pub mod table;

use serde_json::Value;

use crate::context::AdminContext;
use crate::error::AdminError;
use crate::protocol::{self, WidgetLoadRequest, WidgetLoadResponse};

/// A server-rendered admin component.
pub trait Widget {
    /// Identifies the server-side renderer for this widget's markup.
    fn widget_type(&self) -> &str;

    /// A JSON-serializable snapshot of everything the server needs to
    /// reproduce this widget's current rendering.
    fn widget_options(&self) -> Value;

    /// DOM id of the widget's container. May change after a reload; the
    /// server is authoritative.
    fn root_element_id(&self) -> Option<&str>;

    fn set_root_element_id(&mut self, id: String);
}

/// Ask the server to render a widget from its type and options snapshot.
///
/// On failure nothing is mutated and no retry is made; the error is returned
/// to the caller to act on (or not).
pub async fn load_widget(
    ctx: &AdminContext,
    widget_type: &str,
    widget_options: Value,
) -> Result<WidgetLoadResponse, AdminError> {
    let request = WidgetLoadRequest {
        widget_type: widget_type.to_string(),
        widget_options,
    };
    protocol::post_action(ctx, protocol::WIDGET_LOAD, &request).await
}
