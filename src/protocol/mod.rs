//! Wire protocol for the admin action endpoints
//!
//! All actions are JSON POSTs resolved against the page's `AdminContext`.
//! Every response carries at least a `success` flag; a `success: false` body
//! is reported as `AdminError::Server`, distinct from transport failures.

pub mod client;
pub mod envelope;

pub use client::post_action;
pub use envelope::{
    ActionResponse, InlineObject, ObjectDeleteRequest, ObjectDeleteResponse, TableInlineRequest,
    TableInlineResponse, TableInlineMultiRequest, TableInlineMultiResponse, WidgetLoadRequest,
    WidgetLoadResponse,
};

/// Re-render a widget from its `widget_type` + `widget_options` snapshot.
pub const WIDGET_LOAD: &str = "action/json/widget/load";
/// Render inline editors for a single table row.
pub const TABLE_INLINE: &str = "action/json/widget/table/inline";
/// Render inline editors for a set of table rows, order-correlated.
pub const TABLE_INLINE_MULTI: &str = "action/json/widget/table/inlinemulti";
/// Delete one object.
pub const OBJECT_DELETE: &str = "action/json/object/delete";
