//! Request/response envelopes for the admin action endpoints
//!
//! Field names here are the wire contract with the server-side renderers;
//! they are snake_case on the wire and must not drift.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every action response carries a `success` flag.
pub trait ActionResponse: DeserializeOwned {
    fn success(&self) -> bool;
}

// ----------------------------------------------------------------------------
// action/json/widget/load
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct WidgetLoadRequest {
    pub widget_type: String,
    pub widget_options: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WidgetLoadResponse {
    pub success: bool,
    /// Freshly rendered markup for the whole widget.
    #[serde(default)]
    pub widget_html: String,
    /// Server-assigned root element id. Authoritative: it may differ from the
    /// id the widget had before the reload.
    #[serde(default)]
    pub widget_id: String,
}

impl ActionResponse for WidgetLoadResponse {
    fn success(&self) -> bool {
        self.success
    }
}

// ----------------------------------------------------------------------------
// action/json/widget/table/inline
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct TableInlineRequest {
    pub obj_type: String,
    pub obj_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableInlineResponse {
    pub success: bool,
    /// Property name to rendered HTML fragment, applied cell-by-cell.
    #[serde(default)]
    pub inline_properties: BTreeMap<String, String>,
}

impl ActionResponse for TableInlineResponse {
    fn success(&self) -> bool {
        self.success
    }
}

// ----------------------------------------------------------------------------
// action/json/widget/table/inlinemulti
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct TableInlineMultiRequest {
    pub obj_type: String,
    pub obj_ids: Vec<String>,
}

/// One entry of an `inlinemulti` response, correlated by position with the
/// request's `obj_ids`.
#[derive(Debug, Clone, Deserialize)]
pub struct InlineObject {
    #[serde(default)]
    pub inline_properties: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableInlineMultiResponse {
    pub success: bool,
    #[serde(default)]
    pub objects: Vec<InlineObject>,
}

impl ActionResponse for TableInlineMultiResponse {
    fn success(&self) -> bool {
        self.success
    }
}

// ----------------------------------------------------------------------------
// action/json/object/delete
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ObjectDeleteRequest {
    pub obj_type: String,
    pub obj_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectDeleteResponse {
    pub success: bool,
}

impl ActionResponse for ObjectDeleteResponse {
    fn success(&self) -> bool {
        self.success
    }
}
