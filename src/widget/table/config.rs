//! Table widget configuration
//!
//! The configuration doubles as the widget's `widget_options` snapshot: it is
//! the complete, idempotent description the server needs to re-render the
//! same grid (columns, filters, sort order, pagination).

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::layout::HasGridStack;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_NUM_PER_PAGE: u32 = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_num_per_page")]
    pub num_per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: DEFAULT_PAGE,
            num_per_page: DEFAULT_NUM_PER_PAGE,
        }
    }
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_num_per_page() -> u32 {
    DEFAULT_NUM_PER_PAGE
}

/// Constructor options for a table widget, merged over these defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// The domain entity type the grid lists.
    #[serde(default)]
    pub obj_type: String,

    /// DOM id of the already-rendered widget container, if known.
    #[serde(default)]
    pub widget_id: Option<String>,

    /// Which columns to show.
    #[serde(default)]
    pub properties: Option<Vec<String>>,

    /// Per-column display options.
    #[serde(default)]
    pub properties_options: Option<Value>,

    /// Query constraints passed through to the server on every reload.
    #[serde(default)]
    pub filters: Option<Value>,

    /// Sort order passed through to the server on every reload.
    #[serde(default)]
    pub orders: Option<Value>,

    #[serde(default)]
    pub pagination: Pagination,

    /// Optional dashboard placement override block.
    #[serde(default)]
    pub grid_stack: Option<Value>,
}

impl TableConfig {
    /// The widget's `widget_options` snapshot.
    ///
    /// Always exactly `{obj_type, properties, properties_options, filters,
    /// orders, pagination}` — it round-trips the grid's configurable state
    /// and nothing else (`widget_id` and `grid_stack` are client-side
    /// concerns).
    pub fn widget_options(&self) -> Value {
        json!({
            "obj_type": self.obj_type,
            "properties": self.properties,
            "properties_options": self.properties_options,
            "filters": self.filters,
            "orders": self.orders,
            "pagination": self.pagination,
        })
    }
}

impl HasGridStack for TableConfig {
    fn grid_stack_override(&self) -> Option<&Value> {
        self.grid_stack.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_yield_defaults() {
        let config: TableConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config.obj_type, "");
        assert_eq!(config.pagination.page, 1);
        assert_eq!(config.pagination.num_per_page, 50);
        assert!(config.properties.is_none());
        assert!(config.filters.is_none());
        assert!(config.orders.is_none());
    }

    #[test]
    fn partial_pagination_fills_missing_keys() {
        let config: TableConfig =
            serde_json::from_value(json!({"pagination": {"page": 3}})).unwrap();
        assert_eq!(config.pagination.page, 3);
        assert_eq!(config.pagination.num_per_page, 50);
    }

    #[test]
    fn widget_options_round_trips_configured_state() {
        let config: TableConfig = serde_json::from_value(json!({
            "obj_type": "article",
            "widget_id": "widget_1",
            "properties": ["title", "status"],
            "filters": {"active": true},
            "pagination": {"page": 2, "num_per_page": 25},
        }))
        .unwrap();

        assert_eq!(
            config.widget_options(),
            json!({
                "obj_type": "article",
                "properties": ["title", "status"],
                "properties_options": null,
                "filters": {"active": true},
                "orders": null,
                "pagination": {"page": 2, "num_per_page": 25},
            })
        );
    }

    #[test]
    fn widget_options_omit_client_side_fields() {
        let config: TableConfig = serde_json::from_value(json!({
            "widget_id": "widget_1",
            "grid_stack": {"width": 6},
        }))
        .unwrap();
        let options = config.widget_options();
        assert!(options.get("widget_id").is_none());
        assert!(options.get("grid_stack").is_none());
    }
}
