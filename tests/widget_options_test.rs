// Widget options snapshot: the request body a table widget sends on reload
// must round-trip its full configurable state.

use admin_wasm::protocol::WidgetLoadRequest;
use admin_wasm::widget::table::{TableConfig, TableWidget, TABLE_WIDGET_TYPE};
use admin_wasm::{AdminContext, Widget};
use serde_json::json;
use std::rc::Rc;

fn widget(config: TableConfig) -> TableWidget {
    let ctx = Rc::new(AdminContext::new("https://example.com/", "admin"));
    TableWidget::new(ctx, config)
}

#[test]
fn reload_body_for_configured_article_grid() {
    // objType "article", pagination {page: 2, numPerPage: 25}
    let config: TableConfig = serde_json::from_value(json!({
        "obj_type": "article",
        "pagination": {"page": 2, "num_per_page": 25},
    }))
    .unwrap();
    let widget = widget(config);

    let request = WidgetLoadRequest {
        widget_type: widget.widget_type().to_string(),
        widget_options: widget.widget_options(),
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "widget_type": TABLE_WIDGET_TYPE,
            "widget_options": {
                "obj_type": "article",
                "properties": null,
                "properties_options": null,
                "filters": null,
                "orders": null,
                "pagination": {"page": 2, "num_per_page": 25},
            },
        })
    );
}

#[test]
fn default_constructed_widget_snapshot() {
    let widget = widget(TableConfig::default());
    assert_eq!(
        widget.widget_options(),
        json!({
            "obj_type": "",
            "properties": null,
            "properties_options": null,
            "filters": null,
            "orders": null,
            "pagination": {"page": 1, "num_per_page": 50},
        })
    );
}

#[test]
fn snapshot_carries_filters_and_orders_through() {
    let config: TableConfig = serde_json::from_value(json!({
        "obj_type": "news",
        "properties": ["title"],
        "filters": {"category": "press"},
        "orders": {"title": "asc"},
    }))
    .unwrap();
    let options = widget(config).widget_options();
    assert_eq!(options["filters"], json!({"category": "press"}));
    assert_eq!(options["orders"], json!({"title": "asc"}));
    assert_eq!(options["properties"], json!(["title"]));
}
