// Grid-stack placement: defaults, per-key override merge, and pass-through
// of extra placement keys, as seen from a real widget configuration.

use admin_wasm::widget::table::TableConfig;
use admin_wasm::GridLayoutDecorator;
use serde_json::json;

fn config_with_grid_stack(grid_stack: serde_json::Value) -> TableConfig {
    serde_json::from_value(json!({
        "obj_type": "article",
        "grid_stack": grid_stack,
    }))
    .unwrap()
}

#[test]
fn widget_without_grid_stack_gets_defaults() {
    let config: TableConfig = serde_json::from_value(json!({"obj_type": "article"})).unwrap();
    let decorator = GridLayoutDecorator::new(config);
    let layout = decorator.grid_stack();
    assert_eq!(layout.width, 4);
    assert_eq!(layout.height, 4);
    assert!(layout.extra.is_empty());
}

#[test]
fn width_override_keeps_default_height() {
    let decorator = GridLayoutDecorator::new(config_with_grid_stack(json!({"width": 6})));
    let layout = decorator.grid_stack();
    assert_eq!(layout.width, 6);
    assert_eq!(layout.height, 4);
}

#[test]
fn extra_placement_keys_survive_the_merge() {
    let decorator = GridLayoutDecorator::new(config_with_grid_stack(
        json!({"width": 8, "x": 2, "y": 0, "no_resize": true}),
    ));
    let layout = decorator.grid_stack();
    assert_eq!(layout.width, 8);
    assert_eq!(layout.extra.get("x"), Some(&json!(2)));
    assert_eq!(layout.extra.get("y"), Some(&json!(0)));
    assert_eq!(layout.extra.get("no_resize"), Some(&json!(true)));
}

#[test]
fn decoration_does_not_mutate_the_widget_config() {
    let config = config_with_grid_stack(json!({"height": 2}));
    let snapshot = config.clone();
    let decorator = GridLayoutDecorator::new(config);
    let _ = decorator.grid_stack();
    assert_eq!(decorator.inner(), &snapshot);
}
