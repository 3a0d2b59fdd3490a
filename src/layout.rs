//! Dashboard grid-stack layout
//!
//! Widgets placed on a dashboard may carry an optional `grid_stack`
//! configuration block. The decorator merges that block over the class-level
//! defaults (`width: 4`, `height: 4`) and hands out the resulting placement
//! descriptor. The result is computed lazily on first access and cached for
//! the lifetime of the decorator; a widget whose `grid_stack` changes after
//! decoration requires a new decorator.

use std::collections::BTreeMap;

use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::utils::merge_values;

pub const DEFAULT_GRID_WIDTH: u64 = 4;
pub const DEFAULT_GRID_HEIGHT: u64 = 4;

/// Anything that may declare a `grid_stack` override block.
pub trait HasGridStack {
    fn grid_stack_override(&self) -> Option<&Value>;
}

/// Merged, defaulted placement descriptor for a dashboard widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridStackLayout {
    pub width: u64,
    pub height: u64,
    /// Additional placement keys supplied by the widget, passed through as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for GridStackLayout {
    fn default() -> Self {
        GridStackLayout {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            extra: BTreeMap::new(),
        }
    }
}

impl GridStackLayout {
    /// Build a layout from an already-merged configuration value.
    ///
    /// Non-numeric `width`/`height` entries fall back to the defaults rather
    /// than failing; absence of an override block is not an error.
    fn from_merged(value: &Value) -> Self {
        let width = value
            .get("width")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_GRID_WIDTH);
        let height = value
            .get("height")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_GRID_HEIGHT);
        let extra = match value {
            Value::Object(map) => map
                .iter()
                .filter(|(key, _)| key.as_str() != "width" && key.as_str() != "height")
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
            _ => BTreeMap::new(),
        };
        GridStackLayout { width, height, extra }
    }
}

/// Wraps a widget-like value and produces its merged grid-stack layout.
///
/// The decorator never mutates the value it wraps.
pub struct GridLayoutDecorator<W> {
    widget: W,
    cached: OnceCell<GridStackLayout>,
}

impl<W: HasGridStack> GridLayoutDecorator<W> {
    pub fn new(widget: W) -> Self {
        GridLayoutDecorator {
            widget,
            cached: OnceCell::new(),
        }
    }

    /// The merged layout, guaranteed to contain at least `width` and
    /// `height`. Memoized: the merge runs once per decorator instance.
    pub fn grid_stack(&self) -> &GridStackLayout {
        self.cached.get_or_init(|| {
            let defaults = json!({
                "width": DEFAULT_GRID_WIDTH,
                "height": DEFAULT_GRID_HEIGHT,
            });
            let merged = match self.widget.grid_stack_override() {
                Some(over) => merge_values(&defaults, over),
                None => defaults,
            };
            GridStackLayout::from_merged(&merged)
        })
    }

    pub fn inner(&self) -> &W {
        &self.widget
    }

    pub fn into_inner(self) -> W {
        self.widget
    }
}
