//! Recursive merge for free-form JSON configuration blocks
//!
//! Per-key behavior is deliberately explicit:
//! - object over object: merge key-by-key, recursively
//! - anything else in the override (scalar, array, `null`): replaces the
//!   default value wholesale
//! - keys present only in the default survive untouched
//!
//! The merge never mutates its inputs.

use serde_json::Value;

/// Merge `override_` over `default`, returning a new value.
pub fn merge_values(default: &Value, override_: &Value) -> Value {
    match (default, override_) {
        (Value::Object(base), Value::Object(over)) => {
            let mut merged = base.clone();
            for (key, value) in over {
                let entry = match merged.get(key) {
                    Some(existing) => merge_values(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), entry);
            }
            Value::Object(merged)
        }
        (_, over) => over.clone(),
    }
}
