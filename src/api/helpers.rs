//! Shared helpers for the WASM API boundary
//!
//! Common patterns for moving values across the JS boundary with error
//! context: a failure is wrapped as `AdminError::Serialization` naming the
//! operation that failed, logged to the console, and surfaced to the caller
//! as a `JsValue` error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::AdminError;

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let err = AdminError::Serialization(format!("{error_context}: {e}"));
        log::error!("{err}");
        JsValue::from(err)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let err = AdminError::Serialization(format!("{error_context}: {e}"));
        log::error!("{err}");
        JsValue::from(err)
    })
}
