//! Error types for widget operations
//!
//! Failures are handled locally at the operation that issued the request;
//! there is no centralized error channel. The variants distinguish transport
//! failures, application-level failures (`success: false`), correlation
//! failures in bulk responses, and missing DOM targets.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level error type for admin widget operations
#[derive(Debug, Clone, Error)]
pub enum AdminError {
    /// Network failure or a response body that could not be decoded
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// The server answered, but reported `success: false`
    #[error("server reported failure for {endpoint}")]
    Server { endpoint: String },

    /// A bulk response does not line up with the rows that were sent
    #[error("bulk edit response out of step: sent {requested} rows, received {received}")]
    Correlation { requested: usize, received: usize },

    /// A DOM node this operation needs is no longer in the document
    #[error("element not found: {0}")]
    MissingNode(String),

    /// Widget options or a wire envelope failed to (de)serialize
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<AdminError> for JsValue {
    fn from(err: AdminError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
