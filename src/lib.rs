//! Admin Back-Office Widget Framework WASM Module
//!
//! This is the main WASM module for the admin back-office UI layer. It manages
//! server-rendered widgets (most commonly the table widget) over a small AJAX
//! protocol: a widget is identified by a `widget_type` and a serializable
//! `widget_options` snapshot, and can re-fetch and swap its own markup at any
//! time without a page navigation.

pub mod api;
pub mod context;
pub mod dialog;
pub mod dom;
pub mod error;
pub mod events;
pub mod layout;
pub mod protocol;
pub mod utils;
pub mod widget;

// Re-export commonly used types
pub use context::AdminContext;
pub use error::AdminError;
pub use layout::{GridLayoutDecorator, GridStackLayout, HasGridStack};
pub use widget::table::{TableConfig, TableWidget};
pub use widget::Widget;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Admin widget WASM module initialized");
}
