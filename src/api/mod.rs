//! JavaScript-facing API for the admin widget framework
//!
//! The embedding admin page drives widgets through the exported handles in
//! this module. Constructor options arrive as plain JS objects and are
//! deserialized through the shared helpers.
//!
//! # Module Structure
//!
//! - `helpers`: serialization and error-context utilities for the JS boundary
//! - `table`: the exported `TableWidget` handle

pub mod helpers;
pub mod table;

pub use table::TableWidgetHandle;
