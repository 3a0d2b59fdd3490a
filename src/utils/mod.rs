//! Utility modules for the admin widget framework

pub mod merge;

// Re-export commonly used helpers
pub use merge::merge_values;
