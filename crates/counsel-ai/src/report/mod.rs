//! Serializable report view models consumed by the formatting layer.

mod summary;
pub mod views;

pub use summary::{format_gpa, StudentReport, NOT_APPLICABLE};
