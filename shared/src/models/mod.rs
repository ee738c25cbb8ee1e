//! Data models
//!
//! Product shapes exchanged with the product API, plus the form draft.
//! JSON field names are camelCase to match the remote service.

pub mod draft;
pub mod product;

// Re-exports
pub use draft::*;
pub use product::*;
