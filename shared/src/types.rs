//! Common types for the shared crate

/// Server-assigned product identifier
pub type ProductId = i64;
