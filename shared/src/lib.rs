//! Shared types for the storefront admin
//!
//! Product record model, draft validation and the common error type.
//! Nothing in this crate performs I/O; it is used by both the HTTP
//! client and the command line front end.

pub mod error;
pub mod models;
pub mod types;
pub mod validation;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use models::{DeleteConfirmation, FieldValue, ProductDraft, ProductPage, ProductPayload, ProductRecord};
pub use serde::{Deserialize, Serialize};
pub use types::ProductId;
pub use validation::{FieldErrors, ProductField, validate};
