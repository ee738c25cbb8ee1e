//! Storefront Client - product admin over the DummyJSON API
//!
//! Gateway, displayed list, add/edit form and the session that wires
//! them together.

pub mod config;
pub mod error;
pub mod form;
pub mod gateway;
pub mod http;
pub mod store;
pub mod storefront;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{ProductForm, SubmitOutcome};
pub use gateway::{DummyJsonGateway, ProductGateway};
pub use http::{HttpClient, NetworkHttpClient};
pub use store::ProductStore;
pub use storefront::{FormSubmission, Storefront};

// Re-export shared types for convenience
pub use shared::{FieldErrors, FieldValue, ProductField, ProductId, ProductRecord};

/// Session against the configured remote API
pub type RemoteStorefront = Storefront<DummyJsonGateway<NetworkHttpClient>>;

impl RemoteStorefront {
    pub fn connect(config: &ClientConfig) -> ClientResult<Self> {
        let http = config.build_http_client()?;
        Ok(Storefront::new(DummyJsonGateway::new(http)))
    }
}
