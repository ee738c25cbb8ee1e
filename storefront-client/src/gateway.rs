//! Product API gateway
//!
//! [`ProductGateway`] is the request/response boundary the rest of the
//! client talks to. [`DummyJsonGateway`] implements it against the
//! DummyJSON products API:
//!
//! | operation | request |
//! |-----------|---------|
//! | list_all | `GET products` |
//! | search | `GET products/search?q=…` |
//! | get | `GET products/{id}` |
//! | create | `POST products/add` |
//! | update | `PUT products/{id}` |
//! | delete | `DELETE products/{id}` |

use crate::http::HttpClient;
use crate::ClientResult;
use async_trait::async_trait;
use shared::{DeleteConfirmation, ProductId, ProductPage, ProductPayload, ProductRecord};

#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn list_all(&self) -> ClientResult<Vec<ProductRecord>>;
    async fn search(&self, term: &str) -> ClientResult<Vec<ProductRecord>>;
    async fn get(&self, id: ProductId) -> ClientResult<ProductRecord>;
    /// Server assigns the identifier of the returned record
    async fn create(&self, payload: &ProductPayload) -> ClientResult<ProductRecord>;
    async fn update(&self, id: ProductId, payload: &ProductPayload) -> ClientResult<ProductRecord>;
    async fn delete(&self, id: ProductId) -> ClientResult<DeleteConfirmation>;
}

/// Gateway over any [`HttpClient`]
#[derive(Debug, Clone)]
pub struct DummyJsonGateway<C> {
    http: C,
}

impl<C: HttpClient> DummyJsonGateway<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }
}

#[async_trait]
impl<C: HttpClient> ProductGateway for DummyJsonGateway<C> {
    async fn list_all(&self) -> ClientResult<Vec<ProductRecord>> {
        let page: ProductPage = self.http.get("products").await?;
        Ok(page.products)
    }

    async fn search(&self, term: &str) -> ClientResult<Vec<ProductRecord>> {
        let page: ProductPage = self
            .http
            .get_with_query("products/search", &[("q", term)])
            .await?;
        Ok(page.products)
    }

    async fn get(&self, id: ProductId) -> ClientResult<ProductRecord> {
        self.http.get(&format!("products/{}", id)).await
    }

    async fn create(&self, payload: &ProductPayload) -> ClientResult<ProductRecord> {
        self.http.post("products/add", payload).await
    }

    async fn update(&self, id: ProductId, payload: &ProductPayload) -> ClientResult<ProductRecord> {
        self.http.put(&format!("products/{}", id), payload).await
    }

    async fn delete(&self, id: ProductId) -> ClientResult<DeleteConfirmation> {
        self.http.delete(&format!("products/{}", id)).await
    }
}
