//! List view session
//!
//! Owns a [`ProductGateway`] and the [`ProductStore`] it feeds. Each
//! handler performs one gateway call and applies the response to the
//! store only after the call succeeded; on failure the store is left as
//! it was and the error goes back to the caller.

use crate::form::ProductForm;
use crate::gateway::ProductGateway;
use crate::store::ProductStore;
use crate::ClientResult;
use shared::{FieldErrors, ProductId, ProductRecord};

/// Result of [`Storefront::submit_form`]
#[derive(Debug, Clone, PartialEq)]
pub enum FormSubmission {
    /// Record as returned by the server
    Saved(ProductRecord),
    /// Draft rejected, nothing was sent
    Invalid(FieldErrors),
}

pub struct Storefront<G> {
    gateway: G,
    store: ProductStore,
}

impl<G: ProductGateway> Storefront<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_store(gateway, ProductStore::new())
    }

    pub fn with_store(gateway: G, store: ProductStore) -> Self {
        Self { gateway, store }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn products(&self) -> &[ProductRecord] {
        self.store.products()
    }

    /// Fetch the full catalogue
    pub async fn load(&mut self) -> ClientResult<()> {
        let products = self
            .gateway
            .list_all()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to load products"))?;
        tracing::debug!(count = products.len(), "Products loaded");
        self.store.replace_all(products);
        Ok(())
    }

    /// Replace the list with the search results for `term`
    pub async fn search(&mut self, term: &str) -> ClientResult<()> {
        let products = self
            .gateway
            .search(term)
            .await
            .inspect_err(|e| tracing::warn!(term, error = %e, "Product search failed"))?;
        tracing::debug!(term, count = products.len(), "Search results loaded");
        self.store.replace_all(products);
        Ok(())
    }

    /// Fetch one product for the detail view; the list is not touched
    pub async fn details(&self, id: ProductId) -> ClientResult<ProductRecord> {
        self.gateway
            .get(id)
            .await
            .inspect_err(|e| tracing::warn!(id, error = %e, "Failed to fetch product"))
    }

    /// Create or update `record`, then reconcile the server response
    pub async fn save(&mut self, record: ProductRecord) -> ClientResult<ProductRecord> {
        let payload = record.payload();
        let saved = match record.id {
            None => {
                let created = self
                    .gateway
                    .create(&payload)
                    .await
                    .inspect_err(|e| tracing::warn!(error = %e, "Failed to create product"))?;
                tracing::info!(id = ?created.id, title = %created.title, "Product created");
                created
            }
            Some(id) => {
                let mut updated = self
                    .gateway
                    .update(id, &payload)
                    .await
                    .inspect_err(|e| tracing::warn!(id, error = %e, "Failed to update product"))?;
                if updated.id.is_none() {
                    updated.id = Some(id);
                }
                tracing::info!(id, title = %updated.title, "Product updated");
                updated
            }
        };
        self.store.upsert(saved.clone());
        Ok(saved)
    }

    /// Delete on the server, then drop it from the list.
    ///
    /// A product the server no longer knows is already gone, so a
    /// not-found answer also removes the row and succeeds.
    pub async fn delete(&mut self, id: ProductId) -> ClientResult<()> {
        match self.gateway.delete(id).await {
            Ok(confirmation) => {
                tracing::info!(id, deleted = confirmation.is_deleted, "Product deleted");
            }
            Err(e) if e.is_not_found() => {
                tracing::info!(id, "Product already gone on the server");
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "Failed to delete product");
                return Err(e);
            }
        }
        self.store.remove(id);
        Ok(())
    }

    /// Run the form's submit and save the resulting record
    pub async fn submit_form(&mut self, form: &mut ProductForm) -> ClientResult<FormSubmission> {
        match form.finalize() {
            Ok(record) => Ok(FormSubmission::Saved(self.save(record).await?)),
            Err(errors) => Ok(FormSubmission::Invalid(errors)),
        }
    }
}
