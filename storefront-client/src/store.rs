//! Displayed product collection
//!
//! Keeps the list view consistent with gateway operations that already
//! succeeded. No I/O and no retries happen here.

use shared::{ProductId, ProductRecord};

/// Ordered product list keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<ProductRecord>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id == Some(id))
    }

    /// Replace everything, keeping server order (fetch/search result)
    pub fn replace_all(&mut self, records: Vec<ProductRecord>) {
        self.products = records;
    }

    /// Replace the entry with the same identifier in place, or append
    pub fn upsert(&mut self, saved: ProductRecord) {
        let position = saved
            .id
            .and_then(|id| self.products.iter().position(|p| p.id == Some(id)));
        match position {
            Some(index) => self.products[index] = saved,
            None => self.products.push(saved),
        }
    }

    /// Drop the entry with `id`; absent identifiers are ignored
    pub fn remove(&mut self, id: ProductId) {
        self.products.retain(|p| p.id != Some(id));
    }
}

impl From<Vec<ProductRecord>> for ProductStore {
    fn from(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }
}
