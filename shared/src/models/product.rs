//! Product Model

use crate::types::ProductId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Product entity
///
/// A record without `id` has never been persisted. Once the API returns
/// the created record it carries a server-assigned `id` and every further
/// save goes through the update path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    /// Image URLs, first one is the display thumbnail
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Server-managed fields the form never touches (tags, sku, reviews, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductRecord {
    /// True if the record has not been persisted yet
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Image shown in list and detail views
    pub fn display_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .or(self.thumbnail.as_deref())
    }

    /// Request body for create/update: the record without its identifier
    pub fn payload(&self) -> ProductPayload {
        ProductPayload::from(self.clone())
    }
}

/// Create/update request body
///
/// Wraps a record whose `id` has been stripped, so it can never leak
/// into the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProductPayload(ProductRecord);

impl ProductPayload {
    pub fn record(&self) -> &ProductRecord {
        &self.0
    }
}

impl From<ProductRecord> for ProductPayload {
    fn from(mut record: ProductRecord) -> Self {
        record.id = None;
        Self(record)
    }
}

/// List/search response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Delete response: the removed product plus deletion markers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_on: Option<String>,
    #[serde(flatten)]
    pub product: ProductRecord,
}
