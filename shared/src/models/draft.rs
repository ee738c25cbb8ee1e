//! Product form draft
//!
//! The editable subset of [`ProductRecord`]. Numeric inputs are kept as
//! `f64` so that malformed text survives as `NaN` and is reported by
//! validation instead of being rejected at input time.

use super::product::ProductRecord;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// In-progress, not-yet-validated product fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: f64,
    pub brand: String,
    pub category: String,
}

/// A single field replacement
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Title(String),
    Description(String),
    Price(f64),
    DiscountPercentage(f64),
    Rating(f64),
    Stock(f64),
    Brand(String),
    Category(String),
}

impl FieldValue {
    /// Parse a textual `name`/`raw` pair.
    ///
    /// Accepts both camelCase and snake_case names. Numeric fields never
    /// fail here: unparseable input becomes `NaN`.
    pub fn parse(name: &str, raw: &str) -> AppResult<Self> {
        let value = match name {
            "title" => FieldValue::Title(raw.to_string()),
            "description" => FieldValue::Description(raw.to_string()),
            "price" => FieldValue::Price(parse_number(raw)),
            "discountPercentage" | "discount_percentage" | "discount" => {
                FieldValue::DiscountPercentage(parse_number(raw))
            }
            "rating" => FieldValue::Rating(parse_number(raw)),
            "stock" => FieldValue::Stock(parse_number(raw)),
            "brand" => FieldValue::Brand(raw.to_string()),
            "category" => FieldValue::Category(raw.to_string()),
            other => return Err(AppError::unknown_field(other)),
        };
        Ok(value)
    }

    /// Parse a `name=value` assignment
    pub fn parse_assignment(input: &str) -> AppResult<Self> {
        let (name, raw) = input.split_once('=').ok_or_else(|| {
            AppError::invalid_request(format!("Expected name=value, got '{}'", input))
                .with_detail("input", input)
        })?;
        Self::parse(name.trim(), raw)
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

impl ProductDraft {
    /// Draft pre-filled from an existing record
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            price: record.price,
            discount_percentage: record.discount_percentage,
            rating: record.rating,
            stock: record.stock as f64,
            brand: record.brand.clone(),
            category: record.category.clone(),
        }
    }

    /// Replace one field; no validation
    pub fn set(&mut self, value: FieldValue) {
        match value {
            FieldValue::Title(v) => self.title = v,
            FieldValue::Description(v) => self.description = v,
            FieldValue::Price(v) => self.price = v,
            FieldValue::DiscountPercentage(v) => self.discount_percentage = v,
            FieldValue::Rating(v) => self.rating = v,
            FieldValue::Stock(v) => self.stock = v,
            FieldValue::Brand(v) => self.brand = v,
            FieldValue::Category(v) => self.category = v,
        }
    }

    /// Overwrite every form field of `original`, keeping the rest
    /// (identifier, images, server-managed fields).
    ///
    /// The record keeps stock as an integer, so the draft value is rounded.
    pub fn merge_into(self, mut original: ProductRecord) -> ProductRecord {
        original.title = self.title;
        original.description = self.description;
        original.price = self.price;
        original.discount_percentage = self.discount_percentage;
        original.rating = self.rating;
        original.stock = self.stock.round() as i64;
        original.brand = self.brand;
        original.category = self.category;
        original
    }

    /// Fresh record built from the draft alone, without identifier
    pub fn into_record(self) -> ProductRecord {
        self.merge_into(ProductRecord::default())
    }
}
