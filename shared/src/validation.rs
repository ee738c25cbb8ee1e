//! Product draft validation
//!
//! Field rules checked before a draft may be saved:
//!
//! | field | rule |
//! |-------|------|
//! | title | non-blank after trim, 3..=50 characters |
//! | price | finite, 0 < price <= 10000 |
//! | stock | finite, 0..=1000 |
//! | brand | letters and whitespace only, 2..=30 characters |
//! | category | non-blank after trim, 3..=30 characters |
//!
//! `description`, `discountPercentage` and `rating` are accepted as-is.
//! Lengths are counted in characters, not bytes.

use crate::models::ProductDraft;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static BRAND_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z\s]+$").expect("brand pattern is a valid regex")
});

pub const TITLE_LEN: (usize, usize) = (3, 50);
pub const CATEGORY_LEN: (usize, usize) = (3, 30);
pub const BRAND_LEN: (usize, usize) = (2, 30);
pub const MAX_PRICE: f64 = 10_000.0;
pub const MAX_STOCK: f64 = 1_000.0;

/// Validated form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductField {
    Title,
    Price,
    Stock,
    Brand,
    Category,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Title,
        ProductField::Price,
        ProductField::Stock,
        ProductField::Brand,
        ProductField::Category,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProductField::Title => "title",
            ProductField::Price => "price",
            ProductField::Stock => "stock",
            ProductField::Brand => "brand",
            ProductField::Category => "category",
        }
    }

    /// Inline message shown next to the input
    pub fn message(&self) -> &'static str {
        match self {
            ProductField::Title => "Title is required and should be between 3 to 50 characters",
            ProductField::Price => "Price is required and should be between 0 to 10000",
            ProductField::Stock => "Stock is required and should be between 0 to 1000",
            ProductField::Brand => {
                "Brand is required and should be a valid name with 2 to 30 characters"
            }
            ProductField::Category => {
                "Category is required and should be between 3 to 30 characters"
            }
        }
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-field "is invalid" flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub title: bool,
    pub price: bool,
    pub stock: bool,
    pub brand: bool,
    pub category: bool,
}

impl FieldErrors {
    pub fn get(&self, field: ProductField) -> bool {
        match field {
            ProductField::Title => self.title,
            ProductField::Price => self.price,
            ProductField::Stock => self.stock,
            ProductField::Brand => self.brand,
            ProductField::Category => self.category,
        }
    }

    pub fn set(&mut self, field: ProductField, invalid: bool) {
        match field {
            ProductField::Title => self.title = invalid,
            ProductField::Price => self.price = invalid,
            ProductField::Stock => self.stock = invalid,
            ProductField::Brand => self.brand = invalid,
            ProductField::Category => self.category = invalid,
        }
    }

    /// True when no field is flagged
    pub fn is_valid(&self) -> bool {
        ProductField::ALL.iter().all(|f| !self.get(*f))
    }

    /// Flagged fields in form order
    pub fn invalid_fields(&self) -> Vec<ProductField> {
        ProductField::ALL
            .into_iter()
            .filter(|f| self.get(*f))
            .collect()
    }

    /// Message for `field`, or `None` if it passed
    pub fn message(&self, field: ProductField) -> Option<&'static str> {
        self.get(field).then(|| field.message())
    }
}

/// Check a draft against every field rule
///
/// Total and side-effect free; every rule is evaluated so all failing
/// fields are reported together.
pub fn validate(draft: &ProductDraft) -> FieldErrors {
    FieldErrors {
        title: !title_is_valid(&draft.title),
        price: !price_is_valid(draft.price),
        stock: !stock_is_valid(draft.stock),
        brand: !brand_is_valid(&draft.brand),
        category: !category_is_valid(&draft.category),
    }
}

fn char_len_within(value: &str, (min, max): (usize, usize)) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

pub fn title_is_valid(title: &str) -> bool {
    !title.trim().is_empty() && char_len_within(title, TITLE_LEN)
}

pub fn price_is_valid(price: f64) -> bool {
    price.is_finite() && price > 0.0 && price <= MAX_PRICE
}

pub fn stock_is_valid(stock: f64) -> bool {
    stock.is_finite() && (0.0..=MAX_STOCK).contains(&stock)
}

/// Pattern and length are independent checks.
///
/// An all-whitespace brand of two or more characters passes both.
pub fn brand_is_valid(brand: &str) -> bool {
    let matches_pattern = BRAND_PATTERN.is_match(brand);
    let length_ok = char_len_within(brand, BRAND_LEN);
    matches_pattern && length_ok
}

pub fn category_is_valid(category: &str) -> bool {
    !category.trim().is_empty() && char_len_within(category, CATEGORY_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            title: "Phone".into(),
            price: 500.0,
            stock: 10.0,
            brand: "Acme".into(),
            category: "Electronics".into(),
            ..Default::default()
        }
    }

    fn only_invalid(errors: FieldErrors, field: ProductField) {
        assert_eq!(errors.invalid_fields(), vec![field], "errors: {:?}", errors);
    }

    #[test]
    fn test_valid_draft_passes() {
        let errors = validate(&valid_draft());
        assert!(errors.is_valid());
        assert!(errors.invalid_fields().is_empty());
    }

    #[test]
    fn test_default_draft_fails_required_fields() {
        // Empty strings and zeros, as the add form starts out
        let errors = validate(&ProductDraft::default());
        assert_eq!(
            errors.invalid_fields(),
            vec![
                ProductField::Title,
                ProductField::Price,
                ProductField::Brand,
                ProductField::Category
            ]
        );
        assert!(!errors.stock);
    }

    #[test]
    fn test_title_boundaries() {
        for (len, ok) in [(2, false), (3, true), (50, true), (51, false)] {
            let mut draft = valid_draft();
            draft.title = "a".repeat(len);
            assert_eq!(validate(&draft).is_valid(), ok, "title length {}", len);
            if !ok {
                only_invalid(validate(&draft), ProductField::Title);
            }
        }
    }

    #[test]
    fn test_title_blank() {
        let mut draft = valid_draft();
        draft.title = "     ".into();
        only_invalid(validate(&draft), ProductField::Title);
    }

    #[test]
    fn test_title_counts_characters() {
        let mut draft = valid_draft();
        // 3 characters, 6 bytes
        draft.title = "äöü".into();
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn test_price_boundaries() {
        for (price, ok) in [
            (0.0, false),
            (-1.0, false),
            (0.01, true),
            (10_000.0, true),
            (10_001.0, false),
            (f64::NAN, false),
            (f64::INFINITY, false),
        ] {
            let mut draft = valid_draft();
            draft.price = price;
            assert_eq!(validate(&draft).is_valid(), ok, "price {}", price);
            if !ok {
                only_invalid(validate(&draft), ProductField::Price);
            }
        }
    }

    #[test]
    fn test_stock_boundaries() {
        for (stock, ok) in [
            (0.0, true),
            (1_000.0, true),
            (1_001.0, false),
            (-1.0, false),
            (2.5, true),
            (f64::NAN, false),
        ] {
            let mut draft = valid_draft();
            draft.stock = stock;
            assert_eq!(validate(&draft).is_valid(), ok, "stock {}", stock);
            if !ok {
                only_invalid(validate(&draft), ProductField::Stock);
            }
        }
    }

    #[test]
    fn test_brand_boundaries() {
        for (len, ok) in [(1, false), (2, true), (30, true), (31, false)] {
            let mut draft = valid_draft();
            draft.brand = "b".repeat(len);
            assert_eq!(validate(&draft).is_valid(), ok, "brand length {}", len);
            if !ok {
                only_invalid(validate(&draft), ProductField::Brand);
            }
        }
    }

    #[test]
    fn test_brand_pattern() {
        assert!(brand_is_valid("Acme Corp"));
        assert!(!brand_is_valid("Acme3"));
        assert!(!brand_is_valid("Acme-Corp"));
        assert!(!brand_is_valid(""));
        // Whitespace-only brands pass both checks
        assert!(brand_is_valid("  "));
        assert!(!brand_is_valid(" "));

        let mut draft = valid_draft();
        draft.brand = "R2D2".into();
        only_invalid(validate(&draft), ProductField::Brand);
    }

    #[test]
    fn test_category_boundaries() {
        for (len, ok) in [(2, false), (3, true), (30, true), (31, false)] {
            let mut draft = valid_draft();
            draft.category = "c".repeat(len);
            assert_eq!(validate(&draft).is_valid(), ok, "category length {}", len);
            if !ok {
                only_invalid(validate(&draft), ProductField::Category);
            }
        }

        let mut draft = valid_draft();
        draft.category = "    ".into();
        only_invalid(validate(&draft), ProductField::Category);
    }

    #[test]
    fn test_unvalidated_fields_are_ignored() {
        let mut draft = valid_draft();
        draft.description = "d".repeat(500);
        draft.discount_percentage = 250.0;
        draft.rating = -3.0;
        assert!(validate(&draft).is_valid());
    }

    #[test]
    fn test_message_only_for_failing_field() {
        let mut draft = valid_draft();
        draft.title = "Ph".into();
        let errors = validate(&draft);
        assert_eq!(
            errors.message(ProductField::Title),
            Some("Title is required and should be between 3 to 50 characters")
        );
        assert_eq!(errors.message(ProductField::Price), None);
    }
}
