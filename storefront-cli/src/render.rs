//! Terminal views: product table, detail card, inline form errors

use shared::{FieldErrors, ProductField, ProductRecord};
use std::fmt::Write;

const COLUMNS: [(&str, usize); 6] = [
    ("Id", 5),
    ("Title", 32),
    ("Brand", 18),
    ("Category", 18),
    ("Price", 10),
    ("Stock", 6),
];

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}

fn price(value: f64) -> String {
    format!("${}", value)
}

/// List view
pub fn product_table(products: &[ProductRecord]) -> String {
    if products.is_empty() {
        return "No products available.\n".to_string();
    }

    let mut out = String::new();
    let header: Vec<String> = COLUMNS
        .iter()
        .map(|(name, width)| format!("{:<width$}", name, width = *width))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());

    for product in products {
        let id = product.id.map(|id| id.to_string()).unwrap_or_else(|| "-".into());
        let cells = [
            id,
            product.title.clone(),
            product.brand.clone(),
            product.category.clone(),
            price(product.price),
            product.stock.to_string(),
        ];
        let row: Vec<String> = cells
            .iter()
            .zip(COLUMNS.iter())
            .map(|(cell, (_, width))| format!("{:<width$}", truncate(cell, *width), width = *width))
            .collect();
        let _ = writeln!(out, "{}", row.join("  ").trim_end());
    }
    out
}

/// Detail view
pub fn product_card(product: &ProductRecord) -> String {
    let mut out = String::new();
    match product.display_image() {
        Some(url) => {
            let _ = writeln!(out, "Image: {}", url);
        }
        None => {
            let _ = writeln!(out, "No image available");
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", product.title);
    if !product.description.is_empty() {
        let _ = writeln!(out, "{}", product.description);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", price(product.price));
    let _ = writeln!(out);
    let _ = writeln!(out, "Brand: {}", product.brand);
    let _ = writeln!(out, "Category: {}", product.category);
    let _ = writeln!(out, "Discount: {}%", product.discount_percentage);
    let _ = writeln!(out, "Rating: {}", product.rating);
    let _ = writeln!(out, "Stock: {}", product.stock);
    out
}

/// Inline messages for each failing field
pub fn field_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for field in ProductField::ALL {
        if let Some(message) = errors.message(field) {
            let _ = writeln!(out, "  {}: {}", field, message);
        }
    }
    out
}
