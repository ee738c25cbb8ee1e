//! Add/edit product form
//!
//! Holds the draft and the per-field error flags. A submit only reaches
//! the save callback when every rule passes; the form never talks to the
//! gateway itself.

use shared::validation::validate;
use shared::{AppResult, FieldErrors, FieldValue, ProductDraft, ProductRecord};

/// Result of [`ProductForm::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Save callback was invoked
    Saved,
    /// Nothing was saved; the flags are also kept on the form
    Invalid(FieldErrors),
}

#[derive(Debug, Clone)]
pub struct ProductForm {
    original: Option<ProductRecord>,
    draft: ProductDraft,
    errors: FieldErrors,
}

impl ProductForm {
    /// Empty form for a new product (empty strings, zeros)
    pub fn create() -> Self {
        Self {
            original: None,
            draft: ProductDraft::default(),
            errors: FieldErrors::default(),
        }
    }

    /// Form pre-filled from an existing product
    pub fn edit(original: ProductRecord) -> Self {
        Self {
            draft: ProductDraft::from_record(&original),
            original: Some(original),
            errors: FieldErrors::default(),
        }
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn original(&self) -> Option<&ProductRecord> {
        self.original.as_ref()
    }

    pub fn is_edit(&self) -> bool {
        self.original.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() { "Edit Product" } else { "Add Product" }
    }

    pub fn action_label(&self) -> &'static str {
        if self.is_edit() { "Update" } else { "Add" }
    }

    /// Replace one draft field as given. Does not validate.
    pub fn set_field(&mut self, value: FieldValue) {
        self.draft.set(value);
    }

    /// Textual variant of [`set_field`](Self::set_field)
    pub fn set_field_str(&mut self, name: &str, raw: &str) -> AppResult<()> {
        self.set_field(FieldValue::parse(name, raw)?);
        Ok(())
    }

    /// Validate and build the record to save.
    ///
    /// Edits merge the draft over the original so identifier, images and
    /// server-managed fields survive; creates carry no identifier.
    /// On failure the error flags are updated and the draft is kept.
    pub fn finalize(&mut self) -> Result<ProductRecord, FieldErrors> {
        self.errors = validate(&self.draft);
        if !self.errors.is_valid() {
            tracing::debug!(invalid = ?self.errors.invalid_fields(), "Product form rejected");
            return Err(self.errors);
        }

        let draft = self.draft.clone();
        Ok(match &self.original {
            Some(original) => draft.merge_into(original.clone()),
            None => draft.into_record(),
        })
    }

    /// Validate and hand the final record to `on_save`
    pub fn submit<F>(&mut self, on_save: F) -> SubmitOutcome
    where
        F: FnOnce(ProductRecord),
    {
        match self.finalize() {
            Ok(record) => {
                on_save(record);
                SubmitOutcome::Saved
            }
            Err(errors) => SubmitOutcome::Invalid(errors),
        }
    }

    /// Discard the draft and invoke `on_close`
    pub fn cancel<F>(self, on_close: F)
    where
        F: FnOnce(),
    {
        on_close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ProductField;

    fn fill_valid(form: &mut ProductForm) {
        form.set_field(FieldValue::Title("Phone".into()));
        form.set_field(FieldValue::Price(500.0));
        form.set_field(FieldValue::Stock(10.0));
        form.set_field(FieldValue::Brand("Acme".into()));
        form.set_field(FieldValue::Category("Electronics".into()));
    }

    fn existing() -> ProductRecord {
        ProductRecord {
            id: Some(12),
            title: "Old phone".into(),
            description: "Refurbished".into(),
            price: 120.0,
            discount_percentage: 5.0,
            rating: 4.1,
            stock: 3,
            brand: "Acme".into(),
            category: "smartphones".into(),
            images: vec!["https://cdn.example.com/12.png".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_create_submit_valid() {
        let mut form = ProductForm::create();
        fill_valid(&mut form);

        let mut saved = Vec::new();
        let outcome = form.submit(|record| saved.push(record));

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(saved.len(), 1);
        let record = &saved[0];
        assert!(record.is_new());
        assert_eq!(record.title, "Phone");
        assert_eq!(record.price, 500.0);
        assert_eq!(record.stock, 10);
        assert_eq!(record.brand, "Acme");
        assert_eq!(record.category, "Electronics");
        assert!(form.errors().is_valid());
    }

    #[test]
    fn test_invalid_submit_keeps_draft() {
        let mut form = ProductForm::create();
        fill_valid(&mut form);
        form.set_field(FieldValue::Title("Ph".into()));

        let mut called = false;
        let outcome = form.submit(|_| called = true);

        assert!(!called);
        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.invalid_fields(), vec![ProductField::Title])
            }
            SubmitOutcome::Saved => panic!("invalid draft was saved"),
        }
        assert!(form.errors().title);
        assert_eq!(form.draft().title, "Ph");
        assert_eq!(form.draft().brand, "Acme");
    }

    #[test]
    fn test_errors_clear_after_fix() {
        let mut form = ProductForm::create();
        fill_valid(&mut form);
        form.set_field(FieldValue::Stock(1001.0));
        assert!(form.finalize().is_err());
        assert!(form.errors().stock);

        form.set_field(FieldValue::Stock(1000.0));
        // Setting a field alone does not re-validate
        assert!(form.errors().stock);
        assert!(form.finalize().is_ok());
        assert!(!form.errors().stock);
    }

    #[test]
    fn test_edit_merges_over_original() {
        let original = existing();
        let mut form = ProductForm::edit(original.clone());
        assert_eq!(form.title(), "Edit Product");
        assert_eq!(form.action_label(), "Update");
        assert_eq!(form.draft().stock, 3.0);

        form.set_field(FieldValue::Price(99.5));

        let mut saved = None;
        assert_eq!(form.submit(|r| saved = Some(r)), SubmitOutcome::Saved);
        let saved = saved.unwrap();

        assert_eq!(saved.id, Some(12));
        assert_eq!(saved.images, original.images);
        assert_eq!(saved.price, 99.5);
        assert_eq!(saved.description, "Refurbished");
        assert_eq!(saved.title, original.title);
    }

    #[test]
    fn test_edit_of_invalid_original_is_blocked() {
        // Catalogue entries without a brand cannot be saved until fixed
        let mut original = existing();
        original.brand.clear();
        let mut form = ProductForm::edit(original);

        let mut called = false;
        form.submit(|_| called = true);
        assert!(!called);
        assert!(form.errors().brand);
    }

    #[test]
    fn test_set_field_stores_value_as_given() {
        let mut form = ProductForm::create();
        form.set_field(FieldValue::Description("x".repeat(250)));
        form.set_field(FieldValue::DiscountPercentage(150.0));
        form.set_field(FieldValue::Rating(-2.0));

        assert_eq!(form.draft().description.chars().count(), 250);
        assert_eq!(form.draft().discount_percentage, 150.0);
        assert_eq!(form.draft().rating, -2.0);

        // Unvalidated fields reach the save callback untouched
        fill_valid(&mut form);
        let mut saved = None;
        assert_eq!(form.submit(|r| saved = Some(r)), SubmitOutcome::Saved);
        let saved = saved.unwrap();
        assert_eq!(saved.discount_percentage, 150.0);
        assert_eq!(saved.rating, -2.0);
    }

    #[test]
    fn test_fractional_stock_is_saved() {
        let mut form = ProductForm::create();
        fill_valid(&mut form);
        form.set_field(FieldValue::Stock(2.5));

        let mut saved = None;
        assert_eq!(form.submit(|r| saved = Some(r)), SubmitOutcome::Saved);
        assert_eq!(saved.unwrap().stock, 3);
    }

    #[test]
    fn test_set_field_str() {
        let mut form = ProductForm::create();
        form.set_field_str("price", "12.5").unwrap();
        form.set_field_str("stock", "many").unwrap();
        assert_eq!(form.draft().price, 12.5);
        assert!(form.draft().stock.is_nan());
        assert!(form.set_field_str("colour", "red").is_err());

        assert!(form.finalize().unwrap_err().stock);
    }

    #[test]
    fn test_cancel_invokes_close() {
        let mut form = ProductForm::create();
        fill_valid(&mut form);
        assert_eq!(form.title(), "Add Product");

        let mut closed = false;
        form.cancel(|| closed = true);
        assert!(closed);
    }
}
