//! Form state for creating a product.
//!
//! The draft keeps every field as the raw string the user typed. Typed values
//! only exist after [`ProductForm::submit`], the single coercion boundary.

use crate::domain::a001_product::{Product, ProductCatalog, ProductId};
use crate::shared::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Editable fields of the "Add Product" form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftField {
    Name,
    Sku,
    Price,
    Stock,
    AmazonStock,
    Category,
    Image,
}

impl DraftField {
    pub const ALL: [DraftField; 7] = [
        DraftField::Name,
        DraftField::Sku,
        DraftField::Price,
        DraftField::Stock,
        DraftField::AmazonStock,
        DraftField::Category,
        DraftField::Image,
    ];

    /// Form control name
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Sku => "sku",
            DraftField::Price => "price",
            DraftField::Stock => "stock",
            DraftField::AmazonStock => "amazonStock",
            DraftField::Category => "category",
            DraftField::Image => "image",
        }
    }

    /// Fields that must not be blank on submit. The image URL may stay empty.
    pub fn is_required(&self) -> bool {
        !matches!(self, DraftField::Image)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Product Name",
            DraftField::Sku => "SKU",
            DraftField::Price => "Price",
            DraftField::Stock => "Stock",
            DraftField::AmazonStock => "Amazon MCF Stock",
            DraftField::Category => "Category",
            DraftField::Image => "Image URL",
        }
    }
}

impl FromStr for DraftField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// What to do with numeric input that does not parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericPolicy {
    /// Accept the submission: price becomes NaN, counts become 0, a warning is reported
    #[default]
    Lenient,
    /// Reject the submission and keep the draft as typed
    Strict,
}

/// A numeric field that was accepted with a substitute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionWarning {
    pub field: DraftField,
    pub raw: String,
}

impl fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not a valid number: {:?}", self.field.label(), self.raw)
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Product under construction, one raw string per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub sku: String,
    pub price: String,
    pub stock: String,
    pub amazon_stock: String,
    pub category: String,
    pub image: String,
}

impl ProductDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Sku => &self.sku,
            DraftField::Price => &self.price,
            DraftField::Stock => &self.stock,
            DraftField::AmazonStock => &self.amazon_stock,
            DraftField::Category => &self.category,
            DraftField::Image => &self.image,
        }
    }

    /// Overwrite one field, leaving the others untouched
    pub fn set_field(&mut self, field: DraftField, raw: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Sku => &mut self.sku,
            DraftField::Price => &mut self.price,
            DraftField::Stock => &mut self.stock,
            DraftField::AmazonStock => &mut self.amazon_stock,
            DraftField::Category => &mut self.category,
            DraftField::Image => &mut self.image,
        };
        *slot = raw.into();
    }

    pub fn set_field_by_name(&mut self, name: &str, raw: impl Into<String>) -> Result<(), FormError> {
        let field = name.parse::<DraftField>()?;
        self.set_field(field, raw);
        Ok(())
    }

    /// First required field left blank, in form order
    pub fn first_missing(&self) -> Option<DraftField> {
        DraftField::ALL
            .into_iter()
            .find(|f| f.is_required() && self.get(*f).trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Coerce the raw fields into a product with the given id
    pub fn to_product(
        &self,
        id: ProductId,
        policy: NumericPolicy,
    ) -> Result<(Product, Vec<CoercionWarning>), FormError> {
        let mut warnings = Vec::new();

        let price = coerce(DraftField::Price, &self.price, parse_price, f64::NAN, policy, &mut warnings)?;
        let stock = coerce(DraftField::Stock, &self.stock, parse_count, 0, policy, &mut warnings)?;
        let amazon_stock = coerce(
            DraftField::AmazonStock,
            &self.amazon_stock,
            parse_count,
            0,
            policy,
            &mut warnings,
        )?;

        let product = Product {
            id,
            name: self.name.clone(),
            sku: self.sku.clone(),
            price,
            stock,
            amazon_stock,
            category: self.category.clone(),
            image: self.image.clone(),
        };
        Ok((product, warnings))
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

fn coerce<T>(
    field: DraftField,
    raw: &str,
    parse: fn(&str) -> Option<T>,
    substitute: T,
    policy: NumericPolicy,
    warnings: &mut Vec<CoercionWarning>,
) -> Result<T, FormError> {
    if let Some(value) = parse(raw) {
        return Ok(value);
    }
    match policy {
        NumericPolicy::Strict => Err(FormError::InvalidNumber {
            field: field.name(),
            value: raw.to_string(),
        }),
        NumericPolicy::Lenient => {
            warnings.push(CoercionWarning {
                field,
                raw: raw.to_string(),
            });
            Ok(substitute)
        }
    }
}

// ============================================================================
// Form state manager
// ============================================================================

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub product: Product,
    pub warnings: Vec<CoercionWarning>,
}

/// State of one "Add Product" form instance: the draft and its visibility
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    draft: ProductDraft,
    open: bool,
    policy: NumericPolicy,
}

impl ProductForm {
    pub fn new(policy: NumericPolicy) -> Self {
        Self {
            draft: ProductDraft::default(),
            open: false,
            policy,
        }
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the form. The draft is kept as typed.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_field(&mut self, field: DraftField, raw: impl Into<String>) {
        self.draft.set_field(field, raw);
    }

    pub fn set_field_by_name(&mut self, name: &str, raw: impl Into<String>) -> Result<(), FormError> {
        self.draft.set_field_by_name(name, raw)
    }

    /// Coerce the draft, append the new product to `catalog`, then reset and close.
    ///
    /// On error nothing changes: the catalog, the draft and the open flag stay as they were.
    pub fn submit(&mut self, catalog: &mut ProductCatalog) -> Result<Submission, FormError> {
        if let Some(field) = self.draft.first_missing() {
            return Err(FormError::Required(field.label()));
        }
        let id = catalog.next_id();
        let (product, warnings) = self.draft.to_product(id, self.policy)?;

        for warning in &warnings {
            log::warn!("product {}: {}", product.id, warning);
        }
        log::debug!(
            "product submitted: id={} sku={} catalog_size={}",
            product.id,
            product.sku,
            catalog.len() + 1
        );

        catalog.push(product.clone());
        self.draft.reset();
        self.open = false;

        Ok(Submission { product, warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data::seed_products;

    fn bar_soap_form(policy: NumericPolicy) -> ProductForm {
        let mut form = ProductForm::new(policy);
        form.open();
        form.set_field(DraftField::Name, "Bar Soap");
        form.set_field(DraftField::Sku, "BS010");
        form.set_field(DraftField::Price, "3.50");
        form.set_field(DraftField::Stock, "40");
        form.set_field(DraftField::AmazonStock, "20");
        form.set_field(DraftField::Category, "Cleaning");
        form
    }

    #[test]
    fn test_submit_appends_with_next_id() {
        let mut catalog = ProductCatalog::new(seed_products());
        assert_eq!(catalog.len(), 3);

        let mut form = bar_soap_form(NumericPolicy::Lenient);
        let submission = form.submit(&mut catalog).unwrap();

        assert_eq!(catalog.len(), 4);
        let added = &catalog.items()[3];
        assert_eq!(added.id.as_str(), "4");
        assert_eq!(added.price, 3.5);
        assert_eq!(added.stock, 40);
        assert_eq!(added.amazon_stock, 20);
        assert_eq!(added.category, "Cleaning");
        assert_eq!(&submission.product, added);
        assert!(submission.warnings.is_empty());

        // existing entries keep their order
        let ids: Vec<&str> = catalog.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_submit_resets_draft_and_closes_form() {
        let mut catalog = ProductCatalog::new(seed_products());
        let mut form = bar_soap_form(NumericPolicy::Lenient);
        assert!(form.is_open());

        form.submit(&mut catalog).unwrap();

        assert!(!form.is_open());
        assert!(form.draft().is_empty());
    }

    #[test]
    fn test_lenient_policy_accepts_bad_numbers() {
        let mut catalog = ProductCatalog::new(seed_products());
        let mut form = bar_soap_form(NumericPolicy::Lenient);
        form.set_field(DraftField::Price, "three fifty");
        form.set_field(DraftField::Stock, "forty");

        let submission = form.submit(&mut catalog).unwrap();

        assert_eq!(catalog.len(), 4);
        assert!(submission.product.price.is_nan());
        assert_eq!(submission.product.stock, 0);
        let fields: Vec<DraftField> = submission.warnings.iter().map(|w| w.field).collect();
        assert_eq!(fields, vec![DraftField::Price, DraftField::Stock]);
    }

    #[test]
    fn test_strict_policy_rejects_without_side_effects() {
        let mut catalog = ProductCatalog::new(seed_products());
        let mut form = bar_soap_form(NumericPolicy::Strict);
        form.set_field(DraftField::AmazonStock, "-5");
        let draft_before = form.draft().clone();

        let err = form.submit(&mut catalog).unwrap_err();

        assert_eq!(
            err,
            FormError::InvalidNumber {
                field: "amazonStock",
                value: "-5".into()
            }
        );
        assert_eq!(catalog.len(), 3);
        assert!(form.is_open());
        assert_eq!(form.draft(), &draft_before);
    }

    #[test]
    fn test_negative_price_is_not_a_valid_number() {
        let draft = ProductDraft {
            price: "-1".into(),
            stock: "1".into(),
            amazon_stock: "1".into(),
            ..ProductDraft::default()
        };
        let (product, warnings) = draft
            .to_product(ProductId::new("9"), NumericPolicy::Lenient)
            .unwrap();
        assert!(product.price.is_nan());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_set_field_is_isolated_and_idempotent() {
        let mut draft = ProductDraft::default();
        draft.set_field(DraftField::Sku, "BS010");
        let once = draft.clone();
        draft.set_field(DraftField::Sku, "BS010");

        assert_eq!(draft, once);
        assert_eq!(draft.get(DraftField::Sku), "BS010");
        for field in DraftField::ALL {
            if field != DraftField::Sku {
                assert_eq!(draft.get(field), "");
            }
        }
    }

    #[test]
    fn test_set_field_by_form_name() {
        let mut form = ProductForm::default();
        form.set_field_by_name("amazonStock", "12").unwrap();
        assert_eq!(form.draft().amazon_stock, "12");

        let err = form.set_field_by_name("weight", "1").unwrap_err();
        assert_eq!(err, FormError::UnknownField("weight".into()));
    }

    #[test]
    fn test_empty_draft_is_not_committed() {
        let mut catalog = ProductCatalog::new(seed_products());
        let mut form = ProductForm::default();
        form.open();

        let err = form.submit(&mut catalog).unwrap_err();

        assert_eq!(err, FormError::Required("Product Name"));
        assert_eq!(err.to_string(), "Product Name is required");
        assert_eq!(catalog.len(), 3);
        assert!(form.is_open());
    }

    #[test]
    fn test_blank_required_field_blocks_submit_under_any_policy() {
        for policy in [NumericPolicy::Lenient, NumericPolicy::Strict] {
            let mut catalog = ProductCatalog::new(seed_products());
            let mut form = bar_soap_form(policy);
            form.set_field(DraftField::Category, "  ");

            let err = form.submit(&mut catalog).unwrap_err();

            assert_eq!(err, FormError::Required("Category"));
            assert_eq!(catalog.len(), 3);
            assert_eq!(form.draft().name, "Bar Soap");
        }
    }

    #[test]
    fn test_image_may_stay_blank() {
        let form = bar_soap_form(NumericPolicy::Lenient);
        assert!(form.draft().image.is_empty());
        assert_eq!(form.draft().first_missing(), None);
    }

    #[test]
    fn test_close_keeps_draft() {
        let mut form = bar_soap_form(NumericPolicy::Lenient);
        form.close();
        assert!(!form.is_open());
        assert_eq!(form.draft().name, "Bar Soap");
    }

    #[test]
    fn test_duplicate_sku_is_accepted() {
        let mut catalog = ProductCatalog::new(seed_products());
        let mut form = bar_soap_form(NumericPolicy::Lenient);
        form.set_field(DraftField::Sku, "BTB001");

        form.submit(&mut catalog).unwrap();
        let dupes = catalog.items().iter().filter(|p| p.sku == "BTB001").count();
        assert_eq!(dupes, 2);
    }
}
