//! # Domain Model: Products
//!
//! This module defines the catalog's core record, [`Product`], together with the
//! shapes used to create it ([`NewProduct`]) and to partially update it
//! ([`ProductPatch`]).
//!
//! ## Identity
//!
//! A [`ProductId`] is an opaque, stable string. Sample data uses readable ids
//! (`tractor-1`), products added at runtime get `product-{millis}` ids issued by
//! the store. Once assigned an id never changes: [`ProductPatch`] has no id field,
//! so there is no way to express a rename.
//!
//! ## Specs
//!
//! `specs` is a free-form string map (`"Horsepower" -> "360HP"`). It is kept in a
//! `BTreeMap` so serialization and attribute discovery are deterministic; the key
//! order carries no meaning.
//!
//! ## Wire Shape
//!
//! Products (de)serialize with camelCase field names (`isNew`, `isFeatured`), the
//! same shape the storefront's JSON seed catalogs use.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CatalogError, Result};

/// Opaque, immutable product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

pub type Specs = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub price: f64,
    pub images: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specs: Specs,
    pub stock: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    pub brand: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

impl Product {
    /// Assemble a product from its id-less form.
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            category: new.category,
            subcategory: new.subcategory,
            price: new.price,
            images: new.images,
            description: new.description,
            features: new.features,
            specs: new.specs,
            stock: new.stock,
            rating: new.rating,
            reviews: new.reviews,
            brand: new.brand,
            is_new: new.is_new,
            is_featured: new.is_featured,
            discount: new.discount,
        }
    }

    pub fn is_new(&self) -> bool {
        self.is_new.unwrap_or(false)
    }

    pub fn is_featured(&self) -> bool {
        self.is_featured.unwrap_or(false)
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Price after the percentage discount, if any.
    pub fn effective_price(&self) -> f64 {
        match self.discount {
            Some(d) if d > 0 => self.price * (1.0 - f64::from(d) / 100.0),
            _ => self.price,
        }
    }

    /// First image, used as the cart thumbnail.
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }

    /// Same checks as [`NewProduct::validate`], with the id in the error message.
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.name,
            &self.category,
            self.price,
            self.rating,
            self.discount,
            &self.images,
        )
        .map_err(|e| match e {
            CatalogError::Validation(msg) => {
                CatalogError::Validation(format!("product {}: {}", self.id, msg))
            }
            other => other,
        })
    }
}

/// A product before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub price: f64,
    pub images: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specs: Specs,
    pub stock: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    pub brand: String,
    #[serde(default)]
    pub is_new: Option<bool>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub discount: Option<u8>,
}

impl NewProduct {
    /// Check the field ranges a product must satisfy before entering the store.
    pub fn validate(&self) -> Result<()> {
        validate_fields(
            &self.name,
            &self.category,
            self.price,
            self.rating,
            self.discount,
            &self.images,
        )
    }
}

/// Partial update: every `Some` field replaces the stored value, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub price: Option<f64>,
    pub images: Option<Vec<String>>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub specs: Option<Specs>,
    pub stock: Option<u32>,
    pub rating: Option<f64>,
    pub reviews: Option<u32>,
    pub brand: Option<String>,
    pub is_new: Option<bool>,
    pub is_featured: Option<bool>,
    pub discount: Option<u8>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        validate_discount(self.discount)?;
        if let Some(images) = &self.images {
            if images.is_empty() {
                return Err(CatalogError::Validation(
                    "at least one image is required".into(),
                ));
            }
        }
        Ok(())
    }

    /// Merge this patch into `product`.
    pub fn apply(self, product: &mut Product) {
        if let Some(v) = self.name {
            product.name = v;
        }
        if let Some(v) = self.category {
            product.category = v;
        }
        if let Some(v) = self.subcategory {
            product.subcategory = v;
        }
        if let Some(v) = self.price {
            product.price = v;
        }
        if let Some(v) = self.images {
            product.images = v;
        }
        if let Some(v) = self.description {
            product.description = v;
        }
        if let Some(v) = self.features {
            product.features = v;
        }
        if let Some(v) = self.specs {
            product.specs = v;
        }
        if let Some(v) = self.stock {
            product.stock = v;
        }
        if let Some(v) = self.rating {
            product.rating = v;
        }
        if let Some(v) = self.reviews {
            product.reviews = v;
        }
        if let Some(v) = self.brand {
            product.brand = v;
        }
        if self.is_new.is_some() {
            product.is_new = self.is_new;
        }
        if self.is_featured.is_some() {
            product.is_featured = self.is_featured;
        }
        if self.discount.is_some() {
            product.discount = self.discount;
        }
    }
}

fn validate_fields(
    name: &str,
    category: &str,
    price: f64,
    rating: f64,
    discount: Option<u8>,
    images: &[String],
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CatalogError::Validation("name must not be empty".into()));
    }
    if category.trim().is_empty() {
        return Err(CatalogError::Validation("category must not be empty".into()));
    }
    validate_price(price)?;
    validate_rating(rating)?;
    validate_discount(discount)?;
    if images.is_empty() {
        return Err(CatalogError::Validation(
            "at least one image is required".into(),
        ));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::Validation(format!(
            "price must be a non-negative number, got {}",
            price
        )));
    }
    Ok(())
}

fn validate_rating(rating: f64) -> Result<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(CatalogError::Validation(format!(
            "rating must be between 0 and 5, got {}",
            rating
        )));
    }
    Ok(())
}

fn validate_discount(discount: Option<u8>) -> Result<()> {
    match discount {
        Some(d) if d > 100 => Err(CatalogError::Validation(format!(
            "discount must be between 0 and 100, got {}",
            d
        ))),
        _ => Ok(()),
    }
}

/// Parse a specs object typed by hand (e.g. in an admin form) into a [`Specs`] map.
///
/// Accepts a JSON object whose values are strings, numbers or booleans; scalars
/// are stored in their textual form. Anything else is an [`CatalogError::InvalidSpecs`].
pub fn parse_specs_json(raw: &str) -> Result<Specs> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Specs::new());
    }

    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(|e| CatalogError::InvalidSpecs(e.to_string()))?;

    let serde_json::Value::Object(map) = value else {
        return Err(CatalogError::InvalidSpecs(
            "specifications must be a JSON object".into(),
        ));
    };

    let mut specs = Specs::new();
    for (key, value) in map {
        let text = match value {
            serde_json::Value::String(s) => s,
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            other => {
                return Err(CatalogError::InvalidSpecs(format!(
                    "value for \"{}\" must be a string, got {}",
                    key, other
                )))
            }
        };
        specs.insert(key, text);
    }
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new() -> NewProduct {
        NewProduct {
            name: "Compact Tractor".into(),
            category: "farm-machinery".into(),
            subcategory: "tractors".into(),
            price: 32000.0,
            images: vec!["https://img.example/tractor.jpg".into()],
            description: "Small but capable".into(),
            features: vec![],
            specs: Specs::new(),
            stock: 3,
            rating: 0.0,
            reviews: 0,
            brand: "AgriPro".into(),
            is_new: Some(true),
            is_featured: None,
            discount: None,
        }
    }

    #[test]
    fn effective_price_applies_discount() {
        let mut product = Product::from_new("p".into(), sample_new());
        assert_eq!(product.effective_price(), 32000.0);

        product.discount = Some(15);
        assert!((product.effective_price() - 27200.0).abs() < 1e-9);

        product.discount = Some(0);
        assert_eq!(product.effective_price(), 32000.0);
    }

    #[test]
    fn optional_flags_default_to_false() {
        let mut product = Product::from_new("p".into(), sample_new());
        product.is_new = None;
        assert!(!product.is_new());
        assert!(!product.is_featured());
    }

    #[test]
    fn validate_rejects_bad_ranges() {
        let mut new = sample_new();
        assert!(new.validate().is_ok());

        new.price = -1.0;
        assert!(matches!(new.validate(), Err(CatalogError::Validation(_))));

        let mut new = sample_new();
        new.rating = 5.5;
        assert!(new.validate().is_err());

        let mut new = sample_new();
        new.discount = Some(101);
        assert!(new.validate().is_err());

        let mut new = sample_new();
        new.images.clear();
        assert!(new.validate().is_err());
    }

    #[test]
    fn patch_leaves_absent_fields_untouched() {
        let mut product = Product::from_new("p".into(), sample_new());
        let before = product.clone();

        ProductPatch {
            price: Some(30000.0),
            ..Default::default()
        }
        .apply(&mut product);

        assert_eq!(product.price, 30000.0);
        assert_eq!(product.name, before.name);
        assert_eq!(product.is_new, before.is_new);
        assert_eq!(product.id, before.id);
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ProductPatch::default().is_empty());
        let patch = ProductPatch {
            stock: Some(1),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn parse_specs_accepts_scalars() {
        let specs = parse_specs_json(r#"{"Horsepower": "360HP", "Year": 2021, "Cab": true}"#)
            .unwrap();
        assert_eq!(specs["Horsepower"], "360HP");
        assert_eq!(specs["Year"], "2021");
        assert_eq!(specs["Cab"], "true");
    }

    #[test]
    fn parse_specs_empty_input_is_empty_map() {
        assert!(parse_specs_json("   ").unwrap().is_empty());
        assert!(parse_specs_json("{}").unwrap().is_empty());
    }

    #[test]
    fn parse_specs_rejects_malformed_json() {
        assert!(matches!(
            parse_specs_json("{not json"),
            Err(CatalogError::InvalidSpecs(_))
        ));
        assert!(matches!(
            parse_specs_json("[1, 2]"),
            Err(CatalogError::InvalidSpecs(_))
        ));
        assert!(matches!(
            parse_specs_json(r#"{"Engine": {"cyl": 6}}"#),
            Err(CatalogError::InvalidSpecs(_))
        ));
    }

    #[test]
    fn product_json_uses_camel_case() {
        let mut product = Product::from_new("tractor-9".into(), sample_new());
        product.is_featured = Some(true);
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], "tractor-9");
        assert_eq!(json["isNew"], true);
        assert_eq!(json["isFeatured"], true);
        assert!(json.get("discount").is_none());
    }
}
