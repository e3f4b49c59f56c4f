use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{parse_specs_json, NewProduct};
use crate::store::CatalogStore;
use serde::Deserialize;

/// A product as entered in the admin form.
///
/// Features and images come from repeatable text fields and may contain blanks;
/// specs are typed as a JSON object.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProductInput {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub price: f64,
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    pub specs: String,
    pub stock: u32,
    pub brand: String,
    pub is_new: Option<bool>,
    pub is_featured: Option<bool>,
    pub discount: Option<u8>,
}

impl NewProductInput {
    /// Normalize into a [`NewProduct`]. New products start without reviews.
    pub fn into_new_product(self) -> Result<NewProduct> {
        let specs = parse_specs_json(&self.specs)?;
        Ok(NewProduct {
            name: self.name.trim().to_string(),
            category: self.category,
            subcategory: self.subcategory,
            price: self.price,
            images: non_blank(self.images),
            description: self.description,
            features: non_blank(self.features),
            specs,
            stock: self.stock,
            rating: 0.0,
            reviews: 0,
            brand: self.brand,
            is_new: self.is_new,
            is_featured: self.is_featured,
            discount: self.discount,
        })
    }
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect()
}

/// Validate and add a product. The store is untouched unless every check passes.
pub fn run<S: CatalogStore>(store: &mut S, input: NewProductInput) -> Result<CmdResult> {
    let product = input.into_new_product()?;
    product.validate()?;

    let name = product.name.clone();
    let id = store.add(product);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product created ({}): {}",
        id, name
    )));
    let created = store.get(&id).into_iter().collect();
    Ok(result.with_affected_products(created))
}
