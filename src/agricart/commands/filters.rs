use crate::attributes::{derive_category_filters, derive_for_category};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

/// Derived filter schema for one category, or for every category when `None`.
pub fn run<S: CatalogStore>(store: &S, category: Option<&str>) -> Result<CmdResult> {
    let products = store.list();

    let filters = match category {
        Some(category) => match derive_for_category(&products, category) {
            Some(filter) => vec![filter],
            None => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::warning(format!(
                    "No products in category: {}",
                    category
                )));
                return Ok(result);
            }
        },
        None => derive_category_filters(&products),
    };

    Ok(CmdResult::default().with_filters(filters))
}
