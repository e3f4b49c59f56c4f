//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for storefront operations, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session**: the catalog store, the cart, placed orders, customer
//!   records and the locale
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (sort key strings, the flat filter shape, default limits)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O and no formatting.
//!
//! ## Generic Over CatalogStore
//!
//! `StorefrontApi<S: CatalogStore>` takes its store by value at construction. There
//! is no global catalog: whoever builds the API decides which store it talks to,
//! which is also how tests inject a fixture catalog.

use crate::attributes::{ActiveFilters, CatalogQuery};
use crate::cart::Cart;
use crate::commands;
use crate::config::StorefrontConfig;
use crate::customers::{CustomerId, CustomerPatch, CustomerRegistry, NewAddress, NewCustomer};
use crate::error::Result;
use crate::i18n::{Language, Translator};
use crate::model::{ProductId, ProductPatch};
use crate::orders::{OrderBook, ShippingInfo, ShippingMethod};
use crate::routes::Route;
use crate::sort::SortKey;
use crate::store::CatalogStore;
use uuid::Uuid;

/// The main API facade for storefront operations.
#[derive(Debug)]
pub struct StorefrontApi<S: CatalogStore> {
    store: S,
    cart: Cart,
    orders: OrderBook,
    customers: CustomerRegistry,
    translator: Translator,
    config: StorefrontConfig,
}

impl<S: CatalogStore> StorefrontApi<S> {
    /// Build a session over `store`. Fails if the configured language or sort
    /// key is not recognised.
    pub fn new(store: S, config: StorefrontConfig) -> Result<Self> {
        let language = config.language()?;
        config.default_sort()?;
        Ok(Self {
            store,
            cart: Cart::new(),
            orders: OrderBook::new(),
            customers: CustomerRegistry::new(),
            translator: Translator::new(language),
            config,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // --- Catalog ---

    pub fn create_product(
        &mut self,
        input: commands::create::NewProductInput,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, input)
    }

    pub fn update_product(
        &mut self,
        id: &ProductId,
        patch: ProductPatch,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_products(&mut self, ids: &[ProductId]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, ids)
    }

    /// The product listing. `sort` falls back to the configured default order.
    pub fn list_products(
        &self,
        query: &CatalogQuery,
        sort: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let sort = self.parse_sort(sort)?;
        commands::list::run(&self.store, query, sort)
    }

    /// The product listing with filters in the flat `key` / `key_min` / `key_max` shape.
    pub fn list_products_flat(
        &self,
        category: Option<&str>,
        search: Option<&str>,
        flat: &serde_json::Map<String, serde_json::Value>,
        sort: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let query = CatalogQuery::new()
            .with_category(category.unwrap_or_default())
            .with_search(search.unwrap_or_default())
            .with_filters(ActiveFilters::from_flat(flat)?);
        self.list_products(&query, sort)
    }

    pub fn search_products(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    pub fn view_product(&self, id: &ProductId) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    /// Related products. `limit` falls back to the configured default.
    pub fn related_products(
        &self,
        id: &ProductId,
        limit: Option<usize>,
    ) -> Result<commands::CmdResult> {
        let limit = limit.unwrap_or(self.config.related_limit);
        commands::view::related(&self.store, id, limit)
    }

    pub fn category_filters(&self, category: Option<&str>) -> Result<commands::CmdResult> {
        commands::filters::run(&self.store, category)
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::catalog::categories(&self.store)
    }

    pub fn featured(&self) -> Result<commands::CmdResult> {
        commands::catalog::featured(&self.store)
    }

    pub fn report(&self) -> Result<commands::CmdResult> {
        commands::report::run(&self.store, self.config.low_stock_threshold)
    }

    // --- Cart ---

    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<commands::CmdResult> {
        commands::cart::add(&self.store, &mut self.cart, id)
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> Result<commands::CmdResult> {
        commands::cart::remove(&mut self.cart, id)
    }

    pub fn update_cart_quantity(
        &mut self,
        id: &ProductId,
        quantity: u32,
    ) -> Result<commands::CmdResult> {
        commands::cart::update_quantity(&mut self.cart, id, quantity)
    }

    pub fn clear_cart(&mut self) -> Result<commands::CmdResult> {
        commands::cart::clear(&mut self.cart)
    }

    pub fn cart(&self) -> Result<commands::CmdResult> {
        commands::cart::show(&self.cart)
    }

    // --- Orders ---

    pub fn place_order(
        &mut self,
        shipping_info: ShippingInfo,
        method: ShippingMethod,
    ) -> Result<commands::CmdResult> {
        commands::checkout::place_order(&mut self.orders, &mut self.cart, shipping_info, method)
    }

    pub fn track_order(&self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::checkout::track(&self.orders, id)
    }

    pub fn advance_order(&mut self, id: &Uuid) -> Result<commands::CmdResult> {
        commands::checkout::advance(&mut self.orders, id)
    }

    // --- Customers ---

    pub fn create_customer(&mut self, customer: NewCustomer) -> Result<commands::CmdResult> {
        commands::customers::create(&mut self.customers, customer)
    }

    pub fn update_customer(
        &mut self,
        id: &CustomerId,
        patch: CustomerPatch,
    ) -> Result<commands::CmdResult> {
        commands::customers::update(&mut self.customers, id, patch)
    }

    pub fn delete_customers(&mut self, ids: &[CustomerId]) -> Result<commands::CmdResult> {
        commands::customers::delete(&mut self.customers, ids)
    }

    pub fn customer(&self, id: &CustomerId) -> Result<commands::CmdResult> {
        commands::customers::view(&self.customers, id)
    }

    pub fn customers(&self, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::customers::list(&self.customers, search)
    }

    pub fn add_customer_address(
        &mut self,
        id: &CustomerId,
        address: NewAddress,
    ) -> Result<commands::CmdResult> {
        commands::customers::add_address(&mut self.customers, id, address)
    }

    pub fn remove_customer_address(
        &mut self,
        id: &CustomerId,
        address_id: &str,
    ) -> Result<commands::CmdResult> {
        commands::customers::remove_address(&mut self.customers, id, address_id)
    }

    // --- Locale, navigation, settings ---

    pub fn language(&self) -> Language {
        self.translator.language()
    }

    pub fn set_language(&mut self, language: Language) {
        self.translator.set_language(language);
    }

    pub fn translate(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    pub fn route(&self, path: &str) -> Route {
        Route::parse(path)
    }

    pub fn config(&self) -> Result<commands::CmdResult> {
        Ok(commands::CmdResult::default().with_config(self.config.clone()))
    }

    fn parse_sort(&self, sort: Option<&str>) -> Result<SortKey> {
        match sort {
            Some(key) => key.parse(),
            None => self.config.default_sort(),
        }
    }
}

pub use crate::commands::create::NewProductInput;
pub use crate::commands::{CatalogReport, CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::store::memory::fixtures::CatalogFixture;
    use crate::store::memory::InMemoryCatalog;
    use serde_json::json;

    fn api() -> StorefrontApi<InMemoryCatalog> {
        let store = CatalogFixture::new()
            .with_specs("a", "farm-machinery", "A", &[("Horsepower", "100")])
            .with_specs("b", "farm-machinery", "A", &[("Horsepower", "200")])
            .with_specs("c", "farm-machinery", "B", &[("Horsepower", "150")])
            .build();
        StorefrontApi::new(store, StorefrontConfig::default()).unwrap()
    }

    #[test]
    fn rejects_unknown_configured_language() {
        let config = StorefrontConfig {
            language: "klingon".into(),
            ..Default::default()
        };
        assert!(matches!(
            StorefrontApi::new(InMemoryCatalog::new(), config),
            Err(CatalogError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn list_uses_flat_filters_and_explicit_sort() {
        let api = api();
        let flat = json!({ "Horsepower_min": 120 });
        let result = api
            .list_products_flat(
                Some("farm-machinery"),
                None,
                flat.as_object().unwrap(),
                Some("name-asc"),
            )
            .unwrap();
        let ids: Vec<_> = result.listed_products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn list_rejects_unknown_sort() {
        let api = api();
        assert!(matches!(
            api.list_products(&CatalogQuery::new(), Some("random")),
            Err(CatalogError::UnknownSortKey(_))
        ));
    }

    #[test]
    fn related_uses_configured_limit() {
        let api = api();
        let result = api.related_products(&"a".into(), None).unwrap();
        assert_eq!(result.listed_products.len(), 2);
        let result = api.related_products(&"a".into(), Some(1)).unwrap();
        assert_eq!(result.listed_products.len(), 1);
    }

    #[test]
    fn cart_state_persists_across_calls() {
        let mut api = api();
        api.add_to_cart(&"a".into()).unwrap();
        api.add_to_cart(&"a".into()).unwrap();
        let result = api.cart().unwrap();
        assert_eq!(result.cart.unwrap().total_items(), 2);
    }

    #[test]
    fn catalog_mutations_are_visible_to_derived_views() {
        let mut api = api();
        api.delete_products(&["c".into()]).unwrap();

        let filters = api.category_filters(Some("farm-machinery")).unwrap();
        let brand = filters.filters[0].attribute("brand").unwrap();
        assert_eq!(brand.options().unwrap(), ["A"]);
    }

    #[test]
    fn customer_records_persist_across_calls() {
        use crate::customers::fixtures::{new_address, new_customer};

        let mut api = api();
        let created = api
            .create_customer(new_customer("Ana", "ana@fazenda.example"))
            .unwrap();
        let id = created.customers[0].id.clone();
        api.add_customer_address(&id, new_address("Rodovia SP-330, km 12"))
            .unwrap();

        let shown = api.customer(&id).unwrap();
        assert_eq!(shown.addresses.len(), 1);
        assert_eq!(api.customers(Some("ana")).unwrap().customers.len(), 1);

        api.delete_customers(&[id.clone()]).unwrap();
        assert!(api.customers(None).unwrap().customers.is_empty());
        assert!(matches!(
            api.customer(&id),
            Err(CatalogError::CustomerNotFound(_))
        ));
    }

    #[test]
    fn translation_follows_language_switch() {
        let mut api = api();
        assert_eq!(api.translate("common.cart"), "Carrinho");
        api.set_language(Language::En);
        assert_eq!(api.translate("common.cart"), "Cart");
    }
}
