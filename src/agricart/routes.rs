//! Navigation surface.
//!
//! Every storefront page is a [`Route`]. Parsing accepts the canonical English paths
//! and the Portuguese aliases the storefront was first published with (`/produtos`,
//! `/carrinho`, ...); formatting always produces the canonical path.

use crate::model::ProductId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminPage {
    Dashboard,
    Products,
    Orders,
    Customers,
    Categories,
    Analytics,
    Reports,
    Settings,
}

impl AdminPage {
    fn segment(&self) -> Option<&'static str> {
        match self {
            AdminPage::Dashboard => None,
            AdminPage::Products => Some("products"),
            AdminPage::Orders => Some("orders"),
            AdminPage::Customers => Some("customers"),
            AdminPage::Categories => Some("categories"),
            AdminPage::Analytics => Some("analytics"),
            AdminPage::Reports => Some("reports"),
            AdminPage::Settings => Some("settings"),
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        let page = match segment {
            "" | "dashboard" => AdminPage::Dashboard,
            "products" | "produtos" => AdminPage::Products,
            "orders" | "pedidos" => AdminPage::Orders,
            "customers" | "clientes" => AdminPage::Customers,
            "categories" | "categorias" => AdminPage::Categories,
            "analytics" => AdminPage::Analytics,
            "reports" | "relatorios" => AdminPage::Reports,
            "settings" | "configuracoes" => AdminPage::Settings,
            _ => return None,
        };
        Some(page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Products {
        category: Option<String>,
        search: Option<String>,
    },
    ProductDetail(ProductId),
    Cart,
    Checkout,
    OrderTracking,
    Login,
    About,
    Contact,
    Testimonials,
    Admin(AdminPage),
    NotFound(String),
}

impl Route {
    /// Resolve a path, with an optional query string, to a route.
    ///
    /// Never fails: anything unrecognised becomes [`Route::NotFound`].
    pub fn parse(path: &str) -> Route {
        let (path, query) = match path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["products" | "produtos"] => {
                let mut category = None;
                let mut search = None;
                for (key, value) in query.map(query_pairs).unwrap_or_default() {
                    match key.as_str() {
                        "category" | "categoria" => category = Some(value),
                        "search" | "busca" => search = Some(value),
                        _ => {}
                    }
                }
                Route::Products { category, search }
            }
            ["product" | "products" | "produtos", id] => {
                Route::ProductDetail(ProductId::new(percent_decode(id)))
            }
            ["cart" | "carrinho"] => Route::Cart,
            ["checkout"] => Route::Checkout,
            ["order-tracking" | "rastreamento-pedido"] => Route::OrderTracking,
            ["login"] => Route::Login,
            ["about" | "sobre"] => Route::About,
            ["contact" | "contato"] => Route::Contact,
            ["testimonials" | "depoimentos"] => Route::Testimonials,
            ["admin"] => Route::Admin(AdminPage::Dashboard),
            ["admin", page] => match AdminPage::from_segment(page) {
                Some(page) => Route::Admin(page),
                None => Route::NotFound(path.to_string()),
            },
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Route::Admin(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Products { category, search } => {
                f.write_str("/products")?;
                let mut sep = '?';
                if let Some(category) = category {
                    write!(f, "{}category={}", sep, percent_encode(category))?;
                    sep = '&';
                }
                if let Some(search) = search {
                    write!(f, "{}search={}", sep, percent_encode(search))?;
                }
                Ok(())
            }
            Route::ProductDetail(id) => write!(f, "/product/{}", percent_encode(id.as_str())),
            Route::Cart => f.write_str("/cart"),
            Route::Checkout => f.write_str("/checkout"),
            Route::OrderTracking => f.write_str("/order-tracking"),
            Route::Login => f.write_str("/login"),
            Route::About => f.write_str("/about"),
            Route::Contact => f.write_str("/contact"),
            Route::Testimonials => f.write_str("/testimonials"),
            Route::Admin(page) => match page.segment() {
                Some(segment) => write!(f, "/admin/{}", segment),
                None => f.write_str("/admin"),
            },
            Route::NotFound(path) => f.write_str(path),
        }
    }
}

fn query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (percent_decode(k), percent_decode(v)),
            None => (percent_decode(pair), String::new()),
        })
        .collect()
}

fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Decode `%XX` escapes and `+` as space. Malformed escapes are kept as-is.
fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => match (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                (Some(hi), Some(lo)) => {
                    out.push(hi << 4 | lo);
                    i += 2;
                }
                _ => out.push(b'%'),
            },
            other => out.push(other),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storefront_pages() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/cart"), Route::Cart);
        assert_eq!(Route::parse("/checkout"), Route::Checkout);
        assert_eq!(Route::parse("/order-tracking"), Route::OrderTracking);
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/testimonials"), Route::Testimonials);
    }

    #[test]
    fn product_listing_with_query() {
        assert_eq!(
            Route::parse("/products?category=farm-machinery&search=john+deere"),
            Route::Products {
                category: Some("farm-machinery".into()),
                search: Some("john deere".into()),
            }
        );
        assert_eq!(
            Route::parse("/products"),
            Route::Products {
                category: None,
                search: None
            }
        );
    }

    #[test]
    fn product_detail() {
        assert_eq!(
            Route::parse("/product/tractor-1"),
            Route::ProductDetail("tractor-1".into())
        );
        assert_eq!(
            Route::parse("/produtos/tractor-1"),
            Route::ProductDetail("tractor-1".into())
        );
    }

    #[test]
    fn portuguese_aliases() {
        assert_eq!(Route::parse("/carrinho"), Route::Cart);
        assert_eq!(Route::parse("/rastreamento-pedido"), Route::OrderTracking);
        assert_eq!(Route::parse("/admin/pedidos"), Route::Admin(AdminPage::Orders));
    }

    #[test]
    fn admin_tree() {
        assert_eq!(Route::parse("/admin"), Route::Admin(AdminPage::Dashboard));
        assert_eq!(
            Route::parse("/admin/dashboard"),
            Route::Admin(AdminPage::Dashboard)
        );
        assert_eq!(
            Route::parse("/admin/analytics"),
            Route::Admin(AdminPage::Analytics)
        );
        assert!(Route::parse("/admin/settings").is_admin());
        assert!(matches!(Route::parse("/admin/nope"), Route::NotFound(_)));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/warehouse/42"),
            Route::NotFound("/warehouse/42".into())
        );
    }

    #[test]
    fn display_produces_canonical_paths() {
        assert_eq!(Route::parse("/carrinho").to_string(), "/cart");
        assert_eq!(Route::Admin(AdminPage::Dashboard).to_string(), "/admin");
        assert_eq!(Route::Admin(AdminPage::Reports).to_string(), "/admin/reports");
        assert_eq!(
            Route::Products {
                category: Some("vehicles".into()),
                search: Some("utility truck".into()),
            }
            .to_string(),
            "/products?category=vehicles&search=utility%20truck"
        );
    }

    #[test]
    fn display_then_parse_is_identity() {
        let routes = vec![
            Route::Home,
            Route::ProductDetail("product-1700000000000".into()),
            Route::Products {
                category: None,
                search: Some("100% diesel".into()),
            },
            Route::Admin(AdminPage::Customers),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.to_string()), route);
        }
    }

    #[test]
    fn malformed_escapes_are_kept() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("a%zzb"), "a%zzb");
        assert_eq!(percent_decode("%41"), "A");
    }
}
