use crate::api::StorefrontApi;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::store::memory::InMemoryCatalog;
use crate::store::seed::load_catalog;
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub struct StorefrontContext {
    pub api: StorefrontApi<InMemoryCatalog>,
    pub config: StorefrontConfig,
}

/// Build a session: pick the catalog source, load it and wrap it in the API.
///
/// `catalog_override` wins over the configured catalog; with neither, the built-in
/// sample catalog is used.
pub fn initialize(
    config: StorefrontConfig,
    catalog_override: Option<&Path>,
) -> Result<StorefrontContext> {
    let source = catalog_override.or(config.catalog.as_deref());

    let store = match source {
        Some(path) => {
            info!(path = %path.display(), "loading catalog file");
            InMemoryCatalog::with_products(load_catalog(path)?)?
        }
        None => InMemoryCatalog::with_sample_data()?,
    };

    let api = StorefrontApi::new(store, config.clone())?;
    Ok(StorefrontContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::store::CatalogStore;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir, ids: &[&str]) -> PathBuf {
        let products: Vec<_> = ids
            .iter()
            .map(|id| {
                crate::store::memory::fixtures::product(id, id, "vehicles", "RuralHauler", 10.0)
            })
            .collect();
        let path = dir.path().join("catalog.json");
        fs::write(&path, serde_json::to_string(&products).unwrap()).unwrap();
        path
    }

    #[test]
    fn defaults_to_sample_catalog() {
        let ctx = initialize(StorefrontConfig::default(), None).unwrap();
        assert_eq!(ctx.api.store().len(), 8);
    }

    #[test]
    fn configured_catalog_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, &["x", "y"]);
        let config = StorefrontConfig {
            catalog: Some(path),
            ..Default::default()
        };

        let ctx = initialize(config, None).unwrap();
        assert_eq!(ctx.api.store().list().len(), 2);
    }

    #[test]
    fn override_beats_configured_catalog() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, &["only"]);
        let config = StorefrontConfig {
            catalog: Some(dir.path().join("missing.json")),
            ..Default::default()
        };

        let ctx = initialize(config, Some(&path)).unwrap();
        assert!(ctx.api.store().get(&"only".into()).is_some());
    }

    #[test]
    fn duplicate_ids_in_catalog_file_fail() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, &["dup", "dup"]);
        assert!(matches!(
            initialize(StorefrontConfig::default(), Some(&path)),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn invalid_products_in_catalog_file_fail() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let broken = [
            r#"{"name": "Cheap", "price": -5}"#,
            r#"{"name": "Bare", "images": []}"#,
            r#"{"name": "Overrated", "rating": 9}"#,
            r#"{"name": ""}"#,
        ];

        let valid = crate::store::memory::fixtures::product(
            "bad",
            "Plow",
            "farm-machinery",
            "AgriPro",
            10.0,
        );

        for patch in broken {
            let mut product = serde_json::to_value(&valid).unwrap();
            let patch: serde_json::Value = serde_json::from_str(patch).unwrap();
            for (key, value) in patch.as_object().unwrap() {
                product[key.as_str()] = value.clone();
            }
            fs::write(&path, serde_json::to_string(&[product]).unwrap()).unwrap();

            let err = initialize(StorefrontConfig::default(), Some(&path)).unwrap_err();
            assert!(
                matches!(&err, CatalogError::Validation(msg) if msg.contains("bad")),
                "{}: {}",
                patch,
                err
            );
        }
    }
}
