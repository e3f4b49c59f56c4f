//! # Configuration
//!
//! Storefront settings are loaded with [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `AGRICART_LANGUAGE`, `AGRICART_DEFAULT_SORT`, ...
//! 2. **Config file**: `agricart.toml` in the OS config directory (via `directories`),
//!    or the file given explicitly.
//! 3. **Compiled defaults**: `#[config(default = ...)]` below.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `language` | `pt-BR` | Storefront locale (`pt-BR` or `en`) |
//! | `default_sort` | `featured` | Listing order when none is requested |
//! | `related_limit` | `4` | How many related products a detail page shows |
//! | `low_stock_threshold` | `5` | Stock at or below which the report flags a product |
//! | `catalog` | unset | JSON catalog to load instead of the built-in sample |

use crate::error::{CatalogError, Result};
use crate::i18n::Language;
use crate::sort::SortKey;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILENAME: &str = "agricart.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Storefront locale: "pt-BR" or "en".
    #[config(default = "pt-BR", env = "AGRICART_LANGUAGE")]
    pub language: String,

    /// Listing order when none is requested.
    #[config(default = "featured", env = "AGRICART_DEFAULT_SORT")]
    pub default_sort: String,

    /// Number of related products shown next to a product.
    #[config(default = 4, env = "AGRICART_RELATED_LIMIT")]
    pub related_limit: usize,

    /// Stock level at or below which a product counts as low on stock.
    #[config(default = 5, env = "AGRICART_LOW_STOCK_THRESHOLD")]
    pub low_stock_threshold: u32,

    /// JSON catalog file. When absent the built-in sample catalog is used.
    #[config(env = "AGRICART_CATALOG")]
    pub catalog: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            default_sort: SortKey::default().as_str().to_string(),
            related_limit: 4,
            low_stock_threshold: 5,
            catalog: None,
        }
    }
}

impl StorefrontConfig {
    /// Load from environment and `file`. A missing file is not an error.
    pub fn load_from(file: &Path) -> Result<Self> {
        let config = Self::builder()
            .env()
            .file(file)
            .load()
            .map_err(|e| CatalogError::Config(e.to_string()))?;
        debug!(file = %file.display(), "configuration loaded");
        Ok(config)
    }

    /// Load from environment and the default config file location.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::builder()
                .env()
                .load()
                .map_err(|e| CatalogError::Config(e.to_string())),
        }
    }

    pub fn language(&self) -> Result<Language> {
        self.language.parse()
    }

    pub fn default_sort(&self) -> Result<SortKey> {
        self.default_sort.parse()
    }

    /// The settings as `key = value` lines, in table order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("language", self.language.clone()),
            ("default_sort", self.default_sort.clone()),
            ("related_limit", self.related_limit.to_string()),
            ("low_stock_threshold", self.low_stock_threshold.to_string()),
            (
                "catalog",
                self.catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in sample)".to_string()),
            ),
        ]
    }
}

/// `agricart.toml` inside the OS-specific config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "agricart", "agricart")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.language().unwrap(), Language::PtBr);
        assert_eq!(config.default_sort().unwrap(), SortKey::Featured);
        assert_eq!(config.related_limit, 4);
        assert_eq!(config.low_stock_threshold, 5);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = StorefrontConfig::load_from(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config.related_limit, 4);
        assert_eq!(config.default_sort, "featured");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "default_sort = \"price-asc\"\nrelated_limit = 2\ncatalog = \"/tmp/catalog.json\"\n",
        )
        .unwrap();

        let config = StorefrontConfig::load_from(&path).unwrap();
        assert_eq!(config.default_sort().unwrap(), SortKey::PriceAsc);
        assert_eq!(config.related_limit, 2);
        assert_eq!(config.catalog, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn test_invalid_values_surface_on_access() {
        let config = StorefrontConfig {
            language: "fr".into(),
            default_sort: "cheapest".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.language(),
            Err(CatalogError::UnknownLanguage(_))
        ));
        assert!(matches!(
            config.default_sort(),
            Err(CatalogError::UnknownSortKey(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "related_limit = \"many\"\n").unwrap();
        assert!(matches!(
            StorefrontConfig::load_from(&path),
            Err(CatalogError::Config(_))
        ));
    }

    #[test]
    fn test_entries_list_every_key() {
        let keys: Vec<_> = StorefrontConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(
            keys,
            vec![
                "language",
                "default_sort",
                "related_limit",
                "low_stock_threshold",
                "catalog"
            ]
        );
    }
}
