//! Filter values.
//!
//! A user's selections are a map from attribute name to a typed [`FilterValue`].
//! Select attributes hold a set of options, range attributes two independent bounds.
//! The key is always the bare attribute name; there are no `_min` / `_max` keys in
//! the typed form.
//!
//! The flat shape used by older clients and query strings (`"Horsepower_min": 120`,
//! `"brand": ["A"]`) is accepted at the boundary through [`ActiveFilters::from_flat`].

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

const MIN_SUFFIX: &str = "_min";
const MAX_SUFFIX: &str = "_max";

/// One active selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FilterValue {
    /// Match any of the listed options. Empty means "not active".
    Select { values: BTreeSet<String> },

    /// Inclusive numeric bounds. Either side may be open.
    Range { min: Option<f64>, max: Option<f64> },
}

impl FilterValue {
    pub fn select<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Select {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        FilterValue::Range { min, max }
    }

    /// Whether this value constrains anything at all.
    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Select { values } => !values.is_empty(),
            FilterValue::Range { min, max } => min.is_some() || max.is_some(),
        }
    }
}

/// The current filter selections of a browsing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveFilters {
    entries: BTreeMap<String, FilterValue>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries.get(key)
    }

    /// Iterate over the entries that actually constrain the result.
    pub fn active(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries
            .iter()
            .filter(|(_, v)| v.is_active())
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    pub fn set(&mut self, key: impl Into<String>, value: FilterValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the option set of a select attribute.
    pub fn set_select<I, S>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(key, FilterValue::select(values));
    }

    /// Set the lower bound of a range attribute, keeping any upper bound.
    pub fn set_min(&mut self, key: impl Into<String>, min: f64) {
        self.update_range(key.into(), Some(min), None);
    }

    /// Set the upper bound of a range attribute, keeping any lower bound.
    pub fn set_max(&mut self, key: impl Into<String>, max: f64) {
        self.update_range(key.into(), None, Some(max));
    }

    fn update_range(&mut self, key: String, new_min: Option<f64>, new_max: Option<f64>) {
        let (min, max) = match self.entries.get(&key) {
            Some(FilterValue::Range { min, max }) => (new_min.or(*min), new_max.or(*max)),
            _ => (new_min, new_max),
        };
        self.entries.insert(key, FilterValue::Range { min, max });
    }

    /// Convert the flat key convention into typed filters.
    ///
    /// - array value -> select on `key`
    /// - number under `key_min` / `key_max` -> range bound on `key`
    /// - `null` -> ignored (filter not active)
    ///
    /// Anything else is rejected.
    pub fn from_flat(flat: &serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let mut filters = ActiveFilters::new();

        for (key, value) in flat {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::Array(items) => {
                    let mut values = BTreeSet::new();
                    for item in items {
                        let serde_json::Value::String(s) = item else {
                            return Err(CatalogError::Validation(format!(
                                "filter \"{}\" must contain only strings",
                                key
                            )));
                        };
                        values.insert(s.clone());
                    }
                    filters.set(key.clone(), FilterValue::Select { values });
                }
                serde_json::Value::Number(n) => {
                    let bound = n.as_f64().ok_or_else(|| {
                        CatalogError::Validation(format!("filter \"{}\" is not a number", key))
                    })?;
                    if let Some(base) = key.strip_suffix(MIN_SUFFIX) {
                        filters.set_min(base, bound);
                    } else if let Some(base) = key.strip_suffix(MAX_SUFFIX) {
                        filters.set_max(base, bound);
                    } else {
                        return Err(CatalogError::Validation(format!(
                            "numeric filter \"{}\" needs a _min or _max suffix",
                            key
                        )));
                    }
                }
                other => {
                    return Err(CatalogError::Validation(format!(
                        "unsupported value for filter \"{}\": {}",
                        key, other
                    )))
                }
            }
        }

        Ok(filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn flat(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn empty_select_and_open_range_are_inactive() {
        assert!(!FilterValue::select(Vec::<String>::new()).is_active());
        assert!(!FilterValue::range(None, None).is_active());
        assert!(FilterValue::select(["A"]).is_active());
        assert!(FilterValue::range(Some(1.0), None).is_active());
    }

    #[test]
    fn is_empty_ignores_inactive_entries() {
        let mut filters = ActiveFilters::new();
        assert!(filters.is_empty());

        filters.set_select("brand", Vec::<String>::new());
        assert!(filters.is_empty());

        filters.set_min("Weight", 100.0);
        assert!(!filters.is_empty());
        assert_eq!(filters.active().count(), 1);
    }

    #[test]
    fn bounds_are_set_independently() {
        let mut filters = ActiveFilters::new();
        filters.set_min("Weight", 100.0);
        filters.set_max("Weight", 900.0);
        assert_eq!(
            filters.get("Weight"),
            Some(&FilterValue::range(Some(100.0), Some(900.0)))
        );

        filters.set_min("Weight", 200.0);
        assert_eq!(
            filters.get("Weight"),
            Some(&FilterValue::range(Some(200.0), Some(900.0)))
        );
    }

    #[test]
    fn from_flat_builds_typed_filters() {
        let filters = ActiveFilters::from_flat(&flat(json!({
            "brand": ["AgriPro", "SeedPro"],
            "Horsepower_min": 120,
            "Horsepower_max": 400.5,
            "Weight_min": null
        })))
        .unwrap();

        assert_eq!(
            filters.get("brand"),
            Some(&FilterValue::select(["AgriPro", "SeedPro"]))
        );
        assert_eq!(
            filters.get("Horsepower"),
            Some(&FilterValue::range(Some(120.0), Some(400.5)))
        );
        assert!(filters.get("Weight").is_none());
        assert!(filters.get("Horsepower_min").is_none());
    }

    #[test]
    fn from_flat_rejects_unsuffixed_numbers() {
        let result = ActiveFilters::from_flat(&flat(json!({ "Horsepower": 100 })));
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn from_flat_rejects_non_string_options() {
        let result = ActiveFilters::from_flat(&flat(json!({ "brand": [1, 2] })));
        assert!(matches!(result, Err(CatalogError::Validation(_))));

        let result = ActiveFilters::from_flat(&flat(json!({ "brand": "A" })));
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn typed_filters_round_trip_through_json() {
        let mut filters = ActiveFilters::new();
        filters.set_select("brand", ["A"]);
        filters.set_max("Weight", 10.0);

        let json = serde_json::to_string(&filters).unwrap();
        let back: ActiveFilters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filters);
    }
}
