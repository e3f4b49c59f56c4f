//! Attribute specifications.
//!
//! This module defines the schema types: what kind of filter an attribute offers and
//! the bounds or options it was derived with.

use serde::{Deserialize, Serialize};

/// Name of the reserved attribute backed by `Product::brand` rather than a spec.
pub const BRAND: &str = "brand";

/// The kind of filter an attribute offers, with the data the filter UI needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AttributeKind {
    /// Pick any of a closed set of observed values.
    Select { options: Vec<String> },

    /// Numeric interval over observed values.
    ///
    /// `unit` is display-only and may be empty.
    Range { min: f64, max: f64, unit: String },

    /// Free text. Declared for hand-built schemas, never derived.
    Text,

    /// Single number. Declared for hand-built schemas, never derived.
    Number,
}

/// A filterable attribute of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAttribute {
    /// `brand` or a spec key
    pub name: String,

    #[serde(flatten)]
    pub kind: AttributeKind,
}

impl CategoryAttribute {
    pub fn select(name: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Select { options },
        }
    }

    pub fn range(name: impl Into<String>, min: f64, max: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Range {
                min,
                max,
                unit: unit.into(),
            },
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self.kind, AttributeKind::Range { .. })
    }

    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            AttributeKind::Select { options } => Some(options),
            _ => None,
        }
    }

    /// Label for filter headings, e.g. `"fuelCapacity"` -> `"Fuel Capacity"`.
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }
}

/// The derived filter schema of one category.
///
/// `brand` always comes first, followed by the spec keys in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilter {
    pub category: String,
    pub attributes: Vec<CategoryAttribute>,
}

impl CategoryFilter {
    pub fn attribute(&self, name: &str) -> Option<&CategoryAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// Infer a display unit from a spec key (case-insensitive substring match).
pub fn unit_for_key(key: &str) -> &'static str {
    let lower = key.to_lowercase();
    if lower.contains("horsepower") {
        "HP"
    } else if lower.contains("weight") {
        "kg"
    } else if lower.contains("capacity") {
        "L"
    } else if lower.contains("hours") {
        "hrs"
    } else if lower.contains("year") {
        ""
    } else if lower.contains("mileage") || lower.contains("odometer") {
        "km"
    } else {
        ""
    }
}

/// Split camelCase boundaries and capitalize each word.
pub fn display_name(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_uppercase() && prev_lower {
            spaced.push(' ');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        spaced.push(c);
    }

    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
