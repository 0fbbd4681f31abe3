//! Catalog product record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry in the bundled product catalog.
///
/// The dataset uses PascalCase keys (`ProductName`, `ProductBrand`, ...).
/// Only the two fields the search operation matches against are typed;
/// everything else (`Price`, `Gender`, `Description`, ...) is carried
/// opaquely in `extra` and round-trips through serialization untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name of the product.
    #[serde(rename = "ProductName")]
    pub name: String,

    /// Brand that sells the product.
    #[serde(rename = "ProductBrand")]
    pub brand: String,

    /// All remaining dataset fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Returns true if the product's name or brand contains `needle` as a
    /// substring, case-insensitively. `needle` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.brand.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(name: &str, brand: &str) -> Product {
        Product {
            name: name.to_owned(),
            brand: brand.to_owned(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        assert!(product("Air Max", "Nike").matches("air"));
        assert!(product("Air Max", "Nike").matches("max"));
    }

    #[test]
    fn test_matches_brand_case_insensitive() {
        assert!(product("Air Max", "Nike").matches("nike"));
        assert!(!product("Classic Tee", "Gap").matches("nike"));
    }

    #[test]
    fn test_deserialize_preserves_opaque_fields() {
        let raw = json!({
            "ProductID": 10017413,
            "ProductName": "Solid Casual Shirt",
            "ProductBrand": "DKNY",
            "Gender": "Men",
            "Price (INR)": 5249,
            "PrimaryColor": "Blue"
        });

        let p: Product = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(p.name, "Solid Casual Shirt");
        assert_eq!(p.brand, "DKNY");
        assert_eq!(p.extra.get("Gender"), Some(&json!("Men")));

        // Round-trip keeps every original key
        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back, raw);
    }
}
