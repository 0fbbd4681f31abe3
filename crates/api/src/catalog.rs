//! Catalog search service.
//!
//! Holds the immutable product catalog, loaded once at startup from the
//! bundled dataset. Search is a linear, stable, case-insensitive substring
//! filter over the `ProductName` and `ProductBrand` fields. No pagination,
//! no relevance scoring, no mutation after load.

use thiserror::Error;

use threadline_core::Product;

/// Bundled product dataset, embedded at compile time.
static DATASET: &str = include_str!("../data/catalog.json");

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The query was empty or missing after trimming whitespace.
    #[error("query parameter is required")]
    MissingQuery,

    /// The bundled dataset could not be parsed.
    #[error("invalid catalog dataset: {0}")]
    Dataset(#[from] serde_json::Error),
}

/// The in-memory product catalog.
///
/// Read-only after construction, so concurrent searches need no locking.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog from the bundled dataset.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Dataset` if the bundled JSON is malformed.
    pub fn load() -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(DATASET)?;
        Ok(Self { products })
    }

    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Search the catalog.
    ///
    /// The query is trimmed and lower-cased; a product is included if its
    /// lower-cased name OR brand contains the normalized query as a
    /// substring. Results preserve dataset order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingQuery` if the query is empty after
    /// trimming.
    pub fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(CatalogError::MissingQuery);
        }

        Ok(self
            .products
            .iter()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Catalog {
        let products = serde_json::from_value(json!([
            { "ProductName": "Air Max", "ProductBrand": "Nike" },
            { "ProductName": "Classic Tee", "ProductBrand": "Gap" },
            { "ProductName": "Nike Court Visor", "ProductBrand": "Unbranded" },
            { "ProductName": "Ultraboost", "ProductBrand": "Adidas" }
        ]))
        .unwrap();
        Catalog::from_products(products)
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let catalog = Catalog::load().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_empty_query_is_rejected() {
        let catalog = fixture();
        assert!(matches!(
            catalog.search(""),
            Err(CatalogError::MissingQuery)
        ));
        assert!(matches!(
            catalog.search("   "),
            Err(CatalogError::MissingQuery)
        ));
        assert!(matches!(
            catalog.search("\t\n"),
            Err(CatalogError::MissingQuery)
        ));
    }

    #[test]
    fn test_matches_name_or_brand_case_insensitive() {
        let catalog = fixture();
        let results = catalog.search("NIKE").unwrap();
        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        // Brand match on the first record, name match on the third
        assert_eq!(names, vec!["Air Max", "Nike Court Visor"]);
    }

    #[test]
    fn test_query_is_trimmed_before_matching() {
        let catalog = fixture();
        let results = catalog.search("  gap  ").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results.first().unwrap().brand, "Gap");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = fixture();
        assert!(catalog.search("zzzz").unwrap().is_empty());
    }

    #[test]
    fn test_results_preserve_dataset_order() {
        let catalog = fixture();
        // every fixture record contains an "a" in name or brand
        let results = catalog.search("a").unwrap();
        let names: Vec<&str> = results.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Air Max", "Classic Tee", "Nike Court Visor", "Ultraboost"]
        );
    }

    #[test]
    fn test_repeated_search_is_idempotent() {
        let catalog = fixture();
        let first = catalog.search("nike").unwrap();
        let second = catalog.search("nike").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_substring_not_token_match() {
        let catalog = fixture();
        // "boost" is not a standalone token in "Ultraboost"
        let results = catalog.search("boost").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results.first().unwrap().brand, "Adidas");
    }
}
