//! The loaded product catalog and its lookups.

use crate::catalog::{Category, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Bundled sample data for the storefront.
const SAMPLE_CATALOG: &str = include_str!("../../data/catalog.json");

/// Products and categories loaded once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-loaded parts.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// Parse a catalog from its JSON fixture form.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        tracing::debug!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The bundled sample catalog.
    pub fn sample() -> Result<Self, CommerceError> {
        Self::from_json(SAMPLE_CATALOG)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Look up a category by slug.
    pub fn category(&self, slug: &str) -> Result<&Category, CommerceError> {
        self.categories
            .iter()
            .find(|c| c.slug == slug)
            .ok_or_else(|| CommerceError::CategoryNotFound(slug.to_string()))
    }

    /// Products flagged as featured, in catalog order.
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Every color offered by any product, in first-seen order.
    pub fn colors(&self) -> Vec<String> {
        distinct_colors(&self.products)
    }

    /// Counts shown on the admin dashboard.
    pub fn stats(&self) -> CatalogStats {
        let per_category = self
            .categories
            .iter()
            .map(|c| CategoryCount {
                slug: c.slug.clone(),
                name: c.name.clone(),
                products: self.products.iter().filter(|p| p.category == c.slug).count(),
            })
            .collect();

        CatalogStats {
            total_products: self.products.len(),
            in_stock: self.products.iter().filter(|p| p.in_stock).count(),
            out_of_stock: self.products.iter().filter(|p| !p.in_stock).count(),
            featured: self.products.iter().filter(|p| p.featured).count(),
            on_sale: self.products.iter().filter(|p| p.is_on_sale()).count(),
            categories: self.categories.len(),
            per_category,
        }
    }
}

/// Distinct colors across `products`, in first-seen order.
pub(crate) fn distinct_colors(products: &[Product]) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();
    for color in products.iter().flat_map(|p| p.colors.iter()) {
        if !colors.contains(color) {
            colors.push(color.clone());
        }
    }
    colors
}

/// Catalog counts for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub featured: usize,
    pub on_sale: usize,
    pub categories: usize,
    pub per_category: Vec<CategoryCount>,
}

/// Number of products in one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub slug: String,
    pub name: String,
    pub products: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_loads() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.categories.len(), 4);
        assert!(catalog.products.iter().all(|p| catalog.category(&p.category).is_ok()));
    }

    #[test]
    fn test_product_lookup() {
        let catalog = Catalog::sample().unwrap();
        let product = catalog.product(&ProductId::new("1")).unwrap();
        assert_eq!(product.name, "Elegant Silk Scarf");

        let missing = catalog.product(&ProductId::new("404"));
        assert_eq!(missing, Err(CommerceError::ProductNotFound("404".to_string())));
    }

    #[test]
    fn test_colors_are_distinct_in_first_seen_order() {
        let catalog = Catalog::sample().unwrap();
        let colors = catalog.colors();
        assert_eq!(&colors[..3], ["Navy Blue", "Burgundy", "Forest Green"]);
        let black = colors.iter().filter(|c| c.as_str() == "Black").count();
        assert_eq!(black, 1);
    }

    #[test]
    fn test_stats() {
        let catalog = Catalog::sample().unwrap();
        let stats = catalog.stats();
        assert_eq!(stats.total_products, 8);
        assert_eq!(stats.in_stock, 6);
        assert_eq!(stats.out_of_stock, 2);
        assert_eq!(stats.featured, 4);
        assert_eq!(stats.on_sale, 3);
        assert_eq!(stats.categories, 4);
        assert!(stats.per_category.iter().all(|c| c.products == 2));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Catalog::from_json("{\"products\": 3}"),
            Err(CommerceError::SerializationError(_))
        ));
    }
}
