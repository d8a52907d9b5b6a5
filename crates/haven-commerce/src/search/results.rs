//! Facet counts for the filter sidebar.

use crate::catalog::{distinct_colors, Category, Product};
use crate::search::FilterSpec;
use serde::{Deserialize, Serialize};

/// Colors listed in the sidebar before the list is cut off.
pub const DEFAULT_COLOR_FACET_LIMIT: usize = 10;

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetValue {
    /// The value (color name, category slug).
    pub value: String,
    /// Human label.
    pub label: String,
    /// Number of products with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}

/// Colors across `products` in first-seen order, at most `limit` of them.
pub fn color_facets(products: &[Product], spec: &FilterSpec, limit: usize) -> Vec<FacetValue> {
    distinct_colors(products)
        .into_iter()
        .take(limit)
        .map(|color| FacetValue {
            count: products.iter().filter(|p| p.offers_color(&color)).count(),
            selected: spec.colors.contains(&color),
            label: color.clone(),
            value: color,
        })
        .collect()
}

/// One entry per category, counting products in `products`.
pub fn category_facets(
    categories: &[Category],
    products: &[Product],
    spec: &FilterSpec,
) -> Vec<FacetValue> {
    categories
        .iter()
        .map(|c| FacetValue {
            value: c.slug.clone(),
            label: c.name.clone(),
            count: products.iter().filter(|p| p.category == c.slug).count(),
            selected: spec.category.as_deref() == Some(c.slug.as_str()),
        })
        .collect()
}
