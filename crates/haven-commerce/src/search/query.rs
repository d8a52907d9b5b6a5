//! Listing query: filter, then sort.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::FilterSpec;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Featured products first, catalog order otherwise.
    #[default]
    #[serde(rename = "featured")]
    Featured,
    /// Price, low to high.
    #[serde(rename = "price-low")]
    PriceLow,
    /// Price, high to low.
    #[serde(rename = "price-high")]
    PriceHigh,
    /// Name A-Z, ignoring case.
    #[serde(rename = "name")]
    Name,
    /// Newest first.
    #[serde(rename = "newest")]
    Newest,
}

impl SortKey {
    /// Every option, in dropdown order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Name,
        SortKey::Newest,
    ];

    /// The key as it appears in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Name => "name",
            SortKey::Newest => "newest",
        }
    }

    /// Label for the sort dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Name => "Name: A to Z",
            SortKey::Newest => "Newest First",
        }
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownSortKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep the products matching `spec`, in input order.
pub fn filter_products(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    if spec.price_range.is_inverted() {
        tracing::warn!(
            min = spec.price_range.min.amount_cents,
            max = spec.price_range.max.amount_cents,
            "price range inverted, swapping bounds"
        );
    }
    products
        .iter()
        .filter(|p| spec.matches(p))
        .cloned()
        .collect()
}

/// Order products by `key`. Stable: ties keep their input order.
pub fn sort_products(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::Featured => sorted.sort_by_key(|p| Reverse(p.featured)),
        SortKey::PriceLow => sorted.sort_by_key(|p| p.price.amount_cents),
        SortKey::PriceHigh => sorted.sort_by_key(|p| Reverse(p.price.amount_cents)),
        SortKey::Name => sorted.sort_by_cached_key(|p| p.name.to_lowercase()),
        SortKey::Newest => sorted.sort_by_key(|p| Reverse(p.created_at)),
    }
    sorted
}

/// A listing request: which products, in what order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogQuery {
    pub filter: FilterSpec,
    pub sort: SortKey,
}

impl CatalogQuery {
    pub fn new(filter: FilterSpec, sort: SortKey) -> Self {
        Self { filter, sort }
    }

    /// Filter then sort. The input is left untouched.
    pub fn run(&self, products: &[Product]) -> Vec<Product> {
        let filtered = filter_products(products, &self.filter);
        let sorted = sort_products(&filtered, self.sort);
        tracing::debug!(
            candidates = products.len(),
            matched = sorted.len(),
            sort = %self.sort,
            "ran catalog query"
        );
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, name: &str, price: i64, featured: bool, created: i64) -> Product {
        Product::new(id, name, Money::new(price, Currency::USD), "cotton-hijabs")
            .with_featured(featured)
            .with_created_at(created)
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("a", "beige wrap", 2000, false, 10),
            product("b", "Amber Shawl", 3500, true, 30),
            product("c", "cotton basic", 2000, false, 20),
            product("d", "Dusk Silk", 1500, true, 30),
        ]
    }

    #[test]
    fn test_sort_key_round_trip_strings() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!(matches!(
            "cheapest".parse::<SortKey>(),
            Err(CommerceError::UnknownSortKey(_))
        ));
        assert_eq!(
            serde_json::to_string(&SortKey::PriceHigh).unwrap(),
            "\"price-high\""
        );
    }

    #[test]
    fn test_featured_is_stable() {
        assert_eq!(ids(&sort_products(&fixture(), SortKey::Featured)), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_price_sorts_are_stable() {
        assert_eq!(ids(&sort_products(&fixture(), SortKey::PriceLow)), ["d", "a", "c", "b"]);
        assert_eq!(ids(&sort_products(&fixture(), SortKey::PriceHigh)), ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_name_ignores_case() {
        assert_eq!(ids(&sort_products(&fixture(), SortKey::Name)), ["b", "a", "c", "d"]);
    }

    #[test]
    fn test_newest_is_stable() {
        assert_eq!(ids(&sort_products(&fixture(), SortKey::Newest)), ["b", "d", "c", "a"]);
    }

    #[test]
    fn test_filter_then_sort() {
        let products = fixture();
        let query = CatalogQuery::new(FilterSpec::default().with_search("s"), SortKey::PriceLow);
        // "beige wrap" has no "s"
        assert_eq!(ids(&query.run(&products)), ["d", "c", "b"]);
        assert_eq!(ids(&products), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let spec = FilterSpec::default().with_search("a");
        let once = filter_products(&fixture(), &spec);
        let twice = filter_products(&once, &spec);
        assert_eq!(once, twice);
    }
}
