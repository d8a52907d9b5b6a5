//! Listing filter.

use crate::catalog::Product;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Upper end of the storefront price slider, in major units.
pub const DEFAULT_PRICE_CEILING: f64 = 200.0;

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Build a range from decimal major units.
    pub fn from_decimal(min: f64, max: f64, currency: Currency) -> Self {
        Self::new(
            Money::from_decimal(min, currency),
            Money::from_decimal(max, currency),
        )
    }

    /// Check if min is above max.
    pub fn is_inverted(&self) -> bool {
        self.min.amount_cents > self.max.amount_cents
    }

    /// The same range with min and max swapped if they were inverted.
    pub fn normalized(&self) -> Self {
        if self.is_inverted() {
            Self::new(self.max, self.min)
        } else {
            *self
        }
    }

    /// Inclusive containment on the amount.
    pub fn contains(&self, price: &Money) -> bool {
        let range = self.normalized();
        price.amount_cents >= range.min.amount_cents && price.amount_cents <= range.max.amount_cents
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::from_decimal(0.0, DEFAULT_PRICE_CEILING, Currency::USD)
    }
}

/// User-selected constraints on the product listing.
///
/// The five dimensions are fixed; unknown keys are rejected when the filter
/// is deserialized. All set dimensions must match (logical AND).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FilterSpec {
    /// Case-insensitive substring of name or description. Empty matches all.
    pub search_text: String,
    /// Exact category slug. `None` or empty matches all.
    pub category: Option<String>,
    /// Inclusive price bounds.
    pub price_range: PriceRange,
    /// Product must offer at least one of these. Empty matches all.
    pub colors: BTreeSet<String>,
    /// Exclude out-of-stock products.
    pub in_stock_only: bool,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::cleared(DEFAULT_PRICE_CEILING, Currency::USD)
    }
}

impl FilterSpec {
    /// The state after "Clear All": nothing selected, full slider range.
    pub fn cleared(price_ceiling: f64, currency: Currency) -> Self {
        Self {
            search_text: String::new(),
            category: None,
            price_range: PriceRange::from_decimal(0.0, price_ceiling, currency),
            colors: BTreeSet::new(),
            in_stock_only: false,
        }
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Set the category slug.
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category = Some(slug.into());
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Add a color to the accepted set.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.insert(color.into());
        self
    }

    /// Only keep in-stock products.
    pub fn in_stock(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Select a category, or clear it when it is already selected.
    pub fn toggle_category(&mut self, slug: &str) {
        if self.category.as_deref() == Some(slug) {
            self.category = None;
        } else {
            self.category = Some(slug.to_string());
        }
    }

    /// Add a color to the set, or remove it when present.
    pub fn toggle_color(&mut self, color: &str) {
        if !self.colors.remove(color) {
            self.colors.insert(color.to_string());
        }
    }

    /// Check a product against every dimension.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_text(product)
            && self.matches_category(product)
            && self.price_range.contains(&product.price)
            && self.matches_colors(product)
            && (!self.in_stock_only || product.in_stock)
    }

    fn matches_text(&self, product: &Product) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, product: &Product) -> bool {
        match self.category.as_deref() {
            None | Some("") => true,
            Some(slug) => product.category == slug,
        }
    }

    fn matches_colors(&self, product: &Product) -> bool {
        self.colors.is_empty() || product.colors.iter().any(|c| self.colors.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price_cents: i64) -> Product {
        Product::new("p", name, Money::new(price_cents, Currency::USD), "silk-hijabs")
            .with_description("Soft and light")
            .with_colors(["Navy Blue", "Burgundy"])
    }

    #[test]
    fn test_default_matches_everything_in_range() {
        let spec = FilterSpec::default();
        assert!(spec.matches(&product("Scarf", 8999)));
        assert!(spec.matches(&product("Scarf", 20000)));
        assert!(!spec.matches(&product("Scarf", 20001)));
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_or_description() {
        let p = product("Elegant Silk Scarf", 1000);
        assert!(FilterSpec::default().with_search("SILK").matches(&p));
        assert!(FilterSpec::default().with_search("light").matches(&p));
        assert!(!FilterSpec::default().with_search("jersey").matches(&p));
    }

    #[test]
    fn test_category() {
        let p = product("Scarf", 1000);
        assert!(FilterSpec::default().with_category("silk-hijabs").matches(&p));
        assert!(FilterSpec::default().with_category("").matches(&p));
        assert!(!FilterSpec::default().with_category("silk").matches(&p));
    }

    #[test]
    fn test_price_range_inclusive_and_normalized() {
        let p = product("Scarf", 2500);
        let exact = PriceRange::from_decimal(25.0, 25.0, Currency::USD);
        assert!(FilterSpec::default().with_price_range(exact).matches(&p));

        let inverted = PriceRange::from_decimal(30.0, 20.0, Currency::USD);
        assert!(inverted.is_inverted());
        assert_eq!(
            inverted.normalized(),
            PriceRange::from_decimal(20.0, 30.0, Currency::USD)
        );
        assert!(FilterSpec::default().with_price_range(inverted).matches(&p));
    }

    #[test]
    fn test_colors_any_of() {
        let p = product("Scarf", 1000);
        assert!(FilterSpec::default().with_color("Burgundy").with_color("Teal").matches(&p));
        assert!(!FilterSpec::default().with_color("Teal").matches(&p));
    }

    #[test]
    fn test_in_stock_only() {
        let p = product("Scarf", 1000).with_stock(false);
        assert!(FilterSpec::default().matches(&p));
        assert!(!FilterSpec::default().in_stock().matches(&p));
    }

    #[test]
    fn test_toggles() {
        let mut spec = FilterSpec::default();
        spec.toggle_category("silk-hijabs");
        assert_eq!(spec.category.as_deref(), Some("silk-hijabs"));
        spec.toggle_category("cotton-hijabs");
        assert_eq!(spec.category.as_deref(), Some("cotton-hijabs"));
        spec.toggle_category("cotton-hijabs");
        assert_eq!(spec.category, None);

        spec.toggle_color("Black");
        assert!(spec.colors.contains("Black"));
        spec.toggle_color("Black");
        assert!(spec.colors.is_empty());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let ok: FilterSpec =
            serde_json::from_str(r#"{"search_text":"silk","in_stock_only":true}"#).unwrap();
        assert_eq!(ok.search_text, "silk");
        assert!(ok.in_stock_only);
        assert_eq!(ok.price_range, PriceRange::default());

        let bad = serde_json::from_str::<FilterSpec>(r#"{"brand":"acme"}"#);
        assert!(bad.is_err());
    }
}
