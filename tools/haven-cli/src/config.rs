//! CLI configuration.

use anyhow::{Context, Result};
use haven_commerce::cart::PricingConfig;
use haven_commerce::money::Currency;
use haven_commerce::search::{SortKey, DEFAULT_COLOR_FACET_LIMIT, DEFAULT_PRICE_CEILING};
use serde::{Deserialize, Serialize};

/// File names searched for when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["haven.toml", ".haven.toml", "haven.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HavenConfig {
    /// Shipping and tax rules.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Listing defaults.
    #[serde(default)]
    pub storefront: StorefrontConfig,
}

impl HavenConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(&content, path.ends_with(".json"))
            .with_context(|| format!("Failed to parse config file: {}", path))
    }

    /// Parse config text, JSON or TOML.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Hard errors that make the config unusable.
    pub fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if let Err(e) = self.pricing.validate() {
            errors.push(format!("pricing: {}", e));
        }
        if !self.storefront.price_ceiling.is_finite() || self.storefront.price_ceiling <= 0.0 {
            errors.push(format!(
                "storefront.price_ceiling must be positive, got {}",
                self.storefront.price_ceiling
            ));
        }
        errors
    }

    /// Settings that work but are probably not intended.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.storefront.color_facet_limit == 0 {
            warnings.push("storefront.color_facet_limit is 0, no colors will be offered".to_string());
        }
        if self.pricing.free_shipping_threshold == 0.0 {
            warnings.push("pricing.free_shipping_threshold is 0, every order ships free".to_string());
        }
        warnings
    }
}

/// Listing defaults for the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Sort applied when `--sort` is not given.
    #[serde(default)]
    pub default_sort: SortKey,

    /// Colors shown in the filter sidebar.
    #[serde(default = "default_color_facet_limit")]
    pub color_facet_limit: usize,

    /// Upper end of the price slider, in major units.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: f64,

    /// Currency carts are opened in.
    #[serde(default)]
    pub currency: Currency,

    /// Catalog JSON file; the bundled sample when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_color_facet_limit() -> usize {
    DEFAULT_COLOR_FACET_LIMIT
}

fn default_price_ceiling() -> f64 {
    DEFAULT_PRICE_CEILING
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::default(),
            color_facet_limit: default_color_facet_limit(),
            price_ceiling: default_price_ceiling(),
            currency: Currency::default(),
            catalog: None,
        }
    }
}

/// Generate a default haven.toml config file.
pub fn generate_default_config() -> String {
    r#"# Hijab Haven storefront configuration

[pricing]
# Orders above this subtotal ship free
free_shipping_threshold = 50.0
shipping_fee = 9.99
tax_rate = 0.08

[storefront]
# featured | price-low | price-high | name | newest
default_sort = "featured"
color_facet_limit = 10
price_ceiling = 200.0
# Pricing amounts above are read in this currency
currency = "USD"
# catalog = "catalog.json"
"#
    .to_string()
}
