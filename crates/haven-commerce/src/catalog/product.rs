//! Product and variant selection types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Loaded once from the fixture and treated as immutable reference data
/// for the rest of the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Current selling price.
    pub price: Money,
    /// Pre-discount price, shown struck through when higher than `price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Image URLs, first one is the primary image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category slug.
    pub category: String,
    /// Colors this product is offered in.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Sizes this product is offered in.
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Whether the product can be purchased right now.
    pub in_stock: bool,
    /// Promoted on the home page and sorted first under "Featured".
    #[serde(default)]
    pub featured: bool,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create an in-stock product with no variants.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            images: Vec::new(),
            category: category.into(),
            colors: Vec::new(),
            sizes: Vec::new(),
            in_stock: true,
            featured: false,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the offered colors.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the offered sizes.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the pre-discount price.
    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Set the stock flag.
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Set the featured flag.
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Set the creation timestamp.
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    /// Storefront SKU, e.g. `HH-7`.
    pub fn sku(&self) -> String {
        format!("HH-{}", self.id.as_str().to_uppercase())
    }

    /// Check if the product is discounted against its original price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.currency == self.price.currency && op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Whole-number discount percentage, rounded to nearest.
    ///
    /// `None` unless the product is on sale.
    pub fn discount_percentage(&self) -> Option<u32> {
        if !self.is_on_sale() {
            return None;
        }
        let original = self.original_price?.amount_cents;
        let savings = original - self.price.amount_cents;
        Some(((savings as f64 / original as f64) * 100.0).round() as u32)
    }

    /// Check if the product is offered in `color`.
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Check if the product is offered in `size`.
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// The variant preselected on the product page: first color, first size.
    pub fn default_selection(&self) -> VariantSelection {
        VariantSelection {
            color: self.colors.first().cloned().unwrap_or_default(),
            size: self.sizes.first().cloned().unwrap_or_default(),
        }
    }

    /// Primary image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A chosen color/size combination for a product.
///
/// An empty string means the product has no options on that axis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct VariantSelection {
    pub color: String,
    pub size: String,
}

impl VariantSelection {
    pub fn new(color: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            size: size.into(),
        }
    }

    /// Build the variant label, e.g. "Navy Blue / One Size".
    pub fn label(&self) -> String {
        match (self.color.is_empty(), self.size.is_empty()) {
            (true, true) => "Default".to_string(),
            (false, true) => self.color.clone(),
            (true, false) => self.size.clone(),
            (false, false) => format!("{} / {}", self.color, self.size),
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
