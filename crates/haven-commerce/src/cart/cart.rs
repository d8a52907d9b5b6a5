//! Cart and line item types.
//!
//! Every cart operation takes `&self` and returns a new [`Cart`], so the
//! previous value stays available for re-rendering or undo.

use super::pricing::compute_totals_in;
use crate::cart::{CartTotals, PricingConfig};
use crate::catalog::{Product, VariantSelection};
use crate::error::CommerceError;
use crate::ids::{LineItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: u32 = 999;

/// A shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart, in the order they were added.
    pub items: Vec<LineItem>,
    /// Cart currency.
    pub currency: Currency,
}

/// A mutation requested by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CartOperation {
    /// Replace a line's quantity; zero or below removes it.
    SetQuantity {
        line_item_id: LineItemId,
        quantity: i64,
    },
    /// Remove a line.
    Remove { line_item_id: LineItemId },
    /// Empty the cart.
    Clear,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` of `product` in the chosen variant.
    ///
    /// A line with the same product, color and size absorbs the quantity;
    /// otherwise a new line is appended capturing the product's current
    /// price.
    ///
    /// Returns an error if:
    /// - the product is out of stock
    /// - the color or size is not offered
    /// - quantity is not positive or the line would exceed MAX_QUANTITY_PER_ITEM
    /// - the product is priced in another currency
    pub fn add_item(
        &self,
        product: &Product,
        selection: VariantSelection,
        quantity: i64,
    ) -> Result<Cart, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if !product.in_stock {
            return Err(CommerceError::OutOfStock(product.id.to_string()));
        }
        validate_selection(product, &selection)?;
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        let mut next = self.clone();
        let existing = next
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id && i.selection() == selection);

        let new_quantity = match &existing {
            Some(item) => i64::from(item.quantity) + quantity,
            None => quantity,
        };
        if new_quantity > i64::from(MAX_QUANTITY_PER_ITEM) {
            return Err(CommerceError::QuantityExceedsLimit(
                new_quantity,
                i64::from(MAX_QUANTITY_PER_ITEM),
            ));
        }

        // bounded by MAX_QUANTITY_PER_ITEM above
        let new_quantity = new_quantity as u32;
        match existing {
            Some(item) => item.quantity = new_quantity,
            None => next
                .items
                .push(LineItem::for_product(product, selection, new_quantity)),
        }

        tracing::debug!(product = %product.id, quantity, "added to cart");
        Ok(next)
    }

    /// Return a cart with the line's quantity replaced.
    ///
    /// `new_quantity <= 0` removes the line, exactly as
    /// [`remove_line_item`](Self::remove_line_item) would. Any positive
    /// quantity replaces the old one as given; MAX_QUANTITY_PER_ITEM only
    /// bounds [`add_item`](Self::add_item). An unknown id leaves the cart
    /// unchanged.
    pub fn set_quantity(&self, line_item_id: &LineItemId, new_quantity: i64) -> Cart {
        if new_quantity <= 0 {
            return self.remove_line_item(line_item_id);
        }

        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        let mut next = self.clone();
        if let Some(item) = next.items.iter_mut().find(|i| &i.id == line_item_id) {
            item.quantity = quantity;
            tracing::debug!(line = %line_item_id, quantity, "updated cart quantity");
        }
        next
    }

    /// Return a cart without the line. An unknown id is a no-op.
    pub fn remove_line_item(&self, line_item_id: &LineItemId) -> Cart {
        let mut next = self.clone();
        next.items.retain(|i| &i.id != line_item_id);
        if next.items.len() < self.items.len() {
            tracing::debug!(line = %line_item_id, "removed from cart");
        }
        next
    }

    /// Return an empty cart in the same currency.
    pub fn cleared(&self) -> Cart {
        Cart::new(self.currency)
    }

    /// Apply a presentation-layer operation.
    pub fn apply(&self, operation: &CartOperation) -> Cart {
        match operation {
            CartOperation::SetQuantity {
                line_item_id,
                quantity,
            } => self.set_quantity(line_item_id, *quantity),
            CartOperation::Remove { line_item_id } => self.remove_line_item(line_item_id),
            CartOperation::Clear => self.cleared(),
        }
    }

    /// Total units in the cart (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of each line's price times quantity.
    pub fn total(&self) -> Money {
        let cents = self
            .items
            .iter()
            .map(|i| i.line_total().amount_cents)
            .fold(0_i64, i64::saturating_add);
        Money::new(cents, self.currency)
    }

    /// Full order summary under `config`, in the cart's currency.
    pub fn totals(&self, config: &PricingConfig) -> CartTotals {
        compute_totals_in(&self.items, self.currency, config)
    }
}

fn validate_selection(product: &Product, selection: &VariantSelection) -> Result<(), CommerceError> {
    let color_ok = if product.colors.is_empty() {
        selection.color.is_empty()
    } else {
        product.offers_color(&selection.color)
    };
    if !color_ok {
        return Err(CommerceError::ColorUnavailable {
            product_id: product.id.to_string(),
            color: selection.color.clone(),
        });
    }

    let size_ok = if product.sizes.is_empty() {
        selection.size.is_empty()
    } else {
        product.offers_size(&selection.size)
    };
    if !size_ok {
        return Err(CommerceError::SizeUnavailable {
            product_id: product.id.to_string(),
            size: selection.size.clone(),
        });
    }
    Ok(())
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Chosen color, empty when the product has none.
    #[serde(default)]
    pub color: String,
    /// Chosen size, empty when the product has none.
    #[serde(default)]
    pub size: String,
    /// Always positive while the line is in a cart.
    pub quantity: u32,
    /// Price captured when the line was added.
    pub unit_price: Money,
}

impl LineItem {
    /// Create a line item without a variant.
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            id: LineItemId::generate(),
            product_id,
            product_name: product_name.into(),
            color: String::new(),
            size: String::new(),
            quantity,
            unit_price,
        }
    }

    /// Create a line item for a catalog product at its current price.
    pub fn for_product(product: &Product, selection: VariantSelection, quantity: u32) -> Self {
        Self {
            id: LineItemId::generate(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            color: selection.color,
            size: selection.size,
            quantity,
            unit_price: product.price,
        }
    }

    /// The chosen variant.
    pub fn selection(&self) -> VariantSelection {
        VariantSelection::new(self.color.clone(), self.size.clone())
    }

    /// unit_price * quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_multiply(i64::from(self.quantity))
    }
}
