//! Shopping cart module.
//!
//! Contains the cart, line items, pricing rules and the browsing session
//! that owns a cart.

#[allow(clippy::module_inception)]
mod cart;
mod pricing;
mod session;

pub use cart::{Cart, CartOperation, LineItem, MAX_QUANTITY_PER_ITEM};
pub use pricing::{
    compute_totals, CartTotals, PricingConfig, DEFAULT_FREE_SHIPPING_THRESHOLD,
    DEFAULT_SHIPPING_FEE, DEFAULT_TAX_RATE,
};
pub use session::{Newsletter, ShopSession, Wishlist};
