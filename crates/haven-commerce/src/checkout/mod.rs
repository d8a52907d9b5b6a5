//! Checkout module.
//!
//! Declares the customer and order shapes that a checkout flow would
//! consume. Orders are snapshots of a cart.

mod customer;
mod order;

pub use customer::{Address, CustomerInfo};
pub use order::{Order, OrderStatus};
