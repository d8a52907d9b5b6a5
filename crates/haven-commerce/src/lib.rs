//! Catalog, cart and pricing logic for the Hijab Haven storefront.
//!
//! The crate is the logic behind the storefront and admin views:
//!
//! - **Catalog**: products, categories, the bundled sample catalog and
//!   dashboard stats
//! - **Cart**: line items, pure cart operations, shipping/tax totals and
//!   the per-visitor session with its wishlist and newsletter signup
//! - **Search**: the listing filter, sort keys and sidebar facets
//! - **Checkout**: customer and order shapes
//!
//! # Example
//!
//! ```rust
//! use haven_commerce::prelude::*;
//!
//! let catalog = Catalog::sample()?;
//! let scarf = catalog.product(&ProductId::new("1"))?;
//!
//! let cart = Cart::new(Currency::USD).add_item(scarf, scarf.default_selection(), 1)?;
//! let totals = cart.totals(&PricingConfig::default());
//! assert_eq!(totals.total.display(), "$97.19");
//!
//! let query = CatalogQuery::new(FilterSpec::default().in_stock(), SortKey::PriceLow);
//! let listing = query.run(&catalog.products);
//! assert!(listing.iter().all(|p| p.in_stock));
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogStats, Category, Product, VariantSelection};

    // Cart
    pub use crate::cart::{
        compute_totals, Cart, CartOperation, CartTotals, LineItem, Newsletter, PricingConfig,
        ShopSession, Wishlist,
    };

    // Checkout
    pub use crate::checkout::{Address, CustomerInfo, Order, OrderStatus};

    // Search
    pub use crate::search::{
        filter_products, sort_products, CatalogQuery, FacetValue, FilterSpec, PriceRange, SortKey,
    };
}
