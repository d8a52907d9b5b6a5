//! Per-visitor browsing session.

use crate::cart::{Cart, CartOperation, CartTotals, PricingConfig};
use crate::catalog::{Catalog, Product, VariantSelection};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use crate::search::{CatalogQuery, FilterSpec, SortKey};
use serde::{Deserialize, Serialize};

/// State owned by one browsing session: cart, current listing query,
/// favorites and newsletter signup. Nothing here outlives the session.
///
/// The cart is only ever replaced with the result of a pure cart
/// operation, never edited in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShopSession {
    pub cart: Cart,
    pub query: CatalogQuery,
    pub wishlist: Wishlist,
    #[serde(default)]
    pub newsletter: Newsletter,
}

impl ShopSession {
    /// Start a session with an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            query: CatalogQuery::default(),
            wishlist: Wishlist::default(),
            newsletter: Newsletter::default(),
        }
    }

    /// Add a product to the cart.
    ///
    /// On error the cart is left as it was.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        selection: VariantSelection,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        self.cart = self.cart.add_item(product, selection, quantity)?;
        Ok(())
    }

    /// Apply a cart operation.
    pub fn apply(&mut self, operation: &CartOperation) {
        self.cart = self.cart.apply(operation);
    }

    /// Replace the listing filter.
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.query.filter = filter;
    }

    /// Replace the listing sort.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
    }

    /// Products to show for the current filter and sort.
    pub fn listing(&self, catalog: &Catalog) -> Vec<Product> {
        self.query.run(&catalog.products)
    }

    /// Order summary for the current cart.
    pub fn totals(&self, config: &PricingConfig) -> CartTotals {
        self.cart.totals(config)
    }

    /// Sign up for the newsletter. See [`Newsletter::subscribe`].
    pub fn subscribe(&mut self, email: &str) -> Result<(), CommerceError> {
        self.newsletter.subscribe(email)
    }
}

/// Newsletter signup state. Only the session remembers it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Newsletter {
    email: Option<String>,
}

impl Newsletter {
    /// Record a signup for `email`, trimmed.
    ///
    /// A blank address, or one without text on both sides of an `@`, is
    /// rejected and leaves the previous signup in place. Subscribing again
    /// replaces the address.
    pub fn subscribe(&mut self, email: &str) -> Result<(), CommerceError> {
        let email = email.trim();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !well_formed {
            return Err(CommerceError::InvalidEmail(email.to_string()));
        }

        self.email = Some(email.to_string());
        tracing::debug!(email, "subscribed to newsletter");
        Ok(())
    }

    pub fn is_subscribed(&self) -> bool {
        self.email.is_some()
    }

    /// The subscribed address, if any.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Favorited products, in the order they were favorited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wishlist {
    products: Vec<ProductId>,
}

impl Wishlist {
    /// Flip the favorite state of a product. Returns the new state.
    pub fn toggle(&mut self, product_id: &ProductId) -> bool {
        if let Some(pos) = self.products.iter().position(|p| p == product_id) {
            self.products.remove(pos);
            false
        } else {
            self.products.push(product_id.clone());
            true
        }
    }

    /// Check if a product is favorited.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.products.contains(product_id)
    }

    /// Favorited product ids.
    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cart_flow() {
        let catalog = Catalog::sample().unwrap();
        let scarf = catalog.product(&ProductId::new("1")).unwrap();

        let mut session = ShopSession::new(Currency::USD);
        session
            .add_to_cart(scarf, scarf.default_selection(), 2)
            .unwrap();
        assert_eq!(session.cart.item_count(), 2);

        let line = session.cart.items[0].id.clone();
        session.apply(&CartOperation::SetQuantity {
            line_item_id: line,
            quantity: 0,
        });
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_failed_add_keeps_cart() {
        let catalog = Catalog::sample().unwrap();
        let cotton = catalog.product(&ProductId::new("2")).unwrap();
        let sold_out = catalog.product(&ProductId::new("5")).unwrap();

        let mut session = ShopSession::new(Currency::USD);
        session.add_to_cart(cotton, cotton.default_selection(), 1).unwrap();
        let before = session.cart.clone();

        let result = session.add_to_cart(sold_out, sold_out.default_selection(), 1);
        assert!(matches!(result, Err(CommerceError::OutOfStock(_))));
        assert_eq!(session.cart, before);
    }

    #[test]
    fn test_listing_follows_query() {
        let catalog = Catalog::sample().unwrap();
        let mut session = ShopSession::default();
        session.set_filter(FilterSpec {
            category: Some("jersey-hijabs".to_string()),
            ..FilterSpec::default()
        });
        session.set_sort(SortKey::PriceHigh);

        let names: Vec<_> = session
            .listing(&catalog)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Premium Jersey Underscarf Set", "Active Jersey Hijab"]);
    }

    #[test]
    fn test_wishlist_toggle() {
        let mut wishlist = Wishlist::default();
        let id = ProductId::new("3");
        assert!(wishlist.toggle(&id));
        assert!(wishlist.contains(&id));
        assert!(!wishlist.toggle(&id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_subscribe() {
        let mut session = ShopSession::default();
        assert!(!session.newsletter.is_subscribed());

        session.subscribe("  amira@example.com ").unwrap();
        assert!(session.newsletter.is_subscribed());
        assert_eq!(session.newsletter.email(), Some("amira@example.com"));
    }

    #[test]
    fn test_subscribe_rejects_blank_email() {
        let mut session = ShopSession::default();
        assert_eq!(
            session.subscribe(""),
            Err(CommerceError::InvalidEmail(String::new()))
        );
        assert!(matches!(
            session.subscribe("   "),
            Err(CommerceError::InvalidEmail(_))
        ));
        assert!(session.subscribe("amira@").is_err());
        assert!(session.subscribe("example.com").is_err());
        assert!(!session.newsletter.is_subscribed());

        session.subscribe("amira@example.com").unwrap();
        assert!(session.subscribe("").is_err());
        assert_eq!(session.newsletter.email(), Some("amira@example.com"));
    }
}
