//! Cart pricing calculations.

use crate::cart::LineItem;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Default subtotal a cart must exceed to ship for free.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: f64 = 50.0;
/// Default flat shipping fee.
pub const DEFAULT_SHIPPING_FEE: f64 = 9.99;
/// Default sales tax rate.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Shipping and tax rules applied to a cart.
///
/// Amounts are decimal major units so config files read naturally
/// (`shipping_fee = 9.99`). They carry no currency of their own and are
/// converted to [`Money`] in the currency of the cart being priced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    /// Subtotal must be strictly greater than this for free shipping.
    pub free_shipping_threshold: f64,
    /// Flat fee charged when the threshold is not met.
    pub shipping_fee: f64,
    /// Tax rate as a fraction of the subtotal.
    pub tax_rate: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            shipping_fee: DEFAULT_SHIPPING_FEE,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl PricingConfig {
    /// Free shipping threshold in `currency`.
    pub fn threshold(&self, currency: Currency) -> Money {
        Money::from_decimal(self.free_shipping_threshold, currency)
    }

    /// Shipping fee in `currency`.
    pub fn fee(&self, currency: Currency) -> Money {
        Money::from_decimal(self.shipping_fee, currency)
    }

    /// Reject negative amounts and rates outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !self.free_shipping_threshold.is_finite() || self.free_shipping_threshold < 0.0 {
            return Err(CommerceError::InvalidConfig(format!(
                "free_shipping_threshold must be a non-negative amount, got {}",
                self.free_shipping_threshold
            )));
        }
        if !self.shipping_fee.is_finite() || self.shipping_fee < 0.0 {
            return Err(CommerceError::InvalidConfig(format!(
                "shipping_fee must be a non-negative amount, got {}",
                self.shipping_fee
            )));
        }
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(CommerceError::InvalidConfig(format!(
                "tax_rate must be between 0 and 1, got {}",
                self.tax_rate
            )));
        }
        Ok(())
    }
}

/// Order summary for a set of line items.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of unit price times quantity.
    pub subtotal: Money,
    /// Flat fee, or zero when the subtotal clears the threshold.
    pub shipping: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// subtotal + shipping + tax.
    pub total: Money,
}

impl CartTotals {
    /// All-zero totals.
    pub fn zero(currency: Currency) -> Self {
        Self {
            subtotal: Money::zero(currency),
            shipping: Money::zero(currency),
            tax: Money::zero(currency),
            total: Money::zero(currency),
        }
    }

    /// Check if shipping was waived for a non-empty subtotal.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero() && self.subtotal.amount_cents > 0
    }

    /// How much more the customer needs to spend for free shipping.
    ///
    /// `None` when shipping is already free or nothing is in the cart.
    /// A subtotal sitting exactly on the threshold still pays shipping, so
    /// the smallest unit of currency is reported.
    pub fn amount_to_free_shipping(&self, config: &PricingConfig) -> Option<Money> {
        if self.shipping.is_zero() {
            return None;
        }
        let remaining =
            config.threshold(self.subtotal.currency).amount_cents - self.subtotal.amount_cents;
        Some(Money::new(remaining.max(1), self.subtotal.currency))
    }
}

/// Compute subtotal, shipping, tax and total for `items`.
///
/// Totals are in the currency of the first line. Total over any input: an
/// empty slice yields all-zero totals in the default currency, and
/// overflowing amounts saturate instead of failing.
pub fn compute_totals(items: &[LineItem], config: &PricingConfig) -> CartTotals {
    let currency = items
        .first()
        .map(|item| item.unit_price.currency)
        .unwrap_or_default();
    compute_totals_in(items, currency, config)
}

/// Compute totals in `currency`.
///
/// Lines priced in any other currency are left out of the subtotal rather
/// than summed as if they were the same unit.
pub(crate) fn compute_totals_in(
    items: &[LineItem],
    currency: Currency,
    config: &PricingConfig,
) -> CartTotals {
    if items.is_empty() {
        return CartTotals::zero(currency);
    }

    let mut subtotal_cents = 0_i64;
    for item in items {
        let line_total = item.line_total();
        if line_total.currency != currency {
            tracing::warn!(
                line = %item.id,
                expected = currency.code(),
                got = line_total.currency.code(),
                "skipping line priced in another currency"
            );
            continue;
        }
        subtotal_cents = subtotal_cents.saturating_add(line_total.amount_cents);
    }
    let subtotal = Money::new(subtotal_cents, currency);

    let shipping = if subtotal.amount_cents > config.threshold(currency).amount_cents {
        Money::zero(currency)
    } else {
        config.fee(currency)
    };
    let tax = subtotal.apply_rate(config.tax_rate);
    let total = Money::new(
        subtotal
            .amount_cents
            .saturating_add(shipping.amount_cents)
            .saturating_add(tax.amount_cents),
        currency,
    );

    tracing::debug!(
        lines = items.len(),
        subtotal = subtotal.amount_cents,
        shipping = shipping.amount_cents,
        tax = tax.amount_cents,
        "computed cart totals"
    );

    CartTotals {
        subtotal,
        shipping,
        tax,
        total,
    }
}
