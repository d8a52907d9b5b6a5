//! Cart builder and order summary.

use anyhow::{anyhow, bail, Context as _, Result};
use haven_commerce::cart::{CartOperation, ShopSession};
use haven_commerce::catalog::{Catalog, Product, VariantSelection};
use haven_commerce::checkout::{CustomerInfo, Order};
use haven_commerce::ids::{LineItemId, ProductId};
use serde_json::json;

use super::CartArgs;
use crate::context::Context;

/// One `--item` argument.
#[derive(Debug, PartialEq)]
struct ItemSpec {
    product_id: String,
    quantity: i64,
    color: Option<String>,
    size: Option<String>,
}

impl ItemSpec {
    /// Parse `ID[:QTY[:COLOR[:SIZE]]]`. Empty fields take their defaults.
    fn parse(spec: &str) -> Result<Self> {
        let mut parts = spec.splitn(4, ':');
        let product_id = parts.next().unwrap_or_default().trim();
        if product_id.is_empty() {
            bail!("Item '{}' has no product id", spec);
        }

        let quantity = match parts.next().map(str::trim) {
            None | Some("") => 1,
            Some(q) => q
                .parse::<i64>()
                .with_context(|| format!("Item '{}' has a bad quantity '{}'", spec, q))?,
        };
        let mut field = || {
            parts
                .next()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let color = field();
        let size = field();

        Ok(Self {
            product_id: product_id.to_string(),
            quantity,
            color,
            size,
        })
    }

    /// Fill unspecified axes from the product's preselected variant.
    fn selection_for(&self, product: &Product) -> VariantSelection {
        let default = product.default_selection();
        VariantSelection::new(
            self.color.clone().unwrap_or(default.color),
            self.size.clone().unwrap_or(default.size),
        )
    }
}

/// Parse `LINE=QTY`.
fn parse_set(spec: &str) -> Result<(usize, i64)> {
    let (line, quantity) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected LINE=QTY, got '{}'", spec))?;
    let line = line
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Bad line number in '{}'", spec))?;
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .with_context(|| format!("Bad quantity in '{}'", spec))?;
    Ok((line, quantity))
}

/// Map a 1-based line number to the line's id.
fn line_id(session: &ShopSession, line: usize) -> Result<LineItemId> {
    line.checked_sub(1)
        .and_then(|i| session.cart.items.get(i))
        .map(|item| item.id.clone())
        .ok_or_else(|| {
            anyhow!(
                "Cart has no line {} (it has {})",
                line,
                session.cart.line_count()
            )
        })
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.source.catalog.as_deref())?;
    let session = build_session(&args, &catalog, ctx)?;

    let pricing = &ctx.config.pricing;
    let totals = session.totals(pricing);

    let order = if args.checkout {
        let customer = customer_from(&args);
        let order = Order::from_cart(&session.cart, customer, pricing).context("Checkout failed")?;
        tracing::info!(order = %order.id, status = order.status.as_str(), "order placed");
        Some(order)
    } else {
        None
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "cart": session.cart,
            "item_count": session.cart.item_count(),
            "totals": totals,
            "amount_to_free_shipping": totals.amount_to_free_shipping(pricing),
            "order": order,
        }))?;
        return Ok(());
    }

    ctx.output.header("Cart");
    if session.cart.is_empty() {
        ctx.output.info("Your cart is empty");
    } else {
        let widths = [3, 32, 24, 5, 10, 10];
        ctx.output
            .table_row(&["#", "PRODUCT", "VARIANT", "QTY", "PRICE", "TOTAL"], &widths);
        for (i, item) in session.cart.items.iter().enumerate() {
            ctx.output.table_row(
                &[
                    &(i + 1).to_string(),
                    &item.product_name,
                    &item.selection().label(),
                    &item.quantity.to_string(),
                    &item.unit_price.to_string(),
                    &item.line_total().to_string(),
                ],
                &widths,
            );
        }
    }

    ctx.output.header("Order summary");
    ctx.output.kv("Items", &session.cart.item_count().to_string());
    ctx.output.kv("Subtotal", &totals.subtotal.to_string());
    let shipping = if totals.has_free_shipping() {
        "FREE".to_string()
    } else {
        totals.shipping.to_string()
    };
    ctx.output.kv("Shipping", &shipping);
    ctx.output.kv("Tax", &totals.tax.to_string());
    ctx.output.kv("Total", &totals.total.to_string());

    if let Some(remaining) = totals.amount_to_free_shipping(pricing) {
        ctx.output
            .info(&format!("Add {} more for free shipping", remaining));
    }

    if let Some(order) = order {
        ctx.output.success(&format!(
            "Order {} placed ({}), {} item(s)",
            order.id,
            order.status.display_name(),
            order.item_count()
        ));
        let name = order.customer.full_name();
        if !name.is_empty() {
            ctx.output.kv("Customer", &name);
        }
    }

    Ok(())
}

/// Apply `--item`, then `--set`, then `--remove` to a fresh session.
///
/// Line numbers in `--set` and `--remove` refer to the cart as it stands
/// after all items were added.
fn build_session(args: &CartArgs, catalog: &Catalog, ctx: &Context) -> Result<ShopSession> {
    let mut session = ShopSession::new(ctx.config.storefront.currency);

    for raw in &args.items {
        let spec = ItemSpec::parse(raw)?;
        let product = catalog
            .product(&ProductId::new(spec.product_id.as_str()))
            .with_context(|| format!("Cannot add '{}'", raw))?;
        session
            .add_to_cart(product, spec.selection_for(product), spec.quantity)
            .with_context(|| format!("Cannot add '{}'", raw))?;
    }

    let mut operations = Vec::new();
    for raw in &args.sets {
        let (line, quantity) = parse_set(raw)?;
        operations.push(CartOperation::SetQuantity {
            line_item_id: line_id(&session, line)?,
            quantity,
        });
    }
    for &line in &args.removes {
        operations.push(CartOperation::Remove {
            line_item_id: line_id(&session, line)?,
        });
    }
    for operation in &operations {
        session.apply(operation);
    }

    tracing::debug!(
        lines = session.cart.line_count(),
        operations = operations.len(),
        "cart built"
    );
    Ok(session)
}

fn customer_from(args: &CartArgs) -> CustomerInfo {
    let (first_name, last_name) = match args.name.as_deref().map(str::trim) {
        Some(name) => match name.split_once(' ') {
            Some((first, last)) => (first.to_string(), last.trim().to_string()),
            None => (name.to_string(), String::new()),
        },
        None => (String::new(), String::new()),
    };
    CustomerInfo {
        first_name,
        last_name,
        email: args.email.clone().unwrap_or_default(),
        ..CustomerInfo::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_spec() {
        assert_eq!(
            ItemSpec::parse("2").unwrap(),
            ItemSpec {
                product_id: "2".to_string(),
                quantity: 1,
                color: None,
                size: None,
            }
        );
        assert_eq!(
            ItemSpec::parse("1:3:Navy Blue").unwrap(),
            ItemSpec {
                product_id: "1".to_string(),
                quantity: 3,
                color: Some("Navy Blue".to_string()),
                size: None,
            }
        );
        let spec = ItemSpec::parse("4::Black:Large").unwrap();
        assert_eq!(spec.quantity, 1);
        assert_eq!(spec.size.as_deref(), Some("Large"));
    }

    #[test]
    fn test_parse_item_spec_errors() {
        assert!(ItemSpec::parse("").is_err());
        assert!(ItemSpec::parse(":2").is_err());
        assert!(ItemSpec::parse("1:two").is_err());
    }

    #[test]
    fn test_selection_fills_defaults() {
        let catalog = Catalog::sample().unwrap();
        let wrap = catalog.product(&ProductId::new("2")).unwrap();

        let spec = ItemSpec::parse("2:1::Large").unwrap();
        assert_eq!(
            spec.selection_for(wrap),
            VariantSelection::new("White", "Large")
        );
    }

    #[test]
    fn test_parse_set() {
        assert_eq!(parse_set("2=5").unwrap(), (2, 5));
        assert_eq!(parse_set("1 = 0").unwrap(), (1, 0));
        assert!(parse_set("2").is_err());
        assert!(parse_set("x=1").is_err());
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let catalog = Catalog::sample().unwrap();
        let scarf = catalog.product(&ProductId::new("1")).unwrap();
        let mut session = ShopSession::default();
        session
            .add_to_cart(scarf, scarf.default_selection(), 1)
            .unwrap();

        assert_eq!(line_id(&session, 1).unwrap(), session.cart.items[0].id);
        assert!(line_id(&session, 0).is_err());
        assert!(line_id(&session, 2).is_err());
    }
}
