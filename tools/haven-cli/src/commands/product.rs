//! Product detail page.

use anyhow::{Context as _, Result};
use haven_commerce::ids::ProductId;
use serde_json::json;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{format_date, price_label, stock_badge};

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.source.catalog.as_deref())?;
    let product = catalog
        .product(&ProductId::new(args.id.as_str()))
        .with_context(|| format!("No product with id '{}'", args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "sku": product.sku(),
            "discount_percentage": product.discount_percentage(),
        }))?;
        return Ok(());
    }

    ctx.output.header(&product.name);
    if !product.description.is_empty() {
        ctx.output.info(&product.description);
    }

    ctx.output.kv("SKU", &product.sku());
    ctx.output.kv("Price", &price_label(product));
    if let Some(pct) = product.discount_percentage() {
        ctx.output.kv("Discount", &format!("{}% off", pct));
    }

    // A dangling category slug is shown as-is.
    let category = catalog
        .category(&product.category)
        .map(|c| c.name.clone())
        .unwrap_or_else(|_| product.category.clone());
    ctx.output.kv("Category", &category);
    ctx.output.kv("Availability", &stock_badge(product.in_stock));
    if product.featured {
        ctx.output.kv("Featured", "yes");
    }
    if !product.colors.is_empty() {
        ctx.output.kv("Colors", &product.colors.join(", "));
    }
    if !product.sizes.is_empty() {
        ctx.output.kv("Sizes", &product.sizes.join(", "));
    }
    if !product.tags.is_empty() {
        ctx.output.kv("Tags", &product.tags.join(", "));
    }
    if let Some(image) = product.primary_image() {
        ctx.output.kv("Image", image);
    }
    ctx.output.kv("Added", &format_date(product.created_at));
    ctx.output.kv("Updated", &format_date(product.updated_at));

    Ok(())
}
