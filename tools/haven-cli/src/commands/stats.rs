//! Admin dashboard numbers.

use anyhow::Result;

use super::CatalogSource;
use crate::context::Context;

/// Run the stats command.
pub fn run(source: CatalogSource, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(source.catalog.as_deref())?;
    let stats = catalog.stats();

    if ctx.output.is_json() {
        ctx.output.json(&stats)?;
        return Ok(());
    }

    ctx.output.header("Catalog");
    ctx.output.kv("Products", &stats.total_products.to_string());
    ctx.output.kv("In stock", &stats.in_stock.to_string());
    ctx.output.kv("Out of stock", &stats.out_of_stock.to_string());
    ctx.output.kv("Featured", &stats.featured.to_string());
    ctx.output.kv("On sale", &stats.on_sale.to_string());
    ctx.output.kv("Categories", &stats.categories.to_string());

    ctx.output.header("Products per category");
    for count in &stats.per_category {
        ctx.output.kv(&count.name, &count.products.to_string());
    }

    Ok(())
}
