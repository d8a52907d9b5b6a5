//! Product listing.

use anyhow::{bail, Result};
use haven_commerce::search::{
    category_facets, color_facets, CatalogQuery, FilterSpec, PriceRange,
};
use serde_json::json;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{price_label, stock_badge};

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.source.catalog.as_deref())?;
    let query = build_query(&args, ctx)?;
    let listing = query.run(&catalog.products);

    let limit = ctx.config.storefront.color_facet_limit;
    if ctx.output.is_json() {
        let mut doc = json!({
            "query": query,
            "count": listing.len(),
            "products": listing,
        });
        if args.facets {
            doc["facets"] = json!({
                "colors": color_facets(&catalog.products, &query.filter, limit),
                "categories": category_facets(&catalog.categories, &catalog.products, &query.filter),
            });
        }
        ctx.output.json(&doc)?;
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} of {} products, sorted by {}",
        listing.len(),
        catalog.len(),
        query.sort.display_name()
    ));

    if listing.is_empty() {
        ctx.output.info("No products match these filters");
    }

    let widths = [4, 32, 20, 16, 12];
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "CATEGORY", "STOCK"], &widths);
    for product in &listing {
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                &price_label(product),
                &product.category,
                &stock_badge(product.in_stock),
            ],
            &widths,
        );
    }

    if args.facets {
        ctx.output.header("Colors");
        for facet in color_facets(&catalog.products, &query.filter, limit) {
            let mark = if facet.selected { "[x]" } else { "[ ]" };
            ctx.output
                .list_item(&format!("{} {} ({})", mark, facet.label, facet.count));
        }

        ctx.output.header("Categories");
        for facet in category_facets(&catalog.categories, &catalog.products, &query.filter) {
            let mark = if facet.selected { "[x]" } else { "[ ]" };
            ctx.output
                .list_item(&format!("{} {} ({})", mark, facet.label, facet.count));
        }
    }

    Ok(())
}

/// Turn flags into a query, falling back to the configured defaults.
fn build_query(args: &ProductsArgs, ctx: &Context) -> Result<CatalogQuery> {
    let storefront = &ctx.config.storefront;
    let currency = storefront.currency;

    let min = args.min.unwrap_or(0.0);
    let max = args.max.unwrap_or(storefront.price_ceiling);
    if !min.is_finite() || !max.is_finite() {
        bail!("Price bounds must be finite numbers");
    }
    if min > max {
        ctx.output
            .warn(&format!("--min {} is above --max {}, swapping", min, max));
    }

    let mut filter = FilterSpec::cleared(storefront.price_ceiling, currency)
        .with_price_range(PriceRange::from_decimal(min, max, currency));
    if let Some(text) = &args.search {
        filter = filter.with_search(text.as_str());
    }
    if let Some(slug) = &args.category {
        filter = filter.with_category(slug.as_str());
    }
    for color in &args.colors {
        filter = filter.with_color(color.as_str());
    }
    if args.in_stock {
        filter = filter.in_stock();
    }

    Ok(CatalogQuery::new(
        filter,
        args.sort.unwrap_or(storefront.default_sort),
    ))
}
