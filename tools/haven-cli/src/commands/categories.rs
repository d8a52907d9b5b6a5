//! Category listing.

use anyhow::Result;
use serde::Serialize;

use super::CatalogSource;
use crate::context::Context;

#[derive(Serialize)]
struct CategoryRow<'a> {
    slug: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    path: String,
    products: usize,
}

/// Run the categories command.
pub fn run(source: CatalogSource, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(source.catalog.as_deref())?;

    let rows: Vec<CategoryRow<'_>> = catalog
        .categories
        .iter()
        .map(|c| CategoryRow {
            slug: &c.slug,
            name: &c.name,
            description: c.description.as_deref(),
            path: c.path(),
            products: catalog
                .products
                .iter()
                .filter(|p| p.category == c.slug)
                .count(),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows)?;
        return Ok(());
    }

    ctx.output.header("Categories");
    let widths = [18, 16, 22, 8];
    ctx.output
        .table_row(&["SLUG", "NAME", "PATH", "PRODUCTS"], &widths);
    for row in &rows {
        ctx.output.table_row(
            &[row.slug, row.name, &row.path, &row.products.to_string()],
            &widths,
        );
    }

    Ok(())
}
