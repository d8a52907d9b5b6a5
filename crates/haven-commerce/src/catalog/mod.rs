//! Product catalog module.
//!
//! Contains products, categories and the loaded catalog.

#[allow(clippy::module_inception)]
mod catalog;
mod category;
mod product;

pub use catalog::{Catalog, CatalogStats, CategoryCount};
pub(crate) use catalog::distinct_colors;
pub use category::Category;
pub use product::{Product, VariantSelection};
