//! Catalog query module.
//!
//! Filtering, sorting and sidebar facets for the product listing.

mod filter;
mod query;
mod results;

pub use filter::{FilterSpec, PriceRange, DEFAULT_PRICE_CEILING};
pub use query::{filter_products, sort_products, CatalogQuery, SortKey};
pub use results::{category_facets, color_facets, FacetValue, DEFAULT_COLOR_FACET_LIMIT};
