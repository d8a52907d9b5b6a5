//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod config;
pub mod product;
pub mod products;
pub mod stats;
pub mod subscribe;

use clap::{Args, Subcommand};
use haven_commerce::search::SortKey;

/// Where to read the catalog from.
#[derive(Args)]
pub struct CatalogSource {
    /// Catalog JSON file (default: config, then the bundled sample).
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<String>,
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Case-insensitive text matched against name and description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category slug.
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum price.
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum price (default: storefront.price_ceiling).
    #[arg(long)]
    pub max: Option<f64>,

    /// Accept products offered in this color. Repeatable.
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Hide out-of-stock products.
    #[arg(long)]
    pub in_stock: bool,

    /// featured, price-low, price-high, name or newest.
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Show color and category facet counts.
    #[arg(long)]
    pub facets: bool,

    #[command(flatten)]
    pub source: CatalogSource,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,

    #[command(flatten)]
    pub source: CatalogSource,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Item to add, as ID[:QTY[:COLOR[:SIZE]]]. Repeatable.
    #[arg(short, long = "item", value_name = "SPEC")]
    pub items: Vec<String>,

    /// Change a line's quantity, as LINE=QTY. Lines are numbered from 1.
    #[arg(long = "set", value_name = "LINE=QTY")]
    pub sets: Vec<String>,

    /// Remove a line by number. Repeatable.
    #[arg(long = "remove", value_name = "LINE")]
    pub removes: Vec<usize>,

    /// Place an order for the resulting cart.
    #[arg(long)]
    pub checkout: bool,

    /// Customer name for --checkout.
    #[arg(long, requires = "checkout")]
    pub name: Option<String>,

    /// Customer email for --checkout.
    #[arg(long, requires = "checkout")]
    pub email: Option<String>,

    #[command(flatten)]
    pub source: CatalogSource,
}

/// Arguments for the subscribe command.
#[derive(Args)]
pub struct SubscribeArgs {
    /// Address to send newsletter updates to.
    #[arg(short, long)]
    pub email: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
