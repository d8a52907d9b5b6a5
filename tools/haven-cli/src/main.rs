//! Haven CLI - browse the catalog and price carts from the command line.
//!
//! Commands:
//! - `haven products` - List products with filters and sorting
//! - `haven product` - Show a single product
//! - `haven cart` - Build a cart and show its totals
//! - `haven stats` - Catalog dashboard numbers
//! - `haven categories` - List categories
//! - `haven subscribe` - Sign up for the newsletter
//! - `haven config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{CartArgs, CatalogSource, ConfigArgs, ProductArgs, ProductsArgs, SubscribeArgs};

/// Haven CLI - Hijab Haven storefront tools
#[derive(Parser)]
#[command(name = "haven")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching a filter
    Products(ProductsArgs),

    /// Show product details
    Product(ProductArgs),

    /// Build a cart and show its totals
    Cart(CartArgs),

    /// Show catalog statistics
    Stats(CatalogSource),

    /// List categories
    Categories(CatalogSource),

    /// Sign up for the newsletter
    Subscribe(SubscribeArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Stats(source) => commands::stats::run(source, &ctx),
        Commands::Categories(source) => commands::categories::run(source, &ctx),
        Commands::Subscribe(args) => commands::subscribe::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "haven=debug" } else { "haven=info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
