//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, HavenConfig, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config)?;
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let pricing = &ctx.config.pricing;
    ctx.output.info("[pricing]");
    let storefront = &ctx.config.storefront;
    ctx.output.kv(
        "free_shipping_threshold",
        &pricing.threshold(storefront.currency).to_string(),
    );
    ctx.output
        .kv("shipping_fee", &pricing.fee(storefront.currency).to_string());
    ctx.output
        .kv("tax_rate", &format!("{}%", pricing.tax_rate * 100.0));

    ctx.output.info("[storefront]");
    ctx.output.kv("currency", storefront.currency.code());
    ctx.output.kv("default_sort", storefront.default_sort.as_str());
    ctx.output.kv(
        "color_facet_limit",
        &storefront.color_facet_limit.to_string(),
    );
    ctx.output
        .kv("price_ceiling", &storefront.price_ceiling.to_string());
    ctx.output.kv(
        "catalog",
        storefront.catalog.as_deref().unwrap_or("(bundled sample)"),
    );

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let Some(config_path) = find_config_file(ctx) else {
        bail!("No config file found. Run `haven config init` to create one.");
    };
    let path = config_path.to_string_lossy().to_string();

    let mut config = HavenConfig::load(&path)?;
    set_config_value(&mut config, key, value)?;

    let errors = config.errors();
    if let Some(first) = errors.first() {
        bail!("Refusing to write invalid config: {}", first);
    }

    config.save(&path)?;
    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        let overwrite = console::user_attended()
            && Confirm::new()
                .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
                .default(false)
                .interact()?;
        if !overwrite {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = ctx.config.errors();
    let mut warnings = ctx.config.warnings();

    if let Some(catalog) = &ctx.config.storefront.catalog {
        if !ctx.resolve_path(catalog).exists() {
            warnings.push(format!("storefront.catalog '{}' does not exist", catalog));
        }
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn set_config_value(config: &mut HavenConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["pricing", "free_shipping_threshold"] => {
            config.pricing.free_shipping_threshold = value.parse()?
        }
        ["pricing", "shipping_fee"] => config.pricing.shipping_fee = value.parse()?,
        ["pricing", "tax_rate"] => config.pricing.tax_rate = value.parse()?,
        ["storefront", "default_sort"] => config.storefront.default_sort = value.parse()?,
        ["storefront", "color_facet_limit"] => {
            config.storefront.color_facet_limit = value.parse()?
        }
        ["storefront", "price_ceiling"] => config.storefront.price_ceiling = value.parse()?,
        ["storefront", "currency"] => match haven_commerce::Currency::from_code(value) {
            Some(currency) => config.storefront.currency = currency,
            None => bail!("Unknown currency: {}", value),
        },
        ["storefront", "catalog"] => config.storefront.catalog = Some(value.to_string()),
        _ => bail!("Unknown config key: {}", key),
    }

    Ok(())
}

/// The file `set` writes to: the one in use, else one in the working directory.
fn find_config_file(ctx: &Context) -> Option<PathBuf> {
    ctx.config_path.clone().or_else(|| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| ctx.cwd.join(name))
            .find(|path| path.exists())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_commerce::search::SortKey;

    #[test]
    fn test_set_config_value() {
        let mut config = HavenConfig::default();
        set_config_value(&mut config, "pricing.tax_rate", "0.0725").unwrap();
        set_config_value(&mut config, "storefront.currency", "CAD").unwrap();
        set_config_value(&mut config, "storefront.default_sort", "newest").unwrap();

        assert_eq!(config.pricing.tax_rate, 0.0725);
        assert_eq!(config.storefront.currency, haven_commerce::Currency::CAD);
        assert_eq!(config.storefront.default_sort, SortKey::Newest);
    }

    #[test]
    fn test_set_config_value_rejects_bad_input() {
        let mut config = HavenConfig::default();
        assert!(set_config_value(&mut config, "pricing.tax_rate", "high").is_err());
        assert!(set_config_value(&mut config, "storefront.currency", "XYZ").is_err());
        assert!(set_config_value(&mut config, "pricing.currency", "EUR").is_err());
        assert!(set_config_value(&mut config, "storefront.default_sort", "cheapest").is_err());
        assert!(set_config_value(&mut config, "build.target", "x").is_err());
        assert_eq!(config, HavenConfig::default());
    }
}
