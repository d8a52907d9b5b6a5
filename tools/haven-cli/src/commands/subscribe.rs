//! Newsletter signup.

use anyhow::{Context as _, Result};
use haven_commerce::cart::ShopSession;
use serde_json::json;

use super::SubscribeArgs;
use crate::context::Context;

/// Run the subscribe command.
pub fn run(args: SubscribeArgs, ctx: &Context) -> Result<()> {
    let mut session = ShopSession::new(ctx.config.storefront.currency);
    signup(&mut session, &args.email)?;

    let email = session.newsletter.email().unwrap_or_default();
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "subscribed": session.newsletter.is_subscribed(),
            "email": email,
        }))?;
        return Ok(());
    }

    ctx.output.success(&format!(
        "Thanks for subscribing! Updates will go to {}",
        email
    ));

    Ok(())
}

fn signup(session: &mut ShopSession, email: &str) -> Result<()> {
    session
        .subscribe(email)
        .context("Newsletter signup failed")
}
