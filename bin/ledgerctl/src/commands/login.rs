//! Login / logout / whoami commands.

use std::path::Path;

use anyhow::Result;

use ledgerctl_core::ClientError;

use crate::commands::{connect, restore_session, session};
use crate::config::ClientConfig;
use crate::output;

/// Login to the current context's server and save the session token.
pub async fn login(user: &str, password: &str, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    let (api, ctx) = connect(&config)?;
    // A fresh login never rides on a stale token.
    api.set_token(None);
    let (store, auth) = session(api, &config);

    let route = match auth.login(user, password).await {
        Ok(route) => route,
        Err(e) => {
            let e = ClientError::from(e);
            anyhow::bail!("Login failed ({}): {}", e.error_code(), e);
        }
    };

    let principal = store.principal();

    // Save token to context.
    let ctx_mut = config
        .get_mut(&ctx.name)
        .ok_or_else(|| anyhow::anyhow!("Context disappeared"))?;
    ctx_mut.token = principal.session_token().to_string();
    config.save(config_path)?;

    println!("Logged in as {}.", principal.identity().name);
    println!("Landing route: {}", route);
    Ok(())
}

/// Logout — clear token from current context.
pub fn logout(config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    let current_name = config.current_context.clone();
    if current_name.is_empty() {
        anyhow::bail!("No current context.");
    }

    let ctx = config
        .get_mut(&current_name)
        .ok_or_else(|| anyhow::anyhow!("Current context not found."))?;

    if ctx.token.is_empty() {
        println!("Already logged out of context \"{}\".", current_name);
        return Ok(());
    }

    ctx.token = String::new();
    config.save(config_path)?;
    println!("Logged out from context \"{}\".", current_name);
    Ok(())
}

/// Show the current principal: identity, permissions, landing route.
pub async fn whoami(json_output: bool, config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;
    let (api, ctx) = connect(&config)?;
    let (store, auth) = session(api, &config);
    restore_session(&auth, &ctx).await?;

    let principal = store.principal();

    if json_output {
        let permissions: Vec<&ledgerctl_session::Permission> =
            principal.permissions().iter().collect();
        output::print_json(&serde_json::json!({
            "identity": principal.identity(),
            "permissions": permissions,
            "default_route": principal.default_route(),
        }))?;
        return Ok(());
    }

    let identity = principal.identity();
    println!("User:          {} ({})", identity.name, identity.id);
    if let Some(email) = &identity.email {
        println!("Email:         {}", email);
    }
    println!("Landing route: {}", principal.default_route());
    println!("Permissions:");
    for perm in principal.permissions() {
        println!("  {:<28} {:?}", perm.name(), perm.category());
    }
    Ok(())
}
