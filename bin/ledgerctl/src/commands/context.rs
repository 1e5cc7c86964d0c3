//! Context management commands.

use std::path::Path;

use anyhow::Result;

use crate::config::{ClientConfig, Context};

/// Create a new context, optionally with a server URL.
pub fn create(name: &str, server: Option<&str>, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    if config.get_mut(name).is_some() {
        anyhow::bail!("Context \"{}\" already exists.", name);
    }

    config.upsert_context(Context {
        name: name.to_string(),
        server: server.unwrap_or_default().to_string(),
        token: String::new(),
    });
    if config.current_context.is_empty() {
        config.current_context = name.to_string();
    }
    config.save(config_path)?;

    println!("Context \"{}\" created.", name);
    if server.is_none() {
        println!("Set a server with `ledgerctl context set {} --server <url>`.", name);
    }
    Ok(())
}

/// List all contexts, marking the current one.
pub fn list(config_path: &Path) -> Result<()> {
    let config = ClientConfig::load(config_path)?;

    if config.contexts.is_empty() {
        println!("No contexts. Run `ledgerctl context create <name>`.");
        return Ok(());
    }

    for ctx in &config.contexts {
        let marker = if ctx.name == config.current_context { "*" } else { " " };
        let server = if ctx.server.is_empty() { "-" } else { &ctx.server };
        let auth = if ctx.token.is_empty() { "" } else { " (logged in)" };
        println!("{} {:<20} {}{}", marker, ctx.name, server, auth);
    }
    Ok(())
}

/// Set properties on an existing context.
pub fn set(name: &str, server: Option<&str>, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    let ctx = config
        .get_mut(name)
        .ok_or_else(|| anyhow::anyhow!("Context \"{}\" not found.", name))?;

    if let Some(server) = server {
        ctx.server = server.trim_end_matches('/').to_string();
        // A different server invalidates the old token.
        ctx.token = String::new();
    }
    config.save(config_path)?;

    println!("Context \"{}\" updated.", name);
    Ok(())
}

/// Delete a context.
pub fn delete(name: &str, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    if !config.remove_context(name) {
        anyhow::bail!("Context \"{}\" not found.", name);
    }
    config.save(config_path)?;

    println!("Context \"{}\" deleted.", name);
    Ok(())
}

/// Switch the current context.
pub fn use_context(name: &str, config_path: &Path) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;

    if config.contexts.iter().all(|c| c.name != name) {
        anyhow::bail!("Context \"{}\" not found.", name);
    }
    config.current_context = name.to_string();
    config.save(config_path)?;

    println!("Switched to context \"{}\".", name);
    Ok(())
}
