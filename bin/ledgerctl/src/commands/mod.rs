pub mod context;
pub mod login;
pub mod navigate;
pub mod resource;

use std::sync::Arc;

use anyhow::Result;

use ledgerctl_client::ApiClient;
use ledgerctl_session::{AuthConfig, AuthService, SessionStore};

use crate::config::{ClientConfig, Context};

/// Turn a library error into the uniform CLI failure line.
pub(crate) fn fail(e: impl Into<ledgerctl_core::ClientError>) -> anyhow::Error {
    let e = e.into();
    anyhow::anyhow!("Error ({}): {}", e.error_code(), e)
}

/// Resolve the current context and build an API client for it,
/// carrying the saved token if one exists.
pub(crate) fn connect(config: &ClientConfig) -> Result<(Arc<ApiClient>, Context)> {
    let ctx = config
        .current()
        .ok_or_else(|| anyhow::anyhow!("No current context. Run `ledgerctl use context <name>`."))?
        .clone();

    if ctx.server.is_empty() {
        anyhow::bail!(
            "No server URL set for context \"{}\". Run `ledgerctl context set {} --server <url>`.",
            ctx.name,
            ctx.name
        );
    }

    let api = if ctx.token.is_empty() {
        ApiClient::new(&ctx.server)?
    } else {
        ApiClient::with_token(&ctx.server, &ctx.token)?
    };
    Ok((Arc::new(api), ctx))
}

/// Build the session pieces around an API client.
pub(crate) fn session(
    api: Arc<ApiClient>,
    config: &ClientConfig,
) -> (Arc<SessionStore>, AuthService) {
    let store = Arc::new(SessionStore::new());
    let auth = AuthService::with_config(
        api,
        store.clone(),
        AuthConfig {
            enforce_permissions: config.enforce_permissions,
        },
    );
    (store, auth)
}

/// Re-establish the session from the context's saved token. Errors out
/// with a login hint when there is no token or it no longer works.
pub(crate) async fn restore_session(
    auth: &AuthService,
    ctx: &Context,
) -> Result<()> {
    if ctx.token.is_empty() {
        anyhow::bail!("Not logged in. Run `ledgerctl login`.");
    }
    auth.restore(&ctx.token).await.map_err(|e| {
        let e = ledgerctl_core::ClientError::from(e);
        anyhow::anyhow!(
            "Session for \"{}\" is invalid ({}): {}. Run `ledgerctl login`.",
            ctx.name,
            e.error_code(),
            e
        )
    })?;
    Ok(())
}
