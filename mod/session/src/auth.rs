//! Credential submission, Principal construction, default-route
//! resolution.
//!
//! Login flow: POST the credentials → fetch the current identity and
//! its granted permissions with the issued token → classify the
//! permissions → resolve the landing route → install the Principal in
//! the session store. Any failure along the way leaves the store (and
//! the client's token) exactly as they were.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use ledgerctl_client::{ApiClient, ApiError};
use ledgerctl_core::ClientError;

use crate::catalog;
use crate::permission::{classify_all, Permission};
use crate::principal::{Identity, Principal};
use crate::store::SessionStore;

/// Authentication error taxonomy.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Input rejected before any network call.
    #[error("{0}")]
    Validation(String),

    /// The remote auth endpoint answered 401.
    #[error("{0}")]
    InvalidCredentials(String),

    /// Any other remote failure, kept with its status for diagnostics.
    /// Status 0 means the request never got an HTTP answer.
    #[error("{message}")]
    AccessProblem { status: u16, message: String },
}

impl From<ApiError> for AuthError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Unauthorized(m) => AuthError::InvalidCredentials(m),
            ApiError::Remote { status, message } => AuthError::AccessProblem { status, message },
            ApiError::Transport(e) => AuthError::AccessProblem { status: 0, message: e.to_string() },
            ApiError::Decode(e) => AuthError::AccessProblem { status: 0, message: e.to_string() },
        }
    }
}

impl From<AuthError> for ClientError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Validation(m) => ClientError::Validation(m),
            AuthError::InvalidCredentials(m) => ClientError::InvalidCredentials(m),
            AuthError::AccessProblem { status, message } => {
                ClientError::AccessProblem { status, message }
            }
        }
    }
}

/// Configuration for the auth service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// When false, a successful login grants every catalog-known
    /// permission instead of asking the server.
    pub enforce_permissions: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enforce_permissions: true,
        }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    user_id: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct PermissionList {
    items: Vec<String>,
}

/// The authentication service. Holds the shared API client and the
/// session store it installs principals into.
pub struct AuthService {
    api: Arc<ApiClient>,
    store: Arc<SessionStore>,
    config: AuthConfig,
    login_in_flight: AtomicBool,
}

/// Clears the in-flight flag when a submission finishes, whichever way
/// it finishes.
struct SubmissionGuard<'a>(&'a AtomicBool);

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>, store: Arc<SessionStore>) -> Self {
        Self::with_config(api, store, AuthConfig::default())
    }

    pub fn with_config(api: Arc<ApiClient>, store: Arc<SessionStore>, config: AuthConfig) -> Self {
        Self {
            api,
            store,
            config,
            login_in_flight: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Submit credentials and establish a session.
    ///
    /// Returns the resolved default route on success. A failure of any
    /// kind leaves the session store holding whatever it held before.
    pub async fn login(&self, user_id: &str, password: &str) -> Result<String, AuthError> {
        if user_id.is_empty() {
            return Err(AuthError::Validation("user id is required".into()));
        }
        if password.is_empty() {
            return Err(AuthError::Validation("password is required".into()));
        }
        let _guard = self.begin_submission()?;

        let resp: LoginResponse = self
            .api
            .post_json("/auth/login", &LoginRequest { user_id, password })
            .await?;

        let route = self.install_session(resp.access_token).await?;
        info!(user_id, %route, "login succeeded");
        Ok(route)
    }

    /// Re-establish a session from a previously issued token, without
    /// submitting credentials. A 401 here means the token expired.
    pub async fn restore(&self, token: &str) -> Result<String, AuthError> {
        if token.is_empty() {
            return Err(AuthError::Validation("session token is required".into()));
        }
        let route = self.install_session(token.to_string()).await?;
        debug!(%route, "session restored");
        Ok(route)
    }

    /// Clear the session. Returns whether a principal was actually
    /// authenticated before clearing. Never fails.
    pub fn logout(&self) -> bool {
        let was_authenticated = self.store.is_authenticated();
        self.store.clear_session();
        self.api.set_token(None);
        if was_authenticated {
            info!("logged out");
        }
        was_authenticated
    }

    /// Fetch identity + permissions with `token` and install the
    /// resulting Principal. On failure the client token is restored and
    /// the store is untouched.
    async fn install_session(&self, token: String) -> Result<String, AuthError> {
        let prior_token = self.api.token();
        self.api.set_token(Some(token.clone()));

        match self.fetch_principal(token).await {
            Ok(principal) => {
                let route = principal.default_route().to_string();
                self.store.set_principal(principal);
                Ok(route)
            }
            Err(e) => {
                self.api.set_token(prior_token);
                Err(e)
            }
        }
    }

    async fn fetch_principal(&self, token: String) -> Result<Principal, AuthError> {
        let identity: Identity = self.api.get_json("/auth/me").await?;

        let names: Vec<String> = if self.config.enforce_permissions {
            let list: PermissionList = self.api.get_json("/auth/me/permissions").await?;
            list.items
        } else {
            debug!("permission enforcement disabled, granting all known permissions");
            catalog::known_permissions().map(str::to_string).collect()
        };

        let permissions = classify_all(names);
        let route = resolve_default_route(&permissions);
        Ok(Principal::authenticated(
            token,
            identity,
            permissions,
            route.to_string(),
        ))
    }

    fn begin_submission(&self) -> Result<SubmissionGuard<'_>, AuthError> {
        if self
            .login_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AuthError::Validation("login already in progress".into()));
        }
        Ok(SubmissionGuard(&self.login_in_flight))
    }
}

/// Compute the post-login landing route for a permission set.
///
/// Deterministic and order-sensitive:
/// 1. Holding the designated default route's permission wins outright.
/// 2. Otherwise the *first* route-category permission, in the set's
///    declared order, selects; the catalog scan (declaration order)
///    resolves it to a path.
/// 3. No route permission, or no catalog entry for the selected one,
///    lands on the unauthorized route.
///
/// First-match-wins over catalog declaration order is intentional.
pub fn resolve_default_route(permissions: &[Permission]) -> &'static str {
    let default = catalog::default_route();
    if permissions.iter().any(|p| p.name() == default.permission) {
        return default.full_path;
    }

    let Some(first) = permissions.iter().find(|p| p.is_route()) else {
        return catalog::unauthorized_route().full_path;
    };

    for route in catalog::ROUTES {
        if route.permission == first.name() {
            return route.full_path;
        }
    }
    catalog::unauthorized_route().full_path
}
