//! Session module — login, the active Principal, and permission-gated
//! navigation.
//!
//! # Components
//!
//! - [`catalog`] — the static route table: every navigable screen, its
//!   required permission, and the authoring-time permission categories
//! - [`Principal`] — an authenticated identity with its granted
//!   permission set and computed landing route
//! - [`SessionStore`] — holder of the current Principal, login to logout
//! - [`AuthService`] — credential submission against the remote server,
//!   Principal construction, default-route resolution
//! - [`NavigationGuard`] — allow/deny for entering a module subtree
//!
//! # Usage
//!
//! ```ignore
//! let api = Arc::new(ApiClient::new("http://localhost:8080")?);
//! let store = Arc::new(SessionStore::new());
//! let auth = AuthService::new(api.clone(), store.clone());
//!
//! let landing = auth.login("alice", "secret").await?;
//! let guard = NavigationGuard::new(store.clone());
//! assert!(guard.can_activate("vouchers"));
//! ```

pub mod auth;
pub mod catalog;
pub mod guard;
pub mod permission;
pub mod principal;
pub mod store;

pub use auth::{AuthConfig, AuthError, AuthService};
pub use guard::NavigationGuard;
pub use permission::{Permission, PermissionCategory};
pub use principal::{Identity, Principal};
pub use store::SessionStore;
