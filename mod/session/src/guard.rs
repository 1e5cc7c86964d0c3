use std::sync::Arc;

use tracing::debug;

use crate::catalog;
use crate::store::SessionStore;

/// Decides whether the current principal may enter a route subtree.
///
/// The check is per module root: entering any screen of a module
/// requires the permission of the module's top-level route, not the
/// leaf's. What denial means (redirect, error screen) is the caller's
/// business.
pub struct NavigationGuard {
    store: Arc<SessionStore>,
}

impl NavigationGuard {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Whether navigation to `target` (route name or full path) is
    /// allowed. Unknown targets are denied.
    pub fn can_activate(&self, target: &str) -> bool {
        let Some(route) = catalog::find(target).or_else(|| catalog::find_by_path(target)) else {
            debug!(target, "denied: unknown route");
            return false;
        };

        let root = catalog::module_root(route);
        if root.permission.is_empty() {
            // Public subtree (the unauthorized screen itself).
            return true;
        }

        let principal = self.store.principal();
        if !principal.is_authenticated() {
            debug!(target, "denied: not authenticated");
            return false;
        }

        let allowed = principal.has_permission(root.permission);
        if !allowed {
            debug!(target, permission = root.permission, "denied: missing module permission");
        }
        allowed
    }
}
