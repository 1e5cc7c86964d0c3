use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::permission::Permission;

/// The authenticated user as the server describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    fn anonymous() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: None,
        }
    }
}

/// The authenticated identity and its authorization state for the
/// current session.
///
/// Constructed once per successful login and immutable afterwards; the
/// [`SessionStore`](crate::SessionStore) replaces the whole value on
/// every transition. The anonymous sentinel is what the store holds
/// before login and after logout.
#[derive(Debug, Clone)]
pub struct Principal {
    session_token: String,
    identity: Identity,
    permissions: Vec<Permission>,
    default_route: String,
    is_authenticated: bool,
}

impl Principal {
    /// The anonymous sentinel: no token, no permissions, lands on the
    /// unauthorized route.
    pub fn anonymous() -> Self {
        Self {
            session_token: String::new(),
            identity: Identity::anonymous(),
            permissions: Vec::new(),
            default_route: catalog::unauthorized_route().full_path.to_string(),
            is_authenticated: false,
        }
    }

    /// Build an authenticated principal. Only the auth service creates
    /// these; a Principal with `is_authenticated` true always came from
    /// a successful login.
    pub(crate) fn authenticated(
        session_token: String,
        identity: Identity,
        permissions: Vec<Permission>,
        default_route: String,
    ) -> Self {
        Self {
            session_token,
            identity,
            permissions,
            default_route,
            is_authenticated: true,
        }
    }

    /// Same principal, different session token. Used by the store's
    /// token-refresh operation; everything else stays as constructed.
    pub(crate) fn with_session_token(mut self, token: String) -> Self {
        self.session_token = token;
        self
    }

    pub fn session_token(&self) -> &str {
        &self.session_token
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Granted permissions, in the server's declared order.
    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn default_route(&self) -> &str {
        &self.default_route
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions.iter().any(|p| p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::classify_all;

    #[test]
    fn anonymous_sentinel() {
        let p = Principal::anonymous();
        assert!(!p.is_authenticated());
        assert!(p.permissions().is_empty());
        assert!(p.session_token().is_empty());
        assert_eq!(p.default_route(), "/unauthorized");
    }

    #[test]
    fn has_permission_checks_by_name() {
        let p = Principal::authenticated(
            "tok".into(),
            Identity { id: "u1".into(), name: "Alice".into(), email: None },
            classify_all(vec!["route-accounts", "voucher-post"]),
            "/accounts".into(),
        );
        assert!(p.is_authenticated());
        assert!(p.has_permission("route-accounts"));
        assert!(p.has_permission("voucher-post"));
        assert!(!p.has_permission("route-reports"));
    }
}
