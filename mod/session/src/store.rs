use std::sync::RwLock;

use tracing::debug;

use crate::principal::Principal;

/// Holder of the current [`Principal`].
///
/// Exactly one principal is active at a time; transitions replace the
/// whole value. Constructed explicitly and shared behind an `Arc`;
/// there is no global instance.
pub struct SessionStore {
    current: RwLock<Principal>,
}

impl SessionStore {
    /// A store holding the anonymous sentinel.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Principal::anonymous()),
        }
    }

    /// Install a new principal, replacing the current one.
    pub fn set_principal(&self, principal: Principal) {
        *self.current.write().unwrap() = principal;
    }

    /// Snapshot of the current principal.
    pub fn principal(&self) -> Principal {
        self.current.read().unwrap().clone()
    }

    /// Replace the session token on the current principal, leaving the
    /// rest of it untouched.
    pub fn set_session_token(&self, token: &str) {
        let mut current = self.current.write().unwrap();
        *current = current.clone().with_session_token(token.to_string());
    }

    /// Reset to the anonymous sentinel. Idempotent.
    pub fn clear_session(&self) {
        debug!("session cleared");
        *self.current.write().unwrap() = Principal::anonymous();
    }

    /// Whether the current principal came from a successful login.
    pub fn is_authenticated(&self) -> bool {
        self.current.read().unwrap().is_authenticated()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
