use serde::{Deserialize, Serialize};

use crate::catalog;

/// What a permission token gates, assigned from the catalog's
/// authoring-time table, never inferred from the token's spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    /// Grants entry to a navigable screen.
    Route,
    /// Grants a write operation within a screen.
    Action,
    /// Granted by the server but unknown to this client.
    Other,
}

/// A permission token granted to a [`Principal`](crate::Principal).
///
/// The name is the opaque string the server declared; the category is
/// attached once at classification time so navigation code never
/// string-matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    name: String,
    category: PermissionCategory,
}

impl Permission {
    /// Classify a server-granted token against the catalog table.
    pub fn classify(name: impl Into<String>) -> Self {
        let name = name.into();
        let category = catalog::category_of(&name);
        Self { name, category }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> PermissionCategory {
        self.category
    }

    pub fn is_route(&self) -> bool {
        self.category == PermissionCategory::Route
    }
}

/// Classify a list of server-granted tokens, deduplicating while
/// preserving the server's declared order. Order matters downstream:
/// default-route resolution takes the first route permission.
pub fn classify_all<I, S>(names: I) -> Vec<Permission>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for name in names {
        let perm = Permission::classify(name);
        if seen.insert(perm.name().to_string()) {
            out.push(perm);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uses_catalog_table() {
        assert!(Permission::classify("route-accounts").is_route());
        assert_eq!(
            Permission::classify("voucher-post").category(),
            PermissionCategory::Action
        );
        assert_eq!(
            Permission::classify("mystery-flag").category(),
            PermissionCategory::Other
        );
    }

    #[test]
    fn classify_all_dedups_preserving_order() {
        let perms = classify_all(vec![
            "route-vouchers",
            "voucher-post",
            "route-vouchers",
            "route-accounts",
        ]);
        let names: Vec<&str> = perms.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["route-vouchers", "voucher-post", "route-accounts"]);
    }
}
