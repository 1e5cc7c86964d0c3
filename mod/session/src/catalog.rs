//! The route/permission catalog.
//!
//! Static data, declared once, never mutated. Two tables:
//!
//! - [`ROUTES`] — every navigable screen with its required permission,
//!   parent route, and full path. Declaration order matters: default-route
//!   resolution scans it top to bottom (first match wins).
//! - [`PERMISSIONS`] — every permission the client knows, with its
//!   category assigned here at authoring time. Navigation code asks for
//!   a token's category instead of pattern-matching its name.

use crate::permission::PermissionCategory;

/// One navigable route and the permission that gates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Symbolic name, used as the navigation target.
    pub name: &'static str,

    /// Required permission. Empty = public route.
    pub permission: &'static str,

    /// Name of the parent route. Empty = module root.
    pub parent: &'static str,

    /// Path segment under the parent.
    pub path: &'static str,

    /// Absolute path of this route.
    pub full_path: &'static str,
}

/// Every navigable route, in scan order.
///
/// Invariant: a descriptor with a non-empty `parent` always declares a
/// permission (checked by [`validate`], exercised in tests).
pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        name: "dashboard",
        permission: "route-dashboard",
        parent: "",
        path: "/dashboard",
        full_path: "/dashboard",
    },
    RouteDescriptor {
        name: "accounts",
        permission: "route-accounts",
        parent: "",
        path: "/accounts",
        full_path: "/accounts",
    },
    RouteDescriptor {
        name: "vouchers",
        permission: "route-vouchers",
        parent: "",
        path: "/vouchers",
        full_path: "/vouchers",
    },
    RouteDescriptor {
        name: "voucher-entry",
        permission: "route-voucher-entry",
        parent: "vouchers",
        path: "/new",
        full_path: "/vouchers/new",
    },
    RouteDescriptor {
        name: "balances",
        permission: "route-balances",
        parent: "",
        path: "/balances",
        full_path: "/balances",
    },
    RouteDescriptor {
        name: "trial-balance",
        permission: "route-trial-balance",
        parent: "balances",
        path: "/trial",
        full_path: "/balances/trial",
    },
    RouteDescriptor {
        name: "balance-runs",
        permission: "route-balance-runs",
        parent: "balances",
        path: "/runs",
        full_path: "/balances/runs",
    },
    RouteDescriptor {
        name: "reports",
        permission: "route-reports",
        parent: "",
        path: "/reports",
        full_path: "/reports",
    },
    RouteDescriptor {
        name: "report-viewer",
        permission: "route-report-viewer",
        parent: "reports",
        path: "/view",
        full_path: "/reports/view",
    },
    RouteDescriptor {
        name: "settings",
        permission: "route-settings",
        parent: "",
        path: "/settings",
        full_path: "/settings",
    },
    RouteDescriptor {
        name: "grouping-rules",
        permission: "route-grouping-rules",
        parent: "settings",
        path: "/grouping-rules",
        full_path: "/settings/grouping-rules",
    },
    RouteDescriptor {
        name: "exchange-rates",
        permission: "route-exchange-rates",
        parent: "settings",
        path: "/exchange-rates",
        full_path: "/settings/exchange-rates",
    },
    RouteDescriptor {
        name: "unauthorized",
        permission: "",
        parent: "",
        path: "/unauthorized",
        full_path: "/unauthorized",
    },
];

/// Authoring-time permission categories.
///
/// Route permissions gate navigation; action permissions gate writes
/// within a screen. A token absent from this table is `Other`; servers
/// may grant capabilities this client predates, and those never take
/// part in navigation.
pub const PERMISSIONS: &[(&str, PermissionCategory)] = &[
    ("route-dashboard", PermissionCategory::Route),
    ("route-accounts", PermissionCategory::Route),
    ("route-vouchers", PermissionCategory::Route),
    ("route-voucher-entry", PermissionCategory::Route),
    ("route-balances", PermissionCategory::Route),
    ("route-trial-balance", PermissionCategory::Route),
    ("route-balance-runs", PermissionCategory::Route),
    ("route-reports", PermissionCategory::Route),
    ("route-report-viewer", PermissionCategory::Route),
    ("route-settings", PermissionCategory::Route),
    ("route-grouping-rules", PermissionCategory::Route),
    ("route-exchange-rates", PermissionCategory::Route),
    // Still granted by servers predating the archive screen's removal;
    // no ROUTES entry, so it never resolves to a path.
    ("route-archive", PermissionCategory::Route),
    ("voucher-post", PermissionCategory::Action),
    ("balance-generate", PermissionCategory::Action),
    ("rate-edit", PermissionCategory::Action),
];

/// Name of the designated post-login landing route.
pub const DEFAULT_ROUTE_NAME: &str = "dashboard";

/// Name of the route users land on when nothing is accessible.
pub const UNAUTHORIZED_ROUTE_NAME: &str = "unauthorized";

/// The designated default route.
pub fn default_route() -> &'static RouteDescriptor {
    find(DEFAULT_ROUTE_NAME).expect("default route is declared in ROUTES")
}

/// The unauthorized route.
pub fn unauthorized_route() -> &'static RouteDescriptor {
    find(UNAUTHORIZED_ROUTE_NAME).expect("unauthorized route is declared in ROUTES")
}

/// Look up a route by symbolic name.
pub fn find(name: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|r| r.name == name)
}

/// Look up a route by its full path.
pub fn find_by_path(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|r| r.full_path == path)
}

/// Walk the parent chain up to the route's module root.
pub fn module_root(route: &'static RouteDescriptor) -> &'static RouteDescriptor {
    let mut current = route;
    while !current.parent.is_empty() {
        match find(current.parent) {
            Some(parent) => current = parent,
            None => break,
        }
    }
    current
}

/// Category of a permission token, per the authoring-time table.
pub fn category_of(permission: &str) -> PermissionCategory {
    PERMISSIONS
        .iter()
        .find(|(name, _)| *name == permission)
        .map(|(_, cat)| *cat)
        .unwrap_or(PermissionCategory::Other)
}

/// Every known permission name, in table order. Used when permission
/// enforcement is disabled and a Principal is granted everything.
pub fn known_permissions() -> impl Iterator<Item = &'static str> {
    PERMISSIONS.iter().map(|(name, _)| *name)
}

/// Check the catalog's structural invariants. Returns the first
/// violation found. The tables are compile-time data, so this runs in
/// tests rather than at startup.
pub fn validate() -> Result<(), String> {
    for route in ROUTES {
        if !route.parent.is_empty() {
            if route.permission.is_empty() {
                return Err(format!("route '{}' has a parent but no permission", route.name));
            }
            let parent = find(route.parent)
                .ok_or_else(|| format!("route '{}' has unknown parent '{}'", route.name, route.parent))?;
            let expected = format!("{}{}", parent.full_path, route.path);
            if route.full_path != expected {
                return Err(format!(
                    "route '{}' full path '{}' does not match parent + path '{}'",
                    route.name, route.full_path, expected
                ));
            }
        } else if route.full_path != route.path {
            return Err(format!(
                "root route '{}' full path '{}' differs from path '{}'",
                route.name, route.full_path, route.path
            ));
        }
        if !route.permission.is_empty()
            && category_of(route.permission) != PermissionCategory::Route
        {
            return Err(format!(
                "route '{}' permission '{}' is not categorized as Route",
                route.name, route.permission
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_invariants_hold() {
        validate().unwrap();
    }

    #[test]
    fn route_names_are_unique() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate route name");
                assert_ne!(a.full_path, b.full_path, "duplicate full path");
            }
        }
    }

    #[test]
    fn designated_routes_exist() {
        assert_eq!(default_route().full_path, "/dashboard");
        assert_eq!(unauthorized_route().full_path, "/unauthorized");
        assert!(unauthorized_route().permission.is_empty());
    }

    #[test]
    fn module_root_walks_to_top() {
        let leaf = find("trial-balance").unwrap();
        assert_eq!(module_root(leaf).name, "balances");

        let nested = find("grouping-rules").unwrap();
        assert_eq!(module_root(nested).name, "settings");

        let root = find("accounts").unwrap();
        assert_eq!(module_root(root).name, "accounts");
    }

    #[test]
    fn categories_come_from_the_table() {
        assert_eq!(category_of("route-vouchers"), PermissionCategory::Route);
        assert_eq!(category_of("voucher-post"), PermissionCategory::Action);
        assert_eq!(category_of("something-new"), PermissionCategory::Other);
    }

    #[test]
    fn known_permissions_preserve_table_order() {
        let names: Vec<&str> = known_permissions().collect();
        assert_eq!(names[0], "route-dashboard");
        assert!(names.contains(&"rate-edit"));
        assert_eq!(names.len(), PERMISSIONS.len());
    }
}
