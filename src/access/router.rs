//! Role router
//!
//! Pure decision functions over `(role, status)`: which dashboard a
//! principal lands on, and whether a principal's role clears a required
//! role. No side effects; callers own redirects and error responses.

use crate::access::role::{AccountStatus, EmploymentRole, FederationRole, Role};
use crate::constants::dashboard_routes;
use crate::error::{AppError, AppResult};

/// Resolve the dashboard landing path for a typed `(role, status)` pair.
///
/// Pending accounts land on their role's pending page; any other status
/// passes through to the role's home route. Total over both enums.
pub fn dashboard_route(role: Role, status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Pending => pending_route(role),
        AccountStatus::Active | AccountStatus::Suspended | AccountStatus::Rejected => {
            home_route(role)
        }
    }
}

/// Resolve a dashboard path from raw wire strings.
///
/// Used where role/status values have not crossed the typed boundary yet,
/// e.g. claims minted by an earlier deployment. A role outside the closed
/// set falls back to the generic default dashboard; an unknown status is
/// treated as non-pending.
pub fn resolve_dashboard_route(role: &str, status: &str) -> &'static str {
    let Ok(role) = role.parse::<Role>() else {
        return dashboard_routes::DEFAULT;
    };
    match status.parse::<AccountStatus>() {
        Ok(status) => dashboard_route(role, status),
        Err(_) => home_route(role),
    }
}

/// Flat role equality check. No hierarchy, no inheritance.
pub fn authorize_role(current: Role, required: Role) -> bool {
    current == required
}

/// Gate a handler on a required role.
///
/// `current` is the principal's raw role claim; a value outside the closed
/// set is a deny, not a fallback.
pub fn require_role(current: &str, required: Role) -> AppResult<()> {
    match current.parse::<Role>() {
        Ok(role) if authorize_role(role, required) => Ok(()),
        _ => Err(AppError::Forbidden(format!(
            "Requires role {}",
            required.as_str()
        ))),
    }
}

/// Home route per role. The table is explicit rather than derived from the
/// slug: the athlete dashboard shipped as `atleta-activo`.
fn home_route(role: Role) -> &'static str {
    match role {
        Role::Federation(FederationRole::AdminFab) => dashboard_routes::ADMIN_FAB,
        Role::Federation(FederationRole::AdminAsociacion) => dashboard_routes::ADMIN_ASOCIACION,
        Role::Federation(FederationRole::Atleta) => dashboard_routes::ATLETA,
        Role::Federation(FederationRole::Entrenador) => dashboard_routes::ENTRENADOR,
        Role::Federation(FederationRole::Juez) => dashboard_routes::JUEZ,
        Role::Employment(EmploymentRole::Youth) => dashboard_routes::YOUTH,
        Role::Employment(EmploymentRole::Companies) => dashboard_routes::COMPANIES,
        Role::Employment(EmploymentRole::Superadmin) => dashboard_routes::SUPERADMIN,
    }
}

/// Pending route per role: `/dashboard/{slug}-pending`
fn pending_route(role: Role) -> &'static str {
    match role {
        Role::Federation(FederationRole::AdminFab) => "/dashboard/admin-fab-pending",
        Role::Federation(FederationRole::AdminAsociacion) => "/dashboard/admin-asociacion-pending",
        Role::Federation(FederationRole::Atleta) => "/dashboard/atleta-pending",
        Role::Federation(FederationRole::Entrenador) => "/dashboard/entrenador-pending",
        Role::Federation(FederationRole::Juez) => "/dashboard/juez-pending",
        Role::Employment(EmploymentRole::Youth) => "/dashboard/youth-pending",
        Role::Employment(EmploymentRole::Companies) => "/dashboard/companies-pending",
        Role::Employment(EmploymentRole::Superadmin) => "/dashboard/superadmin-pending",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_routes_follow_slug_pattern() {
        for role in Role::ALL {
            assert_eq!(
                dashboard_route(role, AccountStatus::Pending),
                format!("/dashboard/{}-pending", role.slug())
            );
        }
    }

    #[test]
    fn test_active_routes_match_table() {
        assert_eq!(
            dashboard_route(Role::ADMIN_FAB, AccountStatus::Active),
            "/dashboard/admin-fab"
        );
        assert_eq!(
            dashboard_route(Role::ADMIN_ASOCIACION, AccountStatus::Active),
            "/dashboard/admin-asociacion"
        );
        assert_eq!(
            dashboard_route(Role::ATLETA, AccountStatus::Active),
            "/dashboard/atleta-activo"
        );
        assert_eq!(
            dashboard_route(Role::ENTRENADOR, AccountStatus::Active),
            "/dashboard/entrenador"
        );
        assert_eq!(
            dashboard_route(Role::JUEZ, AccountStatus::Active),
            "/dashboard/juez"
        );
        assert_eq!(
            dashboard_route(Role::YOUTH, AccountStatus::Active),
            "/dashboard/youth"
        );
        assert_eq!(
            dashboard_route(Role::COMPANIES, AccountStatus::Active),
            "/dashboard/companies"
        );
        assert_eq!(
            dashboard_route(Role::SUPERADMIN, AccountStatus::Active),
            "/dashboard/superadmin"
        );
    }

    #[test]
    fn test_non_pending_statuses_pass_through_to_home_route() {
        for role in Role::ALL {
            let home = dashboard_route(role, AccountStatus::Active);
            assert_eq!(dashboard_route(role, AccountStatus::Suspended), home);
            assert_eq!(dashboard_route(role, AccountStatus::Rejected), home);
        }
    }

    #[test]
    fn test_resolve_known_roles() {
        assert_eq!(
            resolve_dashboard_route("admin_fab", "active"),
            "/dashboard/admin-fab"
        );
        assert_eq!(
            resolve_dashboard_route("atleta", "pendiente"),
            "/dashboard/atleta-pending"
        );
        assert_eq!(
            resolve_dashboard_route("atleta", "active"),
            "/dashboard/atleta-activo"
        );
    }

    #[test]
    fn test_resolve_unknown_role_falls_back_to_default() {
        assert_eq!(resolve_dashboard_route("unknown_role", "active"), "/dashboard");
        assert_eq!(resolve_dashboard_route("unknown_role", "pending"), "/dashboard");
        assert_eq!(resolve_dashboard_route("", "active"), "/dashboard");
    }

    #[test]
    fn test_resolve_unknown_status_treated_as_non_pending() {
        assert_eq!(
            resolve_dashboard_route("admin_fab", "whatever"),
            "/dashboard/admin-fab"
        );
        assert_eq!(
            resolve_dashboard_route("atleta", ""),
            "/dashboard/atleta-activo"
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for role in Role::ALL {
            for status in AccountStatus::ALL {
                let first = resolve_dashboard_route(role.as_str(), status.as_str());
                let second = resolve_dashboard_route(role.as_str(), status.as_str());
                assert_eq!(first, second);
                assert_eq!(first, dashboard_route(role, status));
            }
        }
    }

    #[test]
    fn test_authorize_same_role_allows() {
        for role in Role::ALL {
            assert!(authorize_role(role, role));
        }
    }

    #[test]
    fn test_authorize_different_role_denies() {
        for current in Role::ALL {
            for required in Role::ALL {
                if current != required {
                    assert!(!authorize_role(current, required));
                }
            }
        }
        assert!(!authorize_role(Role::ATLETA, Role::ADMIN_FAB));
    }

    #[test]
    fn test_require_role() {
        assert!(require_role("admin_fab", Role::ADMIN_FAB).is_ok());
        assert!(require_role("atleta", Role::ADMIN_FAB).is_err());
        assert!(require_role("unknown_role", Role::ADMIN_FAB).is_err());
        // No hierarchy: the federation admin does not clear other roles
        assert!(require_role("admin_fab", Role::ADMIN_ASOCIACION).is_err());
    }
}
