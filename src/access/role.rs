//! Role and account status enumerations
//!
//! Roles and statuses arrive as strings (database columns, JWT claims) and
//! are validated here, once, at the boundary. Downstream logic matches
//! exhaustively over the enums so a new role is a compile-time event, not a
//! silent fallback.
//!
//! Two role taxonomies coexist: the Spanish federation set (`admin_fab`,
//! `atleta`, ...) and the English employment-portal set (`youth`,
//! `companies`, `superadmin`). They are kept separate and composed under
//! [`Role`] rather than merged into one flat namespace.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{employment_roles, federation_roles, statuses};

/// Roles within the sports federation portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FederationRole {
    /// Federation-level administrator
    AdminFab,
    /// Association-level administrator
    AdminAsociacion,
    Atleta,
    Entrenador,
    Juez,
}

impl FederationRole {
    /// Canonical wire string, as stored in the database
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdminFab => federation_roles::ADMIN_FAB,
            Self::AdminAsociacion => federation_roles::ADMIN_ASOCIACION,
            Self::Atleta => federation_roles::ATLETA,
            Self::Entrenador => federation_roles::ENTRENADOR,
            Self::Juez => federation_roles::JUEZ,
        }
    }

    /// Hyphenated form used in dashboard paths
    pub fn slug(self) -> &'static str {
        match self {
            Self::AdminFab => "admin-fab",
            Self::AdminAsociacion => "admin-asociacion",
            Self::Atleta => "atleta",
            Self::Entrenador => "entrenador",
            Self::Juez => "juez",
        }
    }
}

/// Roles within the youth employment portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmploymentRole {
    Youth,
    Companies,
    Superadmin,
}

impl EmploymentRole {
    /// Canonical wire string, as stored in the database
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Youth => employment_roles::YOUTH,
            Self::Companies => employment_roles::COMPANIES,
            Self::Superadmin => employment_roles::SUPERADMIN,
        }
    }

    /// Hyphenated form used in dashboard paths
    pub fn slug(self) -> &'static str {
        // Employment role strings carry no underscores; slug == wire form
        self.as_str()
    }
}

/// A principal's role, spanning both portal taxonomies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Role {
    Federation(FederationRole),
    Employment(EmploymentRole),
}

impl Role {
    pub const ADMIN_FAB: Role = Role::Federation(FederationRole::AdminFab);
    pub const ADMIN_ASOCIACION: Role = Role::Federation(FederationRole::AdminAsociacion);
    pub const ATLETA: Role = Role::Federation(FederationRole::Atleta);
    pub const ENTRENADOR: Role = Role::Federation(FederationRole::Entrenador);
    pub const JUEZ: Role = Role::Federation(FederationRole::Juez);
    pub const YOUTH: Role = Role::Employment(EmploymentRole::Youth);
    pub const COMPANIES: Role = Role::Employment(EmploymentRole::Companies);
    pub const SUPERADMIN: Role = Role::Employment(EmploymentRole::Superadmin);

    /// Every declared role, both taxonomies
    pub const ALL: [Role; 8] = [
        Role::ADMIN_FAB,
        Role::ADMIN_ASOCIACION,
        Role::ATLETA,
        Role::ENTRENADOR,
        Role::JUEZ,
        Role::YOUTH,
        Role::COMPANIES,
        Role::SUPERADMIN,
    ];

    /// Roles a public signup may request; administrative roles are granted
    /// through the admin surface only
    pub const SELF_ASSIGNABLE: [Role; 6] = [
        Role::ADMIN_ASOCIACION,
        Role::ATLETA,
        Role::ENTRENADOR,
        Role::JUEZ,
        Role::YOUTH,
        Role::COMPANIES,
    ];

    /// Canonical wire string, as stored in the database
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Federation(r) => r.as_str(),
            Self::Employment(r) => r.as_str(),
        }
    }

    /// Hyphenated form used in dashboard paths
    pub fn slug(self) -> &'static str {
        match self {
            Self::Federation(r) => r.slug(),
            Self::Employment(r) => r.slug(),
        }
    }

    /// Whether the role carries administrative privileges in its portal
    pub fn is_administrative(self) -> bool {
        matches!(self, Role::ADMIN_FAB | Role::SUPERADMIN)
    }
}

/// Error for a role string outside the closed set
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The employment portal historically wrote its roles uppercase
        // (YOUTH, COMPANIES, SUPERADMIN); accept either casing for both sets
        match s.to_ascii_lowercase().as_str() {
            federation_roles::ADMIN_FAB => Ok(Role::ADMIN_FAB),
            federation_roles::ADMIN_ASOCIACION => Ok(Role::ADMIN_ASOCIACION),
            federation_roles::ATLETA => Ok(Role::ATLETA),
            federation_roles::ENTRENADOR => Ok(Role::ENTRENADOR),
            federation_roles::JUEZ => Ok(Role::JUEZ),
            employment_roles::YOUTH => Ok(Role::YOUTH),
            employment_roles::COMPANIES => Ok(Role::COMPANIES),
            employment_roles::SUPERADMIN => Ok(Role::SUPERADMIN),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = ParseRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum AccountStatus {
    /// Awaiting approval by an administrator
    Pending,
    Active,
    Suspended,
    Rejected,
}

impl AccountStatus {
    /// Every declared status
    pub const ALL: [AccountStatus; 4] = [
        AccountStatus::Pending,
        AccountStatus::Active,
        AccountStatus::Suspended,
        AccountStatus::Rejected,
    ];

    /// Canonical wire string, as stored in the database
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => statuses::PENDING,
            Self::Active => statuses::ACTIVE,
            Self::Suspended => statuses::SUSPENDED,
            Self::Rejected => statuses::REJECTED,
        }
    }

    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Error for a status string outside the closed set
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown account status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for AccountStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Legacy rows and tokens carry the Spanish forms; canonicalize here
        match s.to_ascii_lowercase().as_str() {
            "pending" | "pendiente" => Ok(Self::Pending),
            "active" | "activo" => Ok(Self::Active),
            "suspended" | "suspendido" => Ok(Self::Suspended),
            "rejected" | "rechazado" => Ok(Self::Rejected),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl TryFrom<String> for AccountStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountStatus> for String {
    fn from(status: AccountStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_uppercase_employment_forms() {
        assert_eq!("YOUTH".parse::<Role>().unwrap(), Role::YOUTH);
        assert_eq!("COMPANIES".parse::<Role>().unwrap(), Role::COMPANIES);
        assert_eq!("SUPERADMIN".parse::<Role>().unwrap(), Role::SUPERADMIN);
    }

    #[test]
    fn test_role_parse_unknown() {
        assert!("unknown_role".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_taxonomies_stay_distinct() {
        assert_ne!(Role::ADMIN_FAB, Role::SUPERADMIN);
        assert!(matches!(Role::ATLETA, Role::Federation(_)));
        assert!(matches!(Role::YOUTH, Role::Employment(_)));
    }

    #[test]
    fn test_role_slugs() {
        assert_eq!(Role::ADMIN_FAB.slug(), "admin-fab");
        assert_eq!(Role::ADMIN_ASOCIACION.slug(), "admin-asociacion");
        assert_eq!(Role::ATLETA.slug(), "atleta");
        assert_eq!(Role::YOUTH.slug(), "youth");
    }

    #[test]
    fn test_status_round_trip() {
        for status in AccountStatus::ALL {
            assert_eq!(status.as_str().parse::<AccountStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_spanish_synonyms() {
        assert_eq!("pendiente".parse::<AccountStatus>().unwrap(), AccountStatus::Pending);
        assert_eq!("activo".parse::<AccountStatus>().unwrap(), AccountStatus::Active);
        assert_eq!("suspendido".parse::<AccountStatus>().unwrap(), AccountStatus::Suspended);
        assert_eq!("rechazado".parse::<AccountStatus>().unwrap(), AccountStatus::Rejected);
    }

    #[test]
    fn test_status_parse_unknown() {
        assert!("archived".parse::<AccountStatus>().is_err());
    }

    #[test]
    fn test_self_assignable_excludes_administrative_roles() {
        assert!(!Role::SELF_ASSIGNABLE.contains(&Role::ADMIN_FAB));
        assert!(!Role::SELF_ASSIGNABLE.contains(&Role::SUPERADMIN));
        for role in Role::SELF_ASSIGNABLE {
            assert!(!role.is_administrative());
        }
    }

    #[test]
    fn test_serde_wire_format() {
        let json = serde_json::to_string(&Role::ADMIN_FAB).unwrap();
        assert_eq!(json, "\"admin_fab\"");
        let role: Role = serde_json::from_str("\"atleta\"").unwrap();
        assert_eq!(role, Role::ATLETA);

        let json = serde_json::to_string(&AccountStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
