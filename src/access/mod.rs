//! Role-based access control
//!
//! The single place where a principal's `(role, status)` pair is turned into
//! a dashboard destination and where role authorization decisions are made.
//! Every protected entry point calls into this module instead of re-deriving
//! the mapping inline.

pub mod role;
pub mod router;

pub use role::{AccountStatus, EmploymentRole, FederationRole, Role};
pub use router::{authorize_role, dashboard_route, require_role, resolve_dashboard_route};
