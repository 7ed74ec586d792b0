//! Pure authorization core: role flags, capability matching, the route
//! guard decision, and menu filtering. Nothing in here performs I/O; the
//! HTTP layer feeds these functions and executes their decisions.

pub mod guard;
pub mod nav;
pub mod permission;
pub mod role;

pub use guard::{classify, evaluate, AreaAccess, GuardOutcome, LOGIN_PATH};
pub use nav::{filter_for_role, NavItem};
pub use permission::{Can, PermissionSet};
pub use role::{Role, RoleFlags};
