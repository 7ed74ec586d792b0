use serde::{Deserialize, Serialize};
use std::fmt;

/// Privilege tiers recognized across the portals.
///
/// A session carries at most one role; everything else (route access,
/// menu visibility) is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Instructor,
    Student,
}

impl Role {
    /// Fixed precedence used when a session must be routed to a fallback
    /// area: admin wins over instructor, instructor over student.
    pub const PRIORITY: [Role; 3] = [Role::Admin, Role::Instructor, Role::Student];

    /// Parse a raw role tag as stored in session state.
    ///
    /// Legacy tags (`teacher`, `client`) map onto the current names.
    /// Anything else is unrecognized and yields `None`.
    pub fn parse(tag: &str) -> Option<Role> {
        match tag {
            "admin" => Some(Role::Admin),
            "instructor" | "teacher" => Some(Role::Instructor),
            "student" | "client" => Some(Role::Student),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Instructor => "instructor",
            Role::Student => "student",
        }
    }

    /// Root path of the portal area owned by this role
    pub fn area_root(&self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Instructor => "/instructor",
            Role::Student => "/student",
        }
    }

    /// Default landing page inside the role's area
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin/dashboard",
            Role::Instructor => "/instructor/dashboard",
            Role::Student => "/student/dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean role flags derived from the raw session role tag.
///
/// Flags are never stored; they are recomputed from the tag whenever it
/// changes, so role and flags cannot drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleFlags {
    pub is_admin: bool,
    pub is_instructor: bool,
    pub is_student: bool,
    pub is_authenticated: bool,
}

impl RoleFlags {
    /// Derive flags from a nullable role tag.
    ///
    /// A `None` tag is an unauthenticated session. A non-null but
    /// unrecognized tag counts as authenticated with no specific role,
    /// which the route guard sends to login rather than failing.
    pub fn resolve(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return RoleFlags::default();
        };

        let role = Role::parse(tag);
        RoleFlags {
            is_admin: role == Some(Role::Admin),
            is_instructor: role == Some(Role::Instructor),
            is_student: role == Some(Role::Student),
            is_authenticated: true,
        }
    }

    pub fn has(&self, role: Role) -> bool {
        match role {
            Role::Admin => self.is_admin,
            Role::Instructor => self.is_instructor,
            Role::Student => self.is_student,
        }
    }

    /// The single active role, picked by fixed precedence when legacy
    /// session data carries more than one signal.
    pub fn active_role(&self) -> Option<Role> {
        Role::PRIORITY.into_iter().find(|role| self.has(*role))
    }
}
