use super::role::{Role, RoleFlags};

/// Path the guard falls back to when a session holds no usable role
pub const LOGIN_PATH: &str = "/login";

/// Classification of a navigation attempt into a protected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaAccess {
    /// No usable session, or a session with no recognized role
    Unauthenticated,
    /// Session belongs to a different area; `actual` is where it should go
    WrongArea { actual: Role },
    /// Correct area, but the path is the bare area root
    AreaRoot,
    /// Path is inside the caller's own area
    Granted,
}

/// Decision the routing layer executes on the guard's behalf.
///
/// The guard never redirects by itself and never raises; it hands back a
/// value and the router either renders or replaces the pending navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectTo(String),
}

/// Classify a navigation into the area owned by `required`.
///
/// Runs on every navigation into a protected subtree; nothing is cached
/// across navigations because session state can change between them
/// (logout in another tab, expired token).
pub fn classify(required: Role, flags: &RoleFlags, path: &str) -> AreaAccess {
    if !flags.has(required) {
        // Deny-with-redirect: pick the caller's actual area by fixed
        // precedence, or send to login when no recognized role is held.
        return match flags.active_role() {
            Some(actual) => AreaAccess::WrongArea { actual },
            None => AreaAccess::Unauthenticated,
        };
    }

    if is_area_root(path, required) {
        return AreaAccess::AreaRoot;
    }

    AreaAccess::Granted
}

/// Evaluate the guard and produce the outcome the router executes.
///
/// Convergence: every redirect target this returns evaluates to `Allow`
/// (or to the login page) on the next pass, so the guard cannot loop.
pub fn evaluate(required: Role, flags: &RoleFlags, path: &str) -> GuardOutcome {
    match classify(required, flags, path) {
        AreaAccess::Unauthenticated => GuardOutcome::RedirectTo(LOGIN_PATH.to_string()),
        AreaAccess::WrongArea { actual } => {
            GuardOutcome::RedirectTo(actual.area_root().to_string())
        }
        AreaAccess::AreaRoot => GuardOutcome::RedirectTo(required.dashboard_path().to_string()),
        AreaAccess::Granted => GuardOutcome::Allow,
    }
}

/// Bare area root, with or without a trailing slash
fn is_area_root(path: &str, area: Role) -> bool {
    path.trim_end_matches('/') == area.area_root()
}
