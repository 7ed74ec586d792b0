// handlers/protected/navigation.rs - role-filtered portal menu

use axum::{extract::State, Extension};

use crate::authz::{filter_for_role, NavItem};
use crate::middleware::ApiResponse;
use crate::session::Identity;
use crate::state::AppState;

/// GET /api/navigation - The declared menu tree pruned for the caller's role
///
/// Entries the role may not see are omitted entirely; the portals render
/// the result as-is, in declaration order. A session with no recognized
/// role gets an empty menu.
pub async fn navigation_get(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ApiResponse<Vec<NavItem>> {
    let menu = filter_for_role(&state.nav_tree, identity.active_role());
    ApiResponse::success(menu)
}
