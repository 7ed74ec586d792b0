use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::authz::{self, GuardOutcome, Role, RoleFlags};
use crate::session::Identity;

/// Route guard for a portal area.
///
/// Layered per area with the area's required role as state; runs after
/// `resolve_identity` on every navigation into the subtree. The guard
/// decision itself is a pure function; this layer only executes the
/// redirect it asks for. 307 keeps the method and lets the client treat
/// the hop as a replaced navigation rather than a rendered page.
pub async fn portal_guard(
    State(required): State<Role>,
    request: Request,
    next: Next,
) -> Response {
    let flags = request
        .extensions()
        .get::<Identity>()
        .map(Identity::flags)
        .unwrap_or_else(RoleFlags::default);

    let path = request.uri().path();
    match authz::evaluate(required, &flags, path) {
        GuardOutcome::Allow => next.run(request).await,
        GuardOutcome::RedirectTo(target) => {
            tracing::warn!(
                "navigation to {} denied for {} area (authenticated: {}), redirecting to {}",
                path,
                required,
                flags.is_authenticated,
                target
            );
            Redirect::temporary(&target).into_response()
        }
    }
}
