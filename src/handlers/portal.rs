// handlers/portal.rs - area documents behind the route guard
//
// The real portals are single-page apps; the gate serves a minimal
// document per page so clients (and tests) can see which page a
// navigation actually landed on after guard decisions.

use axum::http::Uri;
use serde_json::{json, Value};

use crate::middleware::ApiResponse;

/// Serve the document for any guarded portal page.
///
/// The bare area root is registered to this handler too, but the guard
/// forwards it to the canonical dashboard before rendering.
pub async fn page(uri: Uri) -> ApiResponse<Value> {
    let path = uri.path();
    let mut segments = path.trim_matches('/').splitn(2, '/');
    let area = segments.next().unwrap_or_default().to_string();
    let page = segments.next().unwrap_or("dashboard").to_string();

    ApiResponse::success(json!({
        "area": area,
        "page": page,
        "path": path,
    }))
}

/// GET /login - Unauthenticated landing page
///
/// Every guard denial converges here; the portals render the actual
/// login form client-side.
pub async fn login_page() -> ApiResponse<Value> {
    ApiResponse::success(json!({ "page": "login" }))
}
