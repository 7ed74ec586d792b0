//! Router assembly and the serve loop, shared by the `portal-gate`
//! binary and the CLI's `serve` subcommand.

use anyhow::Context;
use axum::{
    http::HeaderValue,
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::authz::Role;
use crate::config::{self, SecurityConfig};
use crate::handlers::{portal, protected, public};
use crate::middleware;
use crate::state::AppState;

/// Bind `port` and run the gate until the process is stopped
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let config = config::config();
    let state = AppState::from_config(config)?;

    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    println!("🚀 Portal Gate listening on http://{}", bind_addr);

    axum::serve(listener, app).await.context("server")?;
    Ok(())
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .route("/login", get(portal::login_page))
        // Public auth routes (token acquisition)
        .merge(auth_public_routes(state.clone()))
        // Protected JSON API
        .merge(api_routes(state))
        // Guarded portal areas
        .merge(portal_routes())
        // Global middleware
        .layer(cors_layer(&config::config().security))
        .layer(TraceLayer::new_for_http())
}

/// CORS layer built from security config. Disabled CORS emits no
/// headers; a `*` entry is fully permissive; otherwise only the listed
/// origins are allowed.
fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    if security.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

fn auth_public_routes(state: AppState) -> Router {
    Router::new()
        .route("/auth/login", post(public::auth::login_post))
        .with_state(state)
}

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/whoami", get(protected::auth::whoami))
        .route("/api/auth/session", delete(protected::auth::session_logout))
        .route("/api/navigation", get(protected::navigation::navigation_get))
        .route("/api/permissions/check", get(protected::permissions::check_get))
        .route_layer(from_fn(middleware::require_identity))
        .with_state(state)
}

fn portal_routes() -> Router {
    Router::new()
        .merge(area_router(
            Role::Admin,
            &["dashboard", "users", "roles", "payments"],
        ))
        .merge(area_router(
            Role::Instructor,
            &["dashboard", "courses", "sessions", "students"],
        ))
        .merge(area_router(
            Role::Student,
            &["dashboard", "formations", "enrollments"],
        ))
        // Identity resolution must run before any area guard
        .layer(from_fn(middleware::resolve_identity))
}

/// Routes for one portal area, guarded by that area's required role.
/// The bare root is registered with and without a trailing slash so the
/// guard sees both spellings.
fn area_router(area: Role, pages: &[&str]) -> Router {
    let root = area.area_root();

    let mut router = Router::new()
        .route(root, get(portal::page))
        .route(&format!("{}/", root), get(portal::page));

    for page in pages {
        router = router.route(&format!("{}/{}", root, page), get(portal::page));
    }

    router.route_layer(from_fn_with_state(area, middleware::portal_guard))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Portal Gate",
            "version": version,
            "description": "Authorization and navigation gate for the training portals",
            "endpoints": {
                "home": "/ (public)",
                "login": "/auth/login (public - token acquisition)",
                "auth": "/api/auth/* (protected - session introspection)",
                "navigation": "/api/navigation (protected - role-filtered menu)",
                "permissions": "/api/permissions/check (protected - capability check)",
                "portals": "/admin, /instructor, /student (guarded areas)",
            }
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now()
        }
    }))
}
