//! Navigation tree configuration.
//!
//! The menu is declarative data owned by configuration, not computed by
//! the authorization core. Deployments may supply a YAML file; otherwise
//! the built-in portal menu below is used.

use std::path::{Path, PathBuf};

use crate::authz::{NavItem, Role};

#[derive(Debug, thiserror::Error)]
pub enum NavConfigError {
    #[error("failed to read navigation file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid navigation file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Load a navigation tree from a YAML file (a list of items)
pub fn load(path: &Path) -> Result<Vec<NavItem>, NavConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| NavConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| NavConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Built-in menu covering the three portal areas.
///
/// Order here is the order portals render; the filter never re-sorts.
pub fn default_tree() -> Vec<NavItem> {
    vec![
        NavItem::new("Dashboard", "/admin/dashboard", &[Role::Admin]).with_icon("layout-dashboard"),
        NavItem::new("User Management", "/admin/users", &[Role::Admin])
            .with_icon("users")
            .with_items(vec![
                NavItem::new("Users", "/admin/users", &[Role::Admin]),
                NavItem::new("Roles & Permissions", "/admin/roles", &[Role::Admin]),
            ]),
        NavItem::new("Payments", "/admin/payments", &[Role::Admin]).with_icon("credit-card"),
        NavItem::new("Dashboard", "/instructor/dashboard", &[Role::Instructor])
            .with_icon("layout-dashboard"),
        NavItem::new("Courses", "/instructor/courses", &[Role::Instructor])
            .with_icon("book-open")
            .with_items(vec![
                NavItem::new("My Courses", "/instructor/courses", &[Role::Instructor]),
                NavItem::new("Sessions", "/instructor/sessions", &[Role::Instructor]),
            ]),
        NavItem::new("Students", "/instructor/students", &[Role::Instructor]).with_icon("users"),
        NavItem::new("Dashboard", "/student/dashboard", &[Role::Student])
            .with_icon("layout-dashboard"),
        NavItem::new("My Learning", "/student/formations", &[Role::Student]).with_icon("book"),
        NavItem::new("Enrollments", "/student/enrollments", &[Role::Student])
            .with_icon("clipboard-list"),
    ]
}
