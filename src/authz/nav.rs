use serde::{Deserialize, Serialize};

use super::role::Role;

/// One entry in the declarative portal menu.
///
/// The tree is configuration, not state: it is declared once (code or
/// YAML) and pruned per role at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub allowed_roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

impl NavItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>, allowed_roles: &[Role]) -> Self {
        NavItem {
            title: title.into(),
            url: url.into(),
            icon: None,
            allowed_roles: allowed_roles.to_vec(),
            items: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_items(mut self, items: Vec<NavItem>) -> Self {
        self.items = items;
        self
    }
}

/// Prune the menu tree down to what `role` may see.
///
/// Entries the role is not allowed are omitted entirely, never disabled.
/// Declaration order is preserved. An unauthenticated caller (no role)
/// sees an empty menu.
pub fn filter_for_role(tree: &[NavItem], role: Option<Role>) -> Vec<NavItem> {
    let Some(role) = role else {
        return Vec::new();
    };

    tree.iter()
        .filter(|item| item.allowed_roles.contains(&role))
        .map(|item| NavItem {
            items: filter_for_role(&item.items, Some(role)),
            ..item.clone()
        })
        .collect()
}
