use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Capability set held by a session.
///
/// Capabilities are `action.resource` strings (`create.users`,
/// `manage.payments`). The set is unordered and deduplicated; matching is
/// exact string membership, so checks stay O(1) regardless of grant count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashSet<String>);

impl PermissionSet {
    pub fn new<I, S>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PermissionSet(capabilities.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Exact membership check. An empty set denies everything.
    pub fn has_permission(&self, capability: &str) -> bool {
        self.0.contains(capability)
    }

    /// True when at least one of the listed capabilities is held
    pub fn has_any_permission<'a>(&self, capabilities: impl IntoIterator<Item = &'a str>) -> bool {
        capabilities.into_iter().any(|cap| self.has_permission(cap))
    }

    /// True when every listed capability is held
    pub fn has_all_permissions<'a>(&self, capabilities: impl IntoIterator<Item = &'a str>) -> bool {
        capabilities.into_iter().all(|cap| self.has_permission(cap))
    }

    /// Verb-oriented helper for UI-style checks: `set.can().create("user")`
    pub fn can(&self) -> Can<'_> {
        Can { set: self }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        PermissionSet::new(iter)
    }
}

/// Capability checks keyed by the five verbs the portals use.
///
/// Resources are normalized to their plural form before matching, so
/// `can().create("user")` and `can().create("users")` are equivalent.
#[derive(Debug, Clone, Copy)]
pub struct Can<'a> {
    set: &'a PermissionSet,
}

impl Can<'_> {
    pub fn create(&self, resource: &str) -> bool {
        self.check("create", resource)
    }

    pub fn read(&self, resource: &str) -> bool {
        self.check("read", resource)
    }

    pub fn update(&self, resource: &str) -> bool {
        self.check("update", resource)
    }

    pub fn delete(&self, resource: &str) -> bool {
        self.check("delete", resource)
    }

    pub fn manage(&self, resource: &str) -> bool {
        self.check("manage", resource)
    }

    fn check(&self, verb: &str, resource: &str) -> bool {
        self.set
            .has_permission(&format!("{}.{}", verb, pluralize(resource)))
    }
}

/// Append a trailing `s` unless the resource already ends with one.
/// Idempotent: pluralizing a plural is a no-op.
fn pluralize(resource: &str) -> String {
    if resource.ends_with('s') {
        resource.to_string()
    } else {
        format!("{}s", resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_membership() {
        let set = PermissionSet::new(["manage.users"]);
        assert!(set.has_permission("manage.users"));
        assert!(!set.has_permission("read.users"));
    }

    #[test]
    fn any_and_all() {
        let set = PermissionSet::new(["manage.users"]);
        assert!(set.has_any_permission(["read.users", "manage.users"]));
        assert!(!set.has_all_permissions(["read.users", "manage.users"]));
        assert!(set.has_all_permissions(["manage.users"]));
    }

    #[test]
    fn empty_set_denies_everything() {
        let set = PermissionSet::default();
        assert!(!set.has_permission("read.users"));
        assert!(!set.has_any_permission(["read.users", "manage.users"]));
        // vacuous truth would grant on an empty list, so check a real one
        assert!(!set.has_all_permissions(["read.users"]));
        assert!(!set.can().manage("payments"));
    }

    #[test]
    fn can_pluralizes_resources() {
        let set = PermissionSet::new(["create.users"]);
        assert!(set.can().create("user"));
        assert!(set.can().create("users"));
        assert!(!set.can().create("payments"));
    }

    #[test]
    fn duplicates_collapse() {
        let set = PermissionSet::new(["read.courses", "read.courses"]);
        assert_eq!(set.len(), 1);
    }
}
