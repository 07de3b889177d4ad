//! Client-side permission gate
//!
//! Controls which buttons and menu entries a view renders. This is a
//! display convenience, never a security boundary: the backend
//! authorizes every call on its own.

use std::collections::HashSet;

use shared::client::UserInfo;
use shared::models::SUPER_ADMIN_ROLE_ID;

/// The permission slugs of the logged-in user
#[derive(Debug, Clone)]
pub struct PermissionSet {
    role_id: i64,
    slugs: HashSet<String>,
}

impl PermissionSet {
    pub fn from_user(user: &UserInfo) -> Self {
        Self {
            role_id: user.role_id,
            slugs: user.permissions.iter().cloned().collect(),
        }
    }

    /// Whether the UI should offer the action behind `slug`.
    ///
    /// Super Admin (role id 1) and the `"*"` wildcard allow
    /// everything.
    pub fn allows(&self, slug: &str) -> bool {
        self.role_id == SUPER_ADMIN_ROLE_ID
            || self.slugs.contains("*")
            || self.slugs.contains(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role_id: i64, permissions: &[&str]) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            username: "editor".into(),
            role_id,
            role_name: "Editor".into(),
            permissions: permissions.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_explicit_slug() {
        let set = PermissionSet::from_user(&user(5, &["products:read", "products:write"]));
        assert!(set.allows("products:write"));
        assert!(!set.allows("roles:write"));
    }

    #[test]
    fn test_wildcard() {
        let set = PermissionSet::from_user(&user(5, &["*"]));
        assert!(set.allows("anything:at-all"));
    }

    #[test]
    fn test_super_admin_ignores_slug_list() {
        let set = PermissionSet::from_user(&user(SUPER_ADMIN_ROLE_ID, &[]));
        assert!(set.allows("roles:write"));
    }
}
