//! Permission value objects
//!
//! - `Permission`: one checkbox in the role permission matrix
//! - `PermissionSet`: the permissions granted for one module
//! - `ModuleGrants`: module name to permission set, as stored on a role

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A permission that can be granted on a module.
///
/// `All` is a supersede marker stored literally; it is not expanded into
/// the four concrete permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    All,
    View,
    Add,
    Update,
    Delete,
}

impl Permission {
    /// The concrete permissions, in matrix column order
    pub const CONCRETE: [Permission; 4] = [
        Permission::View,
        Permission::Add,
        Permission::Update,
        Permission::Delete,
    ];

    /// Returns true for everything except the `All` marker
    pub fn is_concrete(&self) -> bool {
        !matches!(self, Permission::All)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::All => "All",
            Permission::View => "View",
            Permission::Add => "Add",
            Permission::Update => "Update",
            Permission::Delete => "Delete",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Permission::All),
            "view" => Ok(Permission::View),
            "add" => Ok(Permission::Add),
            "update" => Ok(Permission::Update),
            "delete" => Ok(Permission::Delete),
            other => Err(format!(
                "unknown permission '{}' (expected All, View, Add, Update or Delete)",
                other
            )),
        }
    }
}

/// Permissions granted on a single module.
///
/// Behaves as a set (no duplicates) but keeps insertion order so that the
/// stored list reads back exactly as it was selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Permission>", into = "Vec<Permission>")]
pub struct PermissionSet(Vec<Permission>);

impl PermissionSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The `[All]` selection
    pub fn all() -> Self {
        Self(vec![Permission::All])
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.0.contains(&permission)
    }

    /// Whether `All` is selected
    pub fn is_all(&self) -> bool {
        self.contains(Permission::All)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Permission] {
        &self.0
    }

    /// Add a permission; returns false if it was already present
    pub fn insert(&mut self, permission: Permission) -> bool {
        if self.contains(permission) {
            return false;
        }
        self.0.push(permission);
        true
    }

    /// Remove a permission; returns false if it was absent
    pub fn remove(&mut self, permission: Permission) -> bool {
        let before = self.0.len();
        self.0.retain(|p| *p != permission);
        self.0.len() != before
    }

    /// Either exactly `{All}` or only concrete permissions
    pub fn is_consistent(&self) -> bool {
        !self.is_all() || self.0.len() == 1
    }

    /// Comma separated labels, e.g. `View, Add`
    pub fn joined(&self) -> String {
        self.0
            .iter()
            .map(Permission::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Vec<Permission>> for PermissionSet {
    fn from(permissions: Vec<Permission>) -> Self {
        permissions.into_iter().collect()
    }
}

impl From<PermissionSet> for Vec<Permission> {
    fn from(set: PermissionSet) -> Self {
        set.0
    }
}

/// Collecting collapses any list holding `All` to `[All]`, so sets read
/// from a hand-edited file are consistent too
impl FromIterator<Permission> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        let mut set = PermissionSet::new();
        for permission in iter {
            set.insert(permission);
        }
        if set.is_all() {
            return Self::all();
        }
        set
    }
}

/// Per-module permission grants of a role, keyed by module name.
pub type ModuleGrants = BTreeMap<String, PermissionSet>;

/// True when at least one module has a non-empty selection
pub fn has_any_permission(grants: &ModuleGrants) -> bool {
    grants.values().any(|set| !set.is_empty())
}
