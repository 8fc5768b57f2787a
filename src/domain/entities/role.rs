//! Role entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{has_any_permission, ModuleGrants, Permission, PermissionSet};

/// Lifecycle status of a role. Only `Active` is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoleStatus {
    #[default]
    Active,
}

impl std::fmt::Display for RoleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoleStatus::Active => write!(f, "Active"),
        }
    }
}

/// A named bundle of per-module permissions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub modules: ModuleGrants,
    #[serde(default)]
    pub status: RoleStatus,
}

impl Role {
    /// Permissions granted on `module`, if any were recorded
    pub fn permissions_for(&self, module: &str) -> Option<&PermissionSet> {
        self.modules.get(module).filter(|set| !set.is_empty())
    }

    /// Whether `permission` is recorded for `module`, either literally or via `All`
    pub fn grants(&self, module: &str, permission: Permission) -> bool {
        self.permissions_for(module)
            .is_some_and(|set| set.is_all() || set.contains(permission))
    }

    pub fn has_any_permission(&self) -> bool {
        has_any_permission(&self.modules)
    }
}

/// Fields supplied by the role form when creating a role.
///
/// The store assigns `id` and `status`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleDraft {
    pub name: String,
    pub modules: ModuleGrants,
}

impl RoleDraft {
    pub fn new(name: impl Into<String>, modules: ModuleGrants) -> Self {
        Self {
            name: name.into(),
            modules,
        }
    }

    pub(crate) fn into_role(self, id: u32) -> Role {
        Role {
            id,
            name: self.name,
            modules: self.modules,
            status: RoleStatus::Active,
        }
    }
}
