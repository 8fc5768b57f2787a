//! Module catalog - the application areas permissions apply to
//!
//! Static configuration used to render the permission matrix. It is not
//! user data and is never persisted with the roster state.

use serde::{Deserialize, Serialize};

use super::value_objects::Permission;

/// Modules shown when the config does not define its own catalog
pub const DEFAULT_MODULES: [&str; 5] = ["Dashboard", "Employees", "Reports", "Skill Matrix", "ORG"];

/// One row of the permission matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    pub name: String,
    #[serde(default = "concrete_permissions")]
    pub permissions: Vec<Permission>,
}

impl ModuleDefinition {
    pub fn new(name: impl Into<String>, permissions: Vec<Permission>) -> Self {
        Self {
            name: name.into(),
            permissions,
        }
    }
}

fn concrete_permissions() -> Vec<Permission> {
    Permission::CONCRETE.to_vec()
}

/// Ordered list of modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCatalog {
    modules: Vec<ModuleDefinition>,
}

impl ModuleCatalog {
    pub fn new(modules: Vec<ModuleDefinition>) -> Self {
        Self { modules }
    }

    pub fn modules(&self) -> &[ModuleDefinition] {
        &self.modules
    }

    pub fn get(&self, name: &str) -> Option<&ModuleDefinition> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Case-insensitive lookup, used to resolve names typed on the command line
    pub fn find(&self, name: &str) -> Option<&ModuleDefinition> {
        self.modules
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for ModuleCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_MODULES
                .iter()
                .map(|name| ModuleDefinition::new(*name, concrete_permissions()))
                .collect(),
        )
    }
}
