//! Employee entity

use serde::{Deserialize, Serialize};

/// An employee and the ids of the roles assigned to them.
///
/// `roles` is a set: `assign` never adds a duplicate. Insertion order is kept
/// for display. Ids are not checked against the role collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<u32>,
}

impl Employee {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            roles: Vec::new(),
        }
    }

    pub fn has_role(&self, role_id: u32) -> bool {
        self.roles.contains(&role_id)
    }

    /// Append `role_id` unless already held; returns whether it was added
    pub fn assign(&mut self, role_id: u32) -> bool {
        if self.has_role(role_id) {
            return false;
        }
        self.roles.push(role_id);
        true
    }

    /// Drop `role_id`; returns whether it was held
    pub fn unassign(&mut self, role_id: u32) -> bool {
        let before = self.roles.len();
        self.roles.retain(|id| *id != role_id);
        self.roles.len() != before
    }
}
