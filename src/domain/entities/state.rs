//! Roster state - the employee and role collections
//!
//! A pure data structure with the mutation rules applied in place.
//! Persistence is handled by `StateRepository`; write-through lives in
//! `application::Store`.

use crate::domain::value_objects::{IdPolicy, ModuleGrants, Permission, PermissionSet};

use super::employee::Employee;
use super::role::{Role, RoleDraft};


/// Names of the employees present before any state has been persisted
pub const SEED_EMPLOYEES: [&str; 5] = [
    "Alice Johnson",
    "Bob Smith",
    "Charlie Brown",
    "David Williams",
    "Eva Davis",
];

/// Both collections, the unit that gets persisted and restored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterState {
    pub employees: Vec<Employee>,
    pub roles: Vec<Role>,
    /// Next id under the monotonic policy; `None` until a role is added or deleted
    pub next_role_id: Option<u32>,
}

impl RosterState {
    pub fn new(employees: Vec<Employee>, roles: Vec<Role>) -> Self {
        Self {
            employees,
            roles,
            next_role_id: None,
        }
    }

    /// Five employees without roles and a single `Admin` role
    pub fn seed() -> Self {
        let employees = SEED_EMPLOYEES
            .iter()
            .enumerate()
            .map(|(i, name)| Employee::new(i as u32 + 1, *name))
            .collect();

        let mut modules = ModuleGrants::new();
        modules.insert(
            "Dashboard".to_string(),
            PermissionSet::from(Permission::CONCRETE.to_vec()),
        );
        modules.insert(
            "Employees".to_string(),
            PermissionSet::from(vec![Permission::View]),
        );
        let admin = RoleDraft::new("Admin", modules).into_role(1);

        Self::new(employees, vec![admin])
    }

    pub fn employee(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn role(&self, id: u32) -> Option<&Role> {
        self.roles.iter().find(|r| r.id == id)
    }

    /// Append a role built from `draft` with an id chosen by `policy`
    pub fn add_role(&mut self, draft: RoleDraft, policy: IdPolicy) -> Role {
        let existing: Vec<u32> = self.roles.iter().map(|r| r.id).collect();
        let id = policy.next_id(&existing, self.next_role_id);
        if policy == IdPolicy::Monotonic {
            self.next_role_id = Some(id + 1);
        }

        let role = draft.into_role(id);
        self.roles.push(role.clone());
        role
    }

    /// Replace the role with the same id, keeping its position
    pub fn update_role(&mut self, role: Role) -> bool {
        match self.roles.iter_mut().find(|r| r.id == role.id) {
            Some(slot) => {
                *slot = role;
                true
            }
            None => false,
        }
    }

    /// Remove the role; employees keep whatever ids they hold.
    ///
    /// The monotonic counter is moved past the deleted id so it is never
    /// handed out again.
    pub fn delete_role(&mut self, id: u32) -> bool {
        let before = self.roles.len();
        self.roles.retain(|r| r.id != id);
        if self.roles.len() == before {
            return false;
        }
        let past_deleted = id.saturating_add(1);
        self.next_role_id = Some(self.next_role_id.map_or(past_deleted, |n| n.max(past_deleted)));
        true
    }

    pub fn assign_role(&mut self, employee_id: u32, role_id: u32) -> bool {
        self.employees
            .iter_mut()
            .find(|e| e.id == employee_id)
            .is_some_and(|e| e.assign(role_id))
    }

    pub fn remove_role(&mut self, employee_id: u32, role_id: u32) -> bool {
        self.employees
            .iter_mut()
            .find(|e| e.id == employee_id)
            .is_some_and(|e| e.unassign(role_id))
    }

    /// Roles held by the employee, skipping ids with no matching role
    pub fn roles_for_employee(&self, employee_id: u32) -> Vec<&Role> {
        self.employee(employee_id)
            .map(|e| e.roles.iter().filter_map(|id| self.role(*id)).collect())
            .unwrap_or_default()
    }

    pub fn employees_with_role(&self, role_id: u32) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.has_role(role_id))
            .collect()
    }

    /// Roles the employee does not hold yet, in stored order
    pub fn assignable_roles(&self, employee_id: u32) -> Vec<&Role> {
        match self.employee(employee_id) {
            Some(employee) => self
                .roles
                .iter()
                .filter(|r| !employee.has_role(r.id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// `(employee id, role id)` pairs whose role no longer exists
    pub fn dangling_role_ids(&self) -> Vec<(u32, u32)> {
        self.employees
            .iter()
            .flat_map(|e| e.roles.iter().map(move |r| (e.id, *r)))
            .filter(|(_, role_id)| self.role(*role_id).is_none())
            .collect()
    }
}
