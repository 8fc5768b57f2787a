//! Roster Store
//!
//! The authoritative employee/role state. Every mutation that changes
//! something is written through the repository before the call returns;
//! calls that change nothing do not write.

use tracing::{debug, info, warn};

use crate::domain::entities::{Employee, Role, RoleDraft, RosterState};
use crate::domain::ports::StateRepository;
use crate::domain::value_objects::IdPolicy;
use crate::error::RosterResult;


/// State container owned by the application root and passed explicitly
pub struct Store<R>
where
    R: StateRepository,
{
    repo: R,
    state: RosterState,
    id_policy: IdPolicy,
}

impl<R> Store<R>
where
    R: StateRepository,
{
    /// Restore the last saved state, or seed and save it when nothing was saved
    pub fn open(repo: R, id_policy: IdPolicy) -> RosterResult<Self> {
        let state = match repo.load()? {
            Some(state) => {
                debug!(
                    employees = state.employees.len(),
                    roles = state.roles.len(),
                    "restored roster state"
                );
                state
            }
            None => {
                let seed = RosterState::seed();
                repo.save(&seed)?;
                info!("no saved roster state, initialized seed data");
                seed
            }
        };

        let dangling = state.dangling_role_ids();
        if !dangling.is_empty() {
            warn!(count = dangling.len(), "employees reference roles that no longer exist");
        }

        Ok(Self {
            repo,
            state,
            id_policy,
        })
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn employees(&self) -> &[Employee] {
        &self.state.employees
    }

    pub fn roles(&self) -> &[Role] {
        &self.state.roles
    }

    pub fn employee(&self, id: u32) -> Option<&Employee> {
        self.state.employee(id)
    }

    /// Lookup used to pre-populate the edit form
    pub fn role(&self, id: u32) -> Option<&Role> {
        self.state.role(id)
    }

    pub fn roles_for_employee(&self, employee_id: u32) -> Vec<&Role> {
        self.state.roles_for_employee(employee_id)
    }

    pub fn employees_with_role(&self, role_id: u32) -> Vec<&Employee> {
        self.state.employees_with_role(role_id)
    }

    pub fn assignable_roles(&self, employee_id: u32) -> Vec<&Role> {
        self.state.assignable_roles(employee_id)
    }

    pub fn dangling_role_ids(&self) -> Vec<(u32, u32)> {
        self.state.dangling_role_ids()
    }

    /// Append a new active role; the id comes from the configured policy
    pub fn add_role(&mut self, draft: RoleDraft) -> RosterResult<Role> {
        let before = self.state.clone();
        let role = self.state.add_role(draft, self.id_policy);
        if self.state.roles.iter().filter(|r| r.id == role.id).count() > 1 {
            warn!(
                role_id = role.id,
                policy = %self.id_policy,
                "new role id duplicates an existing role"
            );
        }
        debug!(role_id = role.id, name = %role.name, "added role");
        self.commit(before)?;
        Ok(role)
    }

    /// Replace the role with the same id; unknown ids are ignored
    pub fn update_role(&mut self, role: Role) -> RosterResult<bool> {
        let id = role.id;
        let before = self.state.clone();
        if !self.state.update_role(role) {
            warn!(role_id = id, "update ignored, no such role");
            return Ok(false);
        }
        debug!(role_id = id, "updated role");
        self.commit(before)?;
        Ok(true)
    }

    /// Remove the role; employees holding it keep the dangling id
    pub fn delete_role(&mut self, id: u32) -> RosterResult<bool> {
        let before = self.state.clone();
        if !self.state.delete_role(id) {
            warn!(role_id = id, "delete ignored, no such role");
            return Ok(false);
        }
        let holders = self.state.employees_with_role(id).len();
        if holders > 0 {
            warn!(role_id = id, holders, "deleted role is still referenced by employees");
        }
        debug!(role_id = id, "deleted role");
        self.commit(before)?;
        Ok(true)
    }

    /// Give the employee a role id; repeated calls have no further effect
    pub fn assign_role(&mut self, employee_id: u32, role_id: u32) -> RosterResult<bool> {
        let before = self.state.clone();
        if !self.state.assign_role(employee_id, role_id) {
            debug!(employee_id, role_id, "assign ignored");
            return Ok(false);
        }
        debug!(employee_id, role_id, "assigned role");
        self.commit(before)?;
        Ok(true)
    }

    pub fn remove_role(&mut self, employee_id: u32, role_id: u32) -> RosterResult<bool> {
        let before = self.state.clone();
        if !self.state.remove_role(employee_id, role_id) {
            debug!(employee_id, role_id, "remove ignored");
            return Ok(false);
        }
        debug!(employee_id, role_id, "removed role");
        self.commit(before)?;
        Ok(true)
    }

    /// Replace everything with seed data and save it
    pub fn reset(&mut self) -> RosterResult<()> {
        let before = std::mem::replace(&mut self.state, RosterState::seed());
        info!("roster state reset to seed data");
        self.commit(before)
    }

    /// Save the changed state; on failure put `before` back so memory
    /// keeps matching the last successful write
    fn commit(&mut self, before: RosterState) -> RosterResult<()> {
        if let Err(err) = self.persist() {
            warn!(error = %err, "save failed, change rolled back");
            self.state = before;
            return Err(err);
        }
        Ok(())
    }

    fn persist(&self) -> RosterResult<()> {
        self.repo.save(&self.state)?;
        info!(
            employees = self.state.employees.len(),
            roles = self.state.roles.len(),
            "persisted roster state"
        );
        Ok(())
    }
}
