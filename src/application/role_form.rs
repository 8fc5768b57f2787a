//! Role form workflow
//!
//! Holds what the create/edit form holds between clicks and turns a
//! submission into exactly one store mutation.

use tracing::debug;

use crate::domain::catalog::ModuleCatalog;
use crate::domain::entities::{Role, RoleDraft};
use crate::domain::ports::StateRepository;
use crate::domain::services::{
    permission_matrix, permission_matrix_page, toggle_module, validate_role_form, MatrixRow, Page,
    ValidationErrors,
};
use crate::domain::value_objects::{ModuleGrants, Permission};
use crate::error::{RosterError, RosterResult};

use super::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { role_id: u32 },
}

/// What a successful submission did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Role),
    Updated(Role),
}

impl SubmitOutcome {
    pub fn role(&self) -> &Role {
        match self {
            SubmitOutcome::Created(role) | SubmitOutcome::Updated(role) => role,
        }
    }

    /// Notification shown after the save
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Created(_) => "Role created successfully!",
            SubmitOutcome::Updated(_) => "Role updated successfully!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleForm {
    mode: FormMode,
    name: String,
    selected: ModuleGrants,
}

impl RoleForm {
    /// Empty form for a new role
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            selected: ModuleGrants::new(),
        }
    }

    /// Form pre-populated from an existing role
    pub fn edit<R: StateRepository>(store: &Store<R>, role_id: u32) -> RosterResult<Self> {
        let role = store
            .role(role_id)
            .ok_or(RosterError::RoleNotFound { id: role_id })?;
        Ok(Self {
            mode: FormMode::Edit { role_id },
            name: role.name.clone(),
            selected: role.modules.clone(),
        })
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selected(&self) -> &ModuleGrants {
        &self.selected
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Checkbox click on `module`
    pub fn toggle(&mut self, module: &str, permission: Permission) {
        toggle_module(&mut self.selected, module, permission);
    }

    pub fn matrix(&self, catalog: &ModuleCatalog) -> Vec<MatrixRow> {
        permission_matrix(catalog, &self.selected)
    }

    pub fn matrix_page(
        &self,
        catalog: &ModuleCatalog,
        page: usize,
        page_size: usize,
    ) -> Page<MatrixRow> {
        permission_matrix_page(catalog, &self.selected, page, page_size)
    }

    /// Per-field errors the form would show on submit
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_role_form(&self.name, &self.selected)
    }

    /// Validate, then issue one `add_role` or `update_role`
    pub fn submit<R: StateRepository>(&self, store: &mut Store<R>) -> RosterResult<SubmitOutcome> {
        self.validate()?;

        let name = self.name.trim().to_string();
        let modules: ModuleGrants = self
            .selected
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(module, set)| (module.clone(), set.clone()))
            .collect();

        match self.mode {
            FormMode::Create => {
                let role = store.add_role(RoleDraft::new(name, modules))?;
                debug!(role_id = role.id, "role form created role");
                Ok(SubmitOutcome::Created(role))
            }
            FormMode::Edit { role_id } => {
                let status = store
                    .role(role_id)
                    .map(|role| role.status)
                    .ok_or(RosterError::RoleNotFound { id: role_id })?;
                let role = Role {
                    id: role_id,
                    name,
                    modules,
                    status,
                };
                if !store.update_role(role.clone())? {
                    return Err(RosterError::RoleNotFound { id: role_id });
                }
                debug!(role_id, "role form updated role");
                Ok(SubmitOutcome::Updated(role))
            }
        }
    }
}

impl Default for RoleForm {
    fn default() -> Self {
        Self::create()
    }
}
