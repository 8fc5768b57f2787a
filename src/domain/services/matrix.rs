//! Role permission matrix and checkbox reducer
//!
//! The matrix is what the role form renders: one row per catalog module, one
//! checkbox per permission with `All` always offered first. The reducer is the
//! only way a selection changes, which keeps every module's set either
//! `[All]` or concrete permissions only.

use serde::Serialize;

use crate::domain::catalog::ModuleCatalog;
use crate::domain::value_objects::{ModuleGrants, Permission, PermissionSet};

use super::listing::{paginate, Page};

/// One checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionCell {
    pub permission: Permission,
    pub checked: bool,
    pub disabled: bool,
}

/// One module row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub module: String,
    pub cells: Vec<PermissionCell>,
}

impl MatrixRow {
    pub fn cell(&self, permission: Permission) -> Option<&PermissionCell> {
        self.cells.iter().find(|c| c.permission == permission)
    }
}

/// Permissions offered for a module: `All` first unless the catalog already lists it
pub fn offered_permissions(defined: &[Permission]) -> Vec<Permission> {
    if defined.contains(&Permission::All) {
        defined.to_vec()
    } else {
        std::iter::once(Permission::All)
            .chain(defined.iter().copied())
            .collect()
    }
}

/// Build the matrix rows for every catalog module
pub fn permission_matrix(catalog: &ModuleCatalog, selected: &ModuleGrants) -> Vec<MatrixRow> {
    catalog
        .modules()
        .iter()
        .map(|module| {
            let current = selected.get(&module.name);
            let all_selected = current.is_some_and(PermissionSet::is_all);
            let cells = offered_permissions(&module.permissions)
                .into_iter()
                .map(|permission| PermissionCell {
                    permission,
                    checked: current.is_some_and(|set| set.contains(permission)),
                    disabled: all_selected && permission.is_concrete(),
                })
                .collect();
            MatrixRow {
                module: module.name.clone(),
                cells,
            }
        })
        .collect()
}

/// The matrix, five modules per page like the form shows it
pub fn permission_matrix_page(
    catalog: &ModuleCatalog,
    selected: &ModuleGrants,
    page: usize,
    page_size: usize,
) -> Page<MatrixRow> {
    paginate(&permission_matrix(catalog, selected), page, page_size)
}

/// Next selection for a module after a checkbox click.
///
/// - `All` toggles between `[All]` and `[]`
/// - a concrete permission is ignored while `All` is selected
/// - otherwise the permission's membership flips
pub fn toggle_permission(current: &PermissionSet, clicked: Permission) -> PermissionSet {
    if clicked == Permission::All {
        return if current.is_all() {
            PermissionSet::new()
        } else {
            PermissionSet::all()
        };
    }

    if current.is_all() {
        return current.clone();
    }

    let mut next = current.clone();
    if !next.remove(clicked) {
        next.insert(clicked);
    }
    next
}

/// Apply a click to `module` in a whole selection map.
///
/// The module entry is kept even when it becomes empty, matching what the
/// form holds between clicks.
pub fn toggle_module(selected: &mut ModuleGrants, module: &str, clicked: Permission) {
    let current = selected.get(module).cloned().unwrap_or_default();
    let next = toggle_permission(&current, clicked);
    selected.insert(module.to_string(), next);
}
