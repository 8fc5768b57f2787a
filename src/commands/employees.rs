use std::time::Instant;

use anyhow::Result;
use serde_json::json;

use roster::domain::value_objects::{SortDirection, SortKey};
use roster::presentation::output::{print_json, render_employee_page, EmployeeRow};
use roster::RosterError;

use super::Context;

pub fn cmd_list(
    ctx: &Context,
    search: String,
    sort: Option<SortKey>,
    desc: bool,
    page: usize,
) -> Result<()> {
    let store = ctx.open_store()?;
    let mut list = ctx.config.employee_list_state();

    // one-shot invocation: the term is final, nothing to wait for
    list.type_search(search, Instant::now());
    list.submit_search();
    if let Some(key) = sort {
        let spec = list.sort_by(key);
        if desc && spec.direction == SortDirection::Asc {
            list.sort_by(key);
        }
    }
    list.go_to_nearest_page(page, store.employees());

    let rows = list
        .view(store.employees())
        .map(|employee| EmployeeRow::from_employee(employee, &store));

    if ctx.format.is_json() {
        print_json(&json!({
            "employees": rows.items,
            "page": rows.page,
            "page_size": rows.page_size,
            "total_items": rows.total_items,
            "total_pages": rows.total_pages(),
            "search": list.search(),
            "sort": list.sort(),
        }))?;
    } else {
        print!("{}", render_employee_page(&rows, list.sort()));
    }
    Ok(())
}

pub fn cmd_assign(ctx: &Context, employee_id: u32, role_id: u32) -> Result<()> {
    let mut store = ctx.open_store()?;

    let employee = store
        .employee(employee_id)
        .ok_or(RosterError::EmployeeNotFound { id: employee_id })?
        .name
        .clone();
    let role = store
        .role(role_id)
        .ok_or(RosterError::RoleNotFound { id: role_id })?
        .name
        .clone();

    let changed = store.assign_role(employee_id, role_id)?;
    let message = if changed {
        format!("Assigned {} to {}", role, employee)
    } else {
        format!("{} already has {}", employee, role)
    };

    ctx.notify(
        &message,
        json!({
            "employee_id": employee_id,
            "role_id": role_id,
            "changed": changed,
        }),
    )
}

/// Role ids need not resolve, so stale references can be cleared
pub fn cmd_unassign(ctx: &Context, employee_id: u32, role_id: u32) -> Result<()> {
    let mut store = ctx.open_store()?;

    let employee = store
        .employee(employee_id)
        .ok_or(RosterError::EmployeeNotFound { id: employee_id })?
        .name
        .clone();
    let role = store
        .role(role_id)
        .map(|r| r.name.clone())
        .unwrap_or_else(|| format!("role {}", role_id));

    let changed = store.remove_role(employee_id, role_id)?;
    let message = if changed {
        format!("Removed {} from {}", role, employee)
    } else {
        format!("{} does not have {}", employee, role)
    };

    ctx.notify(
        &message,
        json!({
            "employee_id": employee_id,
            "role_id": role_id,
            "changed": changed,
        }),
    )
}
