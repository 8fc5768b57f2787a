use anyhow::{bail, Result};
use dialoguer::Confirm;
use is_terminal::IsTerminal;
use serde_json::json;

use roster::application::RoleForm;
use roster::domain::catalog::ModuleCatalog;
use roster::domain::services::offered_permissions;
use roster::presentation::cli::Grant;
use roster::presentation::ConcreteStore;
use roster::presentation::output::{
    print_json, render_role, render_role_page, role_rows, EmployeeRow, RoleRow,
};
use roster::RosterError;

use super::Context;

pub fn cmd_list(ctx: &Context, page: usize) -> Result<()> {
    let store = ctx.open_store()?;
    let mut list = ctx.config.role_list_state();
    list.go_to_nearest_page(page, store.roles());
    let rows = role_rows(list.view(store.roles()));

    if ctx.format.is_json() {
        print_json(&json!({
            "roles": rows.items,
            "page": rows.page,
            "page_size": rows.page_size,
            "total_items": rows.total_items,
            "total_pages": rows.total_pages(),
        }))?;
    } else {
        print!("{}", render_role_page(&rows));
    }
    Ok(())
}

pub fn cmd_show(ctx: &Context, id: u32) -> Result<()> {
    let store = ctx.open_store()?;
    let position = store
        .roles()
        .iter()
        .position(|r| r.id == id)
        .ok_or(RosterError::RoleNotFound { id })?;
    let row = RoleRow::new(position + 1, &store.roles()[position]);
    let holders = store.employees_with_role(id);

    if ctx.format.is_json() {
        let holders: Vec<EmployeeRow> = holders
            .iter()
            .map(|e| EmployeeRow::from_employee(e, &store))
            .collect();
        print_json(&json!({ "role": row, "holders": holders }))?;
    } else {
        print!("{}", render_role(&row, &holders));
    }
    Ok(())
}

/// Resolve a command-line module name against the catalog
fn catalog_module<'a>(catalog: &'a ModuleCatalog, grant: &Grant) -> Result<&'a str> {
    let Some(module) = catalog.find(&grant.module) else {
        let known: Vec<&str> = catalog.modules().iter().map(|m| m.name.as_str()).collect();
        bail!(
            "unknown module '{}' (known modules: {})",
            grant.module,
            known.join(", ")
        );
    };

    let offered = offered_permissions(&module.permissions);
    if let Some(p) = grant.permissions.iter().find(|p| !offered.contains(p)) {
        bail!("module '{}' does not offer the {} permission", module.name, p);
    }
    Ok(&module.name)
}

pub fn cmd_create(ctx: &Context, name: String, grants: Vec<Grant>) -> Result<()> {
    let mut store = ctx.open_store()?;
    let catalog = ctx.config.catalog();

    let mut form = RoleForm::create();
    form.set_name(name);
    for grant in &grants {
        let module = catalog_module(&catalog, grant)?;
        for permission in &grant.permissions {
            // a grant checks the box; clicking an already checked box would clear it
            let checked = form
                .selected()
                .get(module)
                .is_some_and(|set| set.contains(*permission));
            if !checked {
                form.toggle(module, *permission);
            }
        }
    }

    submit(ctx, &form, &mut store)
}

pub fn cmd_edit(
    ctx: &Context,
    id: u32,
    name: Option<String>,
    toggles: Vec<Grant>,
) -> Result<()> {
    let mut store = ctx.open_store()?;
    let catalog = ctx.config.catalog();

    let mut form = RoleForm::edit(&store, id)?;
    if let Some(name) = name {
        form.set_name(name);
    }
    for toggle in &toggles {
        let module = catalog_module(&catalog, toggle)?;
        for permission in &toggle.permissions {
            form.toggle(module, *permission);
        }
    }

    submit(ctx, &form, &mut store)
}

fn submit(ctx: &Context, form: &RoleForm, store: &mut ConcreteStore) -> Result<()> {
    match form.submit(store) {
        Ok(outcome) => ctx.notify(outcome.message(), json!({ "role": outcome.role() })),
        Err(RosterError::Validation(errors)) => ctx.reject(&errors),
        Err(err) => Err(err.into()),
    }
}

pub fn cmd_delete(ctx: &Context, id: u32, yes: bool) -> Result<()> {
    let mut store = ctx.open_store()?;
    let role = store
        .role(id)
        .ok_or(RosterError::RoleNotFound { id })?
        .clone();

    if !yes {
        if ctx.format.is_json() || !std::io::stdin().is_terminal() {
            bail!("refusing to delete role '{}' without --yes", role.name);
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete role '{}'?", role.name))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled");
            return Ok(());
        }
    }

    let holders = store.employees_with_role(id).len();
    store.delete_role(id)?;

    if holders > 0 && !ctx.format.is_json() {
        eprintln!(
            "note: {} employee(s) still reference role {}; it no longer shows in their roles",
            holders, id
        );
    }
    ctx.notify(
        "Role deleted successfully!",
        json!({ "role_id": id, "name": role.name, "still_referenced_by": holders }),
    )
}
