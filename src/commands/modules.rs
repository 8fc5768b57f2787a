use anyhow::Result;
use serde_json::json;

use roster::application::RoleForm;
use roster::domain::services::permission_matrix_page;
use roster::domain::value_objects::ModuleGrants;
use roster::presentation::output::{print_json, render_matrix};

use super::Context;

/// Render the permission matrix, empty or with a role's selection
pub fn cmd_modules(ctx: &Context, role: Option<u32>, page: usize) -> Result<()> {
    let catalog = ctx.config.catalog();

    let (role_name, selected) = match role {
        Some(id) => {
            let store = ctx.open_store()?;
            let form = RoleForm::edit(&store, id)?;
            (Some(form.name().to_string()), form.selected().clone())
        }
        None => (None, ModuleGrants::new()),
    };

    let page = ctx.clamp(page, catalog.len());
    let matrix = permission_matrix_page(&catalog, &selected, page, ctx.page_size());

    if ctx.format.is_json() {
        print_json(&json!({
            "role": role_name,
            "modules": matrix.items,
            "page": matrix.page,
            "page_size": matrix.page_size,
            "total_items": matrix.total_items,
            "total_pages": matrix.total_pages(),
        }))?;
    } else {
        if let Some(name) = &role_name {
            println!("Role: {}", name);
        }
        print!("{}", render_matrix(&matrix));
    }
    Ok(())
}
