//! Output Rendering
//!
//! Text views are built as strings so they can be snapshot-tested; JSON
//! views are serializable row types printed as one document on stdout.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::application::Store;
use crate::domain::entities::{Employee, Role};
use crate::domain::ports::StateRepository;
use crate::domain::services::{MatrixRow, Page, ValidationErrors};
use crate::domain::value_objects::{Permission, SortKey, SortSpec};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

/// Employee as listed, with role ids resolved to names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRow {
    pub id: u32,
    pub name: String,
    /// Names of roles that still exist
    pub roles: Vec<String>,
    /// Held role ids, including ones whose role was deleted
    pub role_ids: Vec<u32>,
}

impl EmployeeRow {
    pub fn from_employee<R: StateRepository>(employee: &Employee, store: &Store<R>) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            roles: store
                .roles_for_employee(employee.id)
                .into_iter()
                .map(|r| r.name.clone())
                .collect(),
            role_ids: employee.roles.clone(),
        }
    }
}

/// Role as listed, numbered by its position across pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleRow {
    pub number: usize,
    pub id: u32,
    pub name: String,
    pub modules: BTreeMap<String, Vec<Permission>>,
    pub status: String,
}

impl RoleRow {
    pub fn new(number: usize, role: &Role) -> Self {
        Self {
            number,
            id: role.id,
            name: role.name.clone(),
            modules: role
                .modules
                .iter()
                .filter(|(_, set)| !set.is_empty())
                .map(|(module, set)| (module.clone(), set.as_slice().to_vec()))
                .collect(),
            status: role.status.to_string(),
        }
    }
}

/// Number the rows of a role page the way the list shows them
pub fn role_rows(page: Page<&Role>) -> Page<RoleRow> {
    let first = page.first_row_number();
    let mut index = 0;
    page.map(|role| {
        let row = RoleRow::new(first + index, role);
        index += 1;
        row
    })
}

/// Print one pretty JSON document to stdout
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).map_err(io::Error::from)?;
    out.write_all(b"\n")
}

/// Left-aligned table padded by display width
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.width());
            }
        }
    }

    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{}{}", cell, " ".repeat(width - cell.width())))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&line(headers));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("  "));
    out.push('\n');
    for row in rows {
        out.push_str(&line(row));
        out.push('\n');
    }
    out
}

fn page_footer<T>(page: &Page<T>, noun: &str) -> String {
    format!(
        "Page {} of {} ({} {})\n",
        page.page,
        page.total_pages().max(1),
        page.total_items,
        noun
    )
}

fn header(label: &str, key: SortKey, sort: Option<SortSpec>) -> String {
    match sort {
        Some(spec) if spec.key == key => format!("{} {}", label, spec.direction.arrow()),
        _ => label.to_string(),
    }
}

pub fn render_employee_page(page: &Page<EmployeeRow>, sort: Option<SortSpec>) -> String {
    if page.is_empty() {
        return "No matching employees found.\n".to_string();
    }

    let headers = vec![
        header("No.", SortKey::Id, sort),
        header("Name", SortKey::Name, sort),
        "Roles".to_string(),
    ];
    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|row| {
            // held ids whose roles were all deleted leave the cell blank
            let roles = if row.role_ids.is_empty() {
                "No role assigned".to_string()
            } else {
                row.roles.join(", ")
            };
            vec![row.id.to_string(), row.name.clone(), roles]
        })
        .collect();

    let mut out = render_table(&headers, &rows);
    out.push_str(&page_footer(page, "employees"));
    out
}

fn modules_summary(modules: &BTreeMap<String, Vec<Permission>>) -> String {
    modules
        .iter()
        .map(|(module, permissions)| {
            let labels: Vec<&str> = permissions.iter().map(Permission::as_str).collect();
            format!("{}: {}", module, labels.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn render_role_page(page: &Page<RoleRow>) -> String {
    if page.total_items == 0 {
        return "No roles available.\n".to_string();
    }

    let headers: Vec<String> = ["No.", "ID", "Name", "Modules & Permissions", "Status"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|row| {
            vec![
                row.number.to_string(),
                row.id.to_string(),
                row.name.clone(),
                modules_summary(&row.modules),
                row.status.clone(),
            ]
        })
        .collect();

    let mut out = render_table(&headers, &rows);
    out.push_str(&page_footer(page, "roles"));
    out
}

/// Detail view of one role and who holds it
pub fn render_role(role: &RoleRow, holders: &[&Employee]) -> String {
    let mut out = format!("{} (id {}, {})\n", role.name, role.id, role.status);
    if role.modules.is_empty() {
        out.push_str("  no permissions\n");
    }
    for (module, permissions) in &role.modules {
        let labels: Vec<&str> = permissions.iter().map(Permission::as_str).collect();
        out.push_str(&format!("  {}: {}\n", module, labels.join(", ")));
    }
    if holders.is_empty() {
        out.push_str("Assigned to nobody\n");
    } else {
        let names: Vec<&str> = holders.iter().map(|e| e.name.as_str()).collect();
        out.push_str(&format!("Assigned to: {}\n", names.join(", ")));
    }
    out
}

/// Checkbox grid: `[x]` checked, `[ ]` open, `[-]` locked by `All`, blank when not offered
pub fn render_matrix(page: &Page<MatrixRow>) -> String {
    let columns: Vec<Permission> = std::iter::once(Permission::All)
        .chain(Permission::CONCRETE)
        .collect();

    let mut headers = vec!["Module".to_string()];
    headers.extend(columns.iter().map(|p| p.to_string()));

    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|row| {
            let mut cells = vec![row.module.clone()];
            cells.extend(columns.iter().map(|p| match row.cell(*p) {
                Some(cell) if cell.checked => "[x]".to_string(),
                Some(cell) if cell.disabled => "[-]".to_string(),
                Some(_) => "[ ]".to_string(),
                None => String::new(),
            }));
            cells
        })
        .collect();

    let mut out = render_table(&headers, &rows);
    out.push_str(&page_footer(page, "modules"));
    out
}

/// One line per rejected field
pub fn render_validation_errors(errors: &ValidationErrors) -> String {
    let mut out = String::new();
    if let Some(err) = errors.name {
        out.push_str(&format!("  name: {}\n", err));
    }
    if let Some(err) = errors.permissions {
        out.push_str(&format!("  permissions: {}\n", err));
    }
    out
}
