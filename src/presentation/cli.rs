//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config, --data-dir) are inherited by all subcommands
//! - Each list screen and form of the roster maps to one subcommand

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::{Permission, SortKey};

/// Roster - employee roles and per-module permissions
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ~/.config/roster/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the saved roster state
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Employees and their role assignments
    #[command(subcommand)]
    Employees(EmployeeCommand),

    /// Roles and their module permissions
    #[command(subcommand)]
    Roles(RoleCommand),

    /// Show the permission matrix
    Modules {
        /// Show the selection held by this role
        #[arg(long)]
        role: Option<u32>,

        /// Page of the module list
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Replace the saved state with the seed data
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCommand {
    /// List employees
    List {
        /// Case-insensitive name filter
        #[arg(long, default_value = "")]
        search: String,

        /// Sort column (id or name)
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Page to show (clamped to the last page)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Assign a role to an employee
    Assign {
        employee_id: u32,
        role_id: u32,
    },

    /// Take a role away from an employee
    Unassign {
        employee_id: u32,
        role_id: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum RoleCommand {
    /// List roles
    List {
        /// Page to show (clamped to the last page)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show one role and who holds it
    Show { id: u32 },

    /// Create a role
    Create {
        /// Role name (letters only, at least 3)
        #[arg(long, default_value = "")]
        name: String,

        /// Grant permissions on a module, e.g. `Reports=View,Add`
        #[arg(long = "grant", value_name = "MODULE=PERM[,PERM...]")]
        grants: Vec<Grant>,
    },

    /// Edit a role; each toggle is one checkbox click on the stored selection
    Edit {
        id: u32,

        /// New role name
        #[arg(long)]
        name: Option<String>,

        /// Click permissions on a module, e.g. `ORG=All`
        #[arg(long = "toggle", value_name = "MODULE=PERM[,PERM...]")]
        toggles: Vec<Grant>,
    },

    /// Delete a role
    Delete {
        id: u32,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// `MODULE=PERM[,PERM...]` as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub module: String,
    pub permissions: Vec<Permission>,
}

impl FromStr for Grant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (module, perms) = s
            .split_once('=')
            .ok_or_else(|| format!("expected MODULE=PERM[,PERM...], got '{}'", s))?;

        let module = module.trim();
        if module.is_empty() {
            return Err(format!("missing module name in '{}'", s));
        }

        let permissions = perms
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Permission::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if permissions.is_empty() {
            return Err(format!("no permissions given for module '{}'", module));
        }

        Ok(Self {
            module: module.to_string(),
            permissions,
        })
    }
}
