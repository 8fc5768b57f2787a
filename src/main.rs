//! Roster CLI - employee roles and per-module permissions
//!
//! Usage: roster <COMMAND>
//!
//! Commands:
//!   employees  List employees, assign and remove roles
//!   roles      List, show, create, edit and delete roles
//!   modules    Show the permission matrix
//!   reset      Replace saved state with seed data

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use roster::config::Config;
use roster::logging::init_logging;
use roster::presentation::cli::{Cli, Commands, EmployeeCommand, RoleCommand};

use commands::{Context, FormRejected};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is::<FormRejected>() => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (mut config, _warnings) = Config::load_or_default(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }
    let ctx = Context::new(config, cli.json);

    match cli.command {
        Commands::Employees(command) => match command {
            EmployeeCommand::List {
                search,
                sort,
                desc,
                page,
            } => commands::employees::cmd_list(&ctx, search, sort, desc, page),
            EmployeeCommand::Assign {
                employee_id,
                role_id,
            } => commands::employees::cmd_assign(&ctx, employee_id, role_id),
            EmployeeCommand::Unassign {
                employee_id,
                role_id,
            } => commands::employees::cmd_unassign(&ctx, employee_id, role_id),
        },
        Commands::Roles(command) => match command {
            RoleCommand::List { page } => commands::roles::cmd_list(&ctx, page),
            RoleCommand::Show { id } => commands::roles::cmd_show(&ctx, id),
            RoleCommand::Create { name, grants } => commands::roles::cmd_create(&ctx, name, grants),
            RoleCommand::Edit { id, name, toggles } => {
                commands::roles::cmd_edit(&ctx, id, name, toggles)
            }
            RoleCommand::Delete { id, yes } => commands::roles::cmd_delete(&ctx, id, yes),
        },
        Commands::Modules { role, page } => commands::modules::cmd_modules(&ctx, role, page),
        Commands::Reset { yes } => commands::reset::cmd_reset(&ctx, yes),
    }
}
