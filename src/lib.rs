//! rTimeclock library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! gateway, validation and controller modules.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;
pub mod validation;
pub mod view;

use clap::Parser;
use cli::Session;
use cli::commands::clock::ClockArgs;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub async fn dispatch(command: &Commands, session: &mut Session) -> AppResult<()> {
    match command {
        Commands::Init { force } => cli::commands::init::handle(*force, session),
        Commands::Config {
            print_config,
            check,
            migrate,
        } => cli::commands::config::handle(*print_config, *check, *migrate, session),
        Commands::Employees { details } => cli::commands::employees::handle(*details, session).await,
        Commands::Events { employee } => {
            cli::commands::events::handle(employee.as_deref(), session).await
        }
        Commands::AddEmployee {
            name,
            email,
            job_title,
            department,
            admission,
        } => {
            cli::commands::add_employee::handle(
                name, email, job_title, department, admission, session,
            )
            .await
        }
        Commands::Clock {
            employee,
            kind,
            date,
            time,
            note,
            location,
            confirm,
        } => {
            let args = ClockArgs {
                employee,
                kind,
                date: date.as_deref(),
                time: time.as_deref(),
                note: note.as_deref(),
                location: location.as_deref(),
                confirm: *confirm,
            };
            cli::commands::clock::handle(args, session).await
        }
        Commands::Shell => Err(AppError::Command(
            "the shell cannot be started from here".to_string(),
        )),
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, then apply command-line overrides
    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load_from(&config_path)?;
    if let Some(api) = &cli.api {
        cfg.api_base_url = api.clone();
    }

    // 3️⃣ logging, kept alive until the end of the run
    let _logger = logging::init(&cfg.log_level)?;

    // 4️⃣ hand everything to the dispatcher (or the interactive shell)
    let mut session = Session::new(cfg, config_path)?;
    match &cli.command {
        Commands::Shell => cli::commands::shell::handle(&mut session).await,
        command => dispatch(command, &mut session).await,
    }
}
