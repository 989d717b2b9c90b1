use crate::cli::Session;
use crate::config::migrate;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(print_config: bool, check: bool, run_migrate: bool, session: &Session) -> AppResult<()> {
    let path = &session.config_path;

    // ---- PRINT CONFIG ----
    if print_config || !(check || run_migrate) {
        info(format!("Current configuration ({}):", path.display()));
        print!("{}", serde_yaml::to_string(&session.cfg)?);
    }

    // ---- CHECK ----
    if check {
        let missing = migrate::missing_keys(path)?;
        if missing.is_empty() {
            success("Configuration file is complete");
        } else {
            warning(format!("Missing keys: {}", missing.join(", ")));
        }
    }

    // ---- MIGRATE ----
    if run_migrate {
        let added = migrate::fill_missing_keys(path)?;
        if added.is_empty() {
            success("Configuration already up to date");
        } else {
            success(format!("Added keys: {}", added.join(", ")));
        }
    }

    Ok(())
}
