use crate::cli::Session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `init` command: write the default configuration file.
pub fn handle(force: bool, session: &Session) -> AppResult<()> {
    info("Initializing rTimeclock…");
    Config::init_at(&session.config_path, force)?;
    info(format!("Remote API : {}", Config::default().api_base_url));
    Ok(())
}
