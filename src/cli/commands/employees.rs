use crate::cli::Session;
use crate::errors::AppResult;

/// List employees, loading them on first use.
pub async fn handle(details: bool, session: &mut Session) -> AppResult<()> {
    session.ensure_employees().await;
    print!("{}", session.controller.render_employees(details));
    Ok(())
}
