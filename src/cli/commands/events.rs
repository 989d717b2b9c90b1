use crate::cli::Session;
use crate::errors::AppResult;

/// Clock-event table, optionally filtered by employee id.
pub async fn handle(employee: Option<&str>, session: &mut Session) -> AppResult<()> {
    session.ensure_employees().await;
    session.ensure_events().await;
    print!("{}", session.controller.render_events(employee));
    Ok(())
}
