use super::rejected;
use crate::cli::Session;
use crate::errors::AppResult;
use crate::validation::Form;
use crate::validation::forms::{
    ADMISSION_DATE, DEPARTMENT, EMAIL, EMPLOYEE_FORM, JOB_TITLE, NAME,
};

/// Register a new employee from the command-line fields.
pub async fn handle(
    name: &str,
    email: &str,
    job_title: &str,
    department: &str,
    admission: &str,
    session: &mut Session,
) -> AppResult<()> {
    // keep a fetched list around so the new employee is appended to it
    session.ensure_employees().await;

    let mut form = Form::new(EMPLOYEE_FORM)
        .with_field(NAME, name)
        .with_field(EMAIL, email)
        .with_field(JOB_TITLE, job_title)
        .with_field(DEPARTMENT, department)
        .with_field(ADMISSION_DATE, admission);

    let submission = session.controller.register_employee(&mut form).await;
    let saved = rejected(EMPLOYEE_FORM, submission)?;

    println!(
        "{} - {} ({})",
        saved.id.unwrap_or_default(),
        saved.name,
        saved.job_title
    );
    Ok(())
}
