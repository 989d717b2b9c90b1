pub mod add_employee;
pub mod clock;
pub mod config;
pub mod employees;
pub mod events;
pub mod init;
pub mod shell;

use crate::app::Submission;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::field_error;

/// Print the messages of a rejected form and turn them into an error.
pub(crate) fn rejected<R>(form_id: &str, submission: Submission<R>) -> AppResult<R> {
    match submission {
        Submission::Saved(record) => Ok(record),
        Submission::Rejected(errors) => {
            for (field, message) in &errors {
                field_error(field, message);
            }
            Err(AppError::Rejected {
                form: form_id.to_string(),
                count: errors.len(),
            })
        }
    }
}
