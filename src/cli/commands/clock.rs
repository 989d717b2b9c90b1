use super::rejected;
use crate::cli::Session;
use crate::errors::AppResult;
use crate::utils::{date, time};
use crate::validation::Form;
use crate::validation::forms::{
    CLOCK_FORM, CONFIRM, DATE, EMPLOYEE_ID, KIND, LOCATION, NOTE, TIME,
};

pub struct ClockArgs<'a> {
    pub employee: &'a str,
    pub kind: &'a str,
    pub date: Option<&'a str>,
    pub time: Option<&'a str>,
    pub note: Option<&'a str>,
    pub location: Option<&'a str>,
    pub confirm: bool,
}

/// Record a clock event. Date and time default to now.
pub async fn handle(args: ClockArgs<'_>, session: &mut Session) -> AppResult<()> {
    session.ensure_employees().await;
    session.ensure_events().await;

    let mut form = Form::new(CLOCK_FORM)
        .with_field(EMPLOYEE_ID, args.employee)
        .with_field(KIND, args.kind)
        .with_field(DATE, args.date.map(str::to_string).unwrap_or_else(date::today_str))
        .with_field(TIME, args.time.map(str::to_string).unwrap_or_else(time::now_hhmm))
        .with_field(NOTE, args.note.unwrap_or_default())
        .with_field(LOCATION, args.location.unwrap_or_default())
        .with_field(CONFIRM, if args.confirm { "yes" } else { "" });

    let submission = session.controller.record_clock_event(&mut form).await;
    let saved = rejected(CLOCK_FORM, submission)?;

    println!(
        "#{} | employee {} | {} {} | {} | {}",
        saved.id.unwrap_or_default(),
        saved.employee_id,
        saved.date_str(),
        saved.time_str(),
        saved.kind.label(),
        saved.location.label()
    );
    Ok(())
}
