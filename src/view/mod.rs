//! Text rendering of the in-memory collections.

use chrono::NaiveDate;
use std::cmp::Reverse;

use crate::models::{ClockEvent, Employee};
use crate::utils::table::Table;

pub const NO_EMPLOYEES: &str = "No employees registered";
pub const NO_RECORDS: &str = "No records found";
pub const UNKNOWN_EMPLOYEE: &str = "Unknown";

fn id_label(id: Option<i64>) -> String {
    id.map(|i| i.to_string()).unwrap_or_else(|| "-".to_string())
}

/// One line per employee: `{id} - {name} ({job_title})`.
pub fn render_employee_list(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return format!("{NO_EMPLOYEES}\n");
    }

    employees
        .iter()
        .map(|e| format!("{} - {} ({})\n", id_label(e.id), e.name, e.job_title))
        .collect()
}

pub fn render_employee_details(employees: &[Employee], today: NaiveDate) -> String {
    if employees.is_empty() {
        return format!("{NO_EMPLOYEES}\n");
    }

    let mut table = Table::new([
        "ID",
        "Name",
        "E-mail",
        "Job title",
        "Department",
        "Admission",
        "Months",
        "Manager",
    ]);
    for e in employees {
        table.add_row(vec![
            id_label(e.id),
            e.name.clone(),
            e.email.clone(),
            e.job_title.clone(),
            e.department.clone(),
            e.admission_str(),
            e.tenure_months(today).to_string(),
            if e.is_manager() { "yes" } else { "" }.to_string(),
        ]);
    }
    table.render()
}

/// Most recent first, ordered by (date, time) only.
pub fn sort_clock_events<'a>(events: impl IntoIterator<Item = &'a ClockEvent>) -> Vec<&'a ClockEvent> {
    let mut sorted: Vec<&ClockEvent> = events.into_iter().collect();
    sorted.sort_by_key(|e| Reverse(e.moment()));
    sorted
}

/// Name for `employee_id`, or `Unknown` when nobody has that id.
pub fn employee_name(employees: &[Employee], employee_id: i64) -> &str {
    employees
        .iter()
        .find(|e| e.id == Some(employee_id))
        .map(|e| e.name.as_str())
        .unwrap_or(UNKNOWN_EMPLOYEE)
}

pub fn render_clock_events<'a>(
    events: impl IntoIterator<Item = &'a ClockEvent>,
    employees: &[Employee],
) -> String {
    let sorted = sort_clock_events(events);
    if sorted.is_empty() {
        return format!("{NO_RECORDS}\n");
    }

    let mut table = Table::new(["Employee ID", "Name", "Date", "Time", "Kind", "Location"]);
    for ev in sorted {
        table.add_row(vec![
            ev.employee_id.to_string(),
            employee_name(employees, ev.employee_id).to_string(),
            ev.date_str(),
            ev.time_str(),
            ev.kind.label().to_string(),
            ev.location.label().to_string(),
        ]);
    }
    table.render()
}
