//! Locally generated stand-in records.
//!
//! Shapes are fixed (cardinalities, field ranges); the values themselves are
//! drawn at random.

use chrono::{Days, NaiveDate, NaiveTime};
use rand::Rng;

use crate::models::wire::{PlaceholderPost, PlaceholderUser};
use crate::models::{ClockEvent, Employee, EventKind, Location};

pub const SYNTHETIC_EMPLOYEES: usize = 10;
pub const SYNTHETIC_EVENTS: usize = 40;
/// Placeholder posts beyond this count are ignored.
pub const PLACEHOLDER_EVENT_LIMIT: usize = 20;
pub const NOTE_MAX_CHARS: usize = 50;

pub const JOB_TITLES: [&str; 8] = [
    "Analyst",
    "Developer",
    "Designer",
    "Manager",
    "Coordinator",
    "Assistant",
    "Intern",
    "Director",
];

pub const DEPARTMENTS: [&str; 8] = [
    "IT",
    "HR",
    "Finance",
    "Marketing",
    "Sales",
    "Operations",
    "Administration",
    "Legal",
];

const ADMISSION_WINDOW_DAYS: u64 = 5 * 365;
const EVENT_WINDOW_DAYS: u64 = 30;

pub fn random_job_title<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    JOB_TITLES[rng.random_range(0..JOB_TITLES.len())]
}

pub fn random_department<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    DEPARTMENTS[rng.random_range(0..DEPARTMENTS.len())]
}

/// Somewhere in the last five years, `today` included.
pub fn random_admission_date<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    days_before(today, rng.random_range(0..=ADMISSION_WINDOW_DAYS))
}

/// Somewhere in the last 30 days, `today` included.
pub fn random_event_date<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    days_before(today, rng.random_range(0..EVENT_WINDOW_DAYS))
}

/// Between 08:00 and 16:59.
pub fn random_time_of_day<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    NaiveTime::from_hms_opt(rng.random_range(8..17), rng.random_range(0..60), 0)
        .unwrap_or_default()
}

pub fn random_event_kind<R: Rng + ?Sized>(rng: &mut R) -> EventKind {
    EventKind::ALL[rng.random_range(0..EventKind::ALL.len())]
}

pub fn random_location<R: Rng + ?Sized>(rng: &mut R) -> Location {
    if rng.random_bool(0.5) {
        Location::OnSite
    } else {
        Location::Remote
    }
}

fn days_before(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}

/// Placeholder users carry no job data: title, department and admission are invented.
pub fn employee_from_placeholder<R: Rng + ?Sized>(
    rng: &mut R,
    user: PlaceholderUser,
    today: NaiveDate,
) -> Employee {
    Employee::new(
        Some(user.id),
        user.name,
        user.email,
        random_job_title(rng),
        random_department(rng),
        random_admission_date(rng, today),
    )
}

/// Placeholder posts become events: the body's head is the note, everything else is invented.
pub fn clock_event_from_placeholder<R: Rng + ?Sized>(
    rng: &mut R,
    post: PlaceholderPost,
    today: NaiveDate,
) -> ClockEvent {
    let employee_id = post
        .user_id
        .unwrap_or_else(|| rng.random_range(1..=SYNTHETIC_EMPLOYEES as i64));
    let note: String = post.body.chars().take(NOTE_MAX_CHARS).collect();

    ClockEvent::new(
        Some(post.id),
        employee_id,
        random_event_kind(rng),
        random_event_date(rng, today),
        random_time_of_day(rng),
        Some(note),
        random_location(rng),
    )
}

/// The dataset served whenever the remote API cannot be used.
#[derive(Debug, Clone)]
pub struct SyntheticData {
    employees: Vec<Employee>,
    events: Vec<ClockEvent>,
}

impl SyntheticData {
    pub fn generate(today: NaiveDate) -> Self {
        let mut rng = rand::rng();

        let employees = (1..=SYNTHETIC_EMPLOYEES as i64)
            .map(|i| {
                Employee::new(
                    Some(i),
                    format!("Employee {i}"),
                    format!("employee{i}@company.com"),
                    random_job_title(&mut rng),
                    random_department(&mut rng),
                    random_admission_date(&mut rng, today),
                )
            })
            .collect();

        let events = (1..=SYNTHETIC_EVENTS as i64)
            .map(|i| {
                let kind = random_event_kind(&mut rng);
                ClockEvent::new(
                    Some(i),
                    rng.random_range(1..=SYNTHETIC_EMPLOYEES as i64),
                    kind,
                    random_event_date(&mut rng, today),
                    random_time_of_day(&mut rng),
                    Some(format!("Record {i} - {}", kind.to_wire_str())),
                    random_location(&mut rng),
                )
            })
            .collect();

        Self { employees, events }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn events(&self) -> &[ClockEvent] {
        &self.events
    }
}
