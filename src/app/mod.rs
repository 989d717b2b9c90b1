//! Application controller: owns the in-memory collections and turns form
//! submissions into gateway calls.

use log::info;

use crate::gateway::{Gateway, HttpTransport, Transport};
use crate::models::{ClockEvent, Employee, EventKind, Location};
use crate::ui::notice::Notices;
use crate::utils::{date, time};
use crate::validation::forms::{
    ADMISSION_DATE, DATE, DEPARTMENT, EMAIL, EMPLOYEE_ID, JOB_TITLE, KIND, LOCATION, NAME, NOTE,
    TIME,
};
use crate::validation::{ErrorSurface, Form, Validator};
use crate::view;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

/// Outcome of a form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<R> {
    Saved(R),
    /// `(field, message)` pairs; nothing was sent and no collection changed.
    Rejected(Vec<(String, String)>),
}

impl<R> Submission<R> {
    pub fn is_saved(&self) -> bool {
        matches!(self, Submission::Saved(_))
    }
}

pub struct Controller<T: Transport = HttpTransport> {
    gateway: Gateway<T>,
    validator: Validator,
    notices: Notices,
    employees: Vec<Employee>,
    events: Vec<ClockEvent>,
}

fn field(form: &Form, name: &str) -> String {
    form.value(name).unwrap_or_default().trim().to_string()
}

/// Optional sign followed by the leading ASCII digits of `term`.
fn leading_id(term: &str) -> Option<i64> {
    let unsigned = term.strip_prefix(['+', '-']).unwrap_or(term);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let sign_len = term.len() - unsigned.len();
    term[..sign_len + digits].parse().ok()
}

impl<T: Transport> Controller<T> {
    pub fn new(gateway: Gateway<T>, validator: Validator, notices: Notices) -> Self {
        Self {
            gateway,
            validator,
            notices,
            employees: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn events(&self) -> &[ClockEvent] {
        &self.events
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut Notices {
        &mut self.notices
    }

    pub fn gateway(&self) -> &Gateway<T> {
        &self.gateway
    }

    /// Fetch both collections, employees first.
    pub async fn load(&mut self) {
        self.notices.set_loading(true);
        self.load_employees().await;
        self.load_events().await;
        self.notices.set_loading(false);
    }

    pub async fn load_employees(&mut self) {
        self.employees = self.gateway.fetch_employees().await;
        info!("{} employees loaded", self.employees.len());
    }

    pub async fn load_events(&mut self) {
        self.events = self.gateway.fetch_clock_events().await;
        info!("{} clock events loaded", self.events.len());
    }

    /// Submit the employee form. The new employee is appended on success.
    pub async fn register_employee(&mut self, form: &mut Form) -> Submission<Employee> {
        if !self.validator.on_submit(form) {
            return Submission::Rejected(form.errors());
        }

        let Some(admission) = date::parse_date(&field(form, ADMISSION_DATE)) else {
            form.show_error(ADMISSION_DATE, "Invalid date. Use YYYY-MM-DD");
            return Submission::Rejected(form.errors());
        };

        let employee = Employee::new(
            None,
            field(form, NAME),
            field(form, EMAIL),
            field(form, JOB_TITLE),
            field(form, DEPARTMENT),
            admission,
        );

        let saved = self.gateway.create_employee(employee).await;
        self.employees.push(saved.clone());
        form.reset();
        self.notices.show_success("Employee registered successfully!");
        Submission::Saved(saved)
    }

    /// Submit the clock form. The referenced employee must be loaded; the
    /// new event is appended on success.
    pub async fn record_clock_event(&mut self, form: &mut Form) -> Submission<ClockEvent> {
        if !self.validator.on_submit(form) {
            return Submission::Rejected(form.errors());
        }

        let employee_id = field(form, EMPLOYEE_ID)
            .parse::<i64>()
            .ok()
            .filter(|id| self.employees.iter().any(|e| e.id == Some(*id)));
        let kind = EventKind::from_input(&field(form, KIND));
        let day = date::parse_date(&field(form, DATE));
        let at = time::parse_time(&field(form, TIME));
        let location_raw = field(form, LOCATION);
        let location = if location_raw.is_empty() {
            Some(Location::default())
        } else {
            Location::from_input(&location_raw)
        };

        let (Some(employee_id), Some(kind), Some(day), Some(at), Some(location)) =
            (employee_id, kind, day, at, location)
        else {
            if employee_id.is_none() {
                form.show_error(EMPLOYEE_ID, EMPLOYEE_NOT_FOUND);
            }
            if kind.is_none() {
                form.show_error(KIND, "Unknown event kind");
            }
            if day.is_none() {
                form.show_error(DATE, "Invalid date. Use YYYY-MM-DD");
            }
            if at.is_none() {
                form.show_error(TIME, "Invalid time. Use HH:MM");
            }
            if location.is_none() {
                form.show_error(LOCATION, "Unknown location mode");
            }
            return Submission::Rejected(form.errors());
        };

        let note = Some(field(form, NOTE));
        let event = ClockEvent::new(None, employee_id, kind, day, at, note, location);

        let saved = self.gateway.create_clock_event(event).await;
        self.events.push(saved.clone());
        form.reset();
        self.notices.show_success("Clock event recorded successfully!");
        Submission::Saved(saved)
    }

    /// Events of the employee whose id leads `term` (`"3abc"` is employee 3).
    /// A blank term keeps every event; one without leading digits matches nothing.
    pub fn filter_events(&self, term: &str) -> Vec<&ClockEvent> {
        let term = term.trim();
        if term.is_empty() {
            return self.events.iter().collect();
        }

        match leading_id(term) {
            Some(id) => self.events.iter().filter(|e| e.employee_id == id).collect(),
            None => Vec::new(),
        }
    }

    pub fn render_employees(&self, details: bool) -> String {
        if details {
            view::render_employee_details(&self.employees, date::today())
        } else {
            view::render_employee_list(&self.employees)
        }
    }

    pub fn render_events(&self, term: Option<&str>) -> String {
        let events = self.filter_events(term.unwrap_or_default());
        view::render_clock_events(events, &self.employees)
    }
}
