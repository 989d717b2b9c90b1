use super::wire::EmployeeWire;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    pub id: Option<i64>, // None until the gateway assigns one
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub department: String,
    pub admission_date: NaiveDate,
    pub registered_at: DateTime<Utc>, // set once, at construction
}

impl Employee {
    pub fn new(
        id: Option<i64>,
        name: impl Into<String>,
        email: impl Into<String>,
        job_title: impl Into<String>,
        department: impl Into<String>,
        admission_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            job_title: job_title.into(),
            department: department.into(),
            admission_date,
            registered_at: Utc::now(),
        }
    }

    /// Same record, identified. Registration timestamp is untouched.
    pub fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn to_wire(&self) -> EmployeeWire {
        EmployeeWire {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            job_title: self.job_title.clone(),
            department: self.department.clone(),
            admission_date: self.admission_date,
            registered_at: Some(self.registered_at),
        }
    }

    pub fn from_wire(wire: EmployeeWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            email: wire.email,
            job_title: wire.job_title,
            department: wire.department,
            admission_date: wire.admission_date,
            registered_at: wire.registered_at.unwrap_or_else(Utc::now),
        }
    }

    pub fn is_manager(&self) -> bool {
        let title = self.job_title.to_lowercase();
        ["manager", "head", "director"]
            .iter()
            .any(|needle| title.contains(needle))
    }

    /// Months since admission, counted on calendar fields only (day of month ignored).
    pub fn tenure_months(&self, today: NaiveDate) -> i32 {
        let years = today.year() - self.admission_date.year();
        let months = today.month() as i32 - self.admission_date.month() as i32;
        years * 12 + months
    }

    pub fn admission_str(&self) -> String {
        self.admission_date.format("%Y-%m-%d").to_string()
    }
}
