//! Rule sets of the two application forms.

use super::{FieldRule, RuleSet};

pub const CLOCK_FORM: &str = "clock-form";
pub const EMPLOYEE_FORM: &str = "employee-form";

// clock-form fields
pub const EMPLOYEE_ID: &str = "employee_id";
pub const KIND: &str = "kind";
pub const DATE: &str = "date";
pub const TIME: &str = "time";
pub const NOTE: &str = "note";
pub const LOCATION: &str = "location";
pub const CONFIRM: &str = "confirm";

// employee-form fields
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const JOB_TITLE: &str = "job_title";
pub const DEPARTMENT: &str = "department";
pub const ADMISSION_DATE: &str = "admission_date";

pub fn clock_rules() -> Result<RuleSet, regex::Error> {
    Ok(RuleSet::new()
        .field(
            EMPLOYEE_ID,
            FieldRule::new()
                .required("Employee ID is required")
                .pattern(r"^[0-9]+$", "Invalid format. Use digits only")?,
        )
        .field(KIND, FieldRule::new().required("Event kind is required"))
        .field(DATE, FieldRule::new().required("Date is required"))
        .field(TIME, FieldRule::new().required("Time is required"))
        .field(
            CONFIRM,
            FieldRule::new().required("You must confirm the information"),
        ))
}

pub fn employee_rules() -> Result<RuleSet, regex::Error> {
    Ok(RuleSet::new()
        .field(
            NAME,
            FieldRule::new()
                .required("Name is required")
                .min_length(3, "Name must have at least 3 characters"),
        )
        .field(
            EMAIL,
            FieldRule::new()
                .required("E-mail is required")
                .pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", "Invalid e-mail format")?,
        )
        .field(JOB_TITLE, FieldRule::new().required("Job title is required"))
        .field(
            DEPARTMENT,
            FieldRule::new().required("Department is required"),
        )
        .field(
            ADMISSION_DATE,
            FieldRule::new().required("Admission date is required"),
        ))
}
