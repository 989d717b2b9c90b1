//! Declarative per-field form validation.
//!
//! A [`Validator`] owns one [`RuleSet`] per form id. Rules are evaluated in a
//! fixed order (required, min length, pattern) and the first violation is
//! shown on the form's [`ErrorSurface`].

pub mod form;
pub mod forms;

use regex::Regex;
use std::collections::HashMap;

pub use form::{ErrorSurface, FieldError, Form};

pub const DEFAULT_REQUIRED_MESSAGE: &str = "Field is required";
pub const DEFAULT_PATTERN_MESSAGE: &str = "Invalid format";

/// Messages keyed by sub-rule. `None` falls back to the generic default.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    pub required: Option<String>,
    pub min_length: Option<String>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub messages: Messages,
}

impl FieldRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.messages.required = Some(message.into());
        self
    }

    pub fn min_length(mut self, len: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(len);
        self.messages.min_length = Some(message.into());
        self
    }

    /// Compiles `pattern`; matching is a search, anchor it for whole-value checks.
    pub fn pattern(mut self, pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(pattern)?);
        self.messages.pattern = Some(message.into());
        Ok(self)
    }

    /// First violated sub-rule's message, or `None` when `value` passes.
    pub fn check(&self, value: &str) -> Option<String> {
        if self.required && value.trim().is_empty() {
            return Some(
                self.messages
                    .required
                    .clone()
                    .unwrap_or_else(|| DEFAULT_REQUIRED_MESSAGE.to_string()),
            );
        }

        if let Some(min) = self.min_length
            && value.chars().count() < min
        {
            return Some(
                self.messages
                    .min_length
                    .clone()
                    .unwrap_or_else(|| format!("Minimum of {min} characters")),
            );
        }

        if let Some(re) = &self.pattern
            && !re.is_match(value)
        {
            return Some(
                self.messages
                    .pattern
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PATTERN_MESSAGE.to_string()),
            );
        }

        None
    }
}

/// Field rules of one form, in evaluation order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<(String, FieldRule)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.push((name.into(), rule));
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, r)| r)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    forms: HashMap<String, RuleSet>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator preloaded with the clock-event and employee forms.
    pub fn with_default_forms() -> Result<Self, regex::Error> {
        let mut validator = Self::new();
        validator.register(forms::CLOCK_FORM, forms::clock_rules()?);
        validator.register(forms::EMPLOYEE_FORM, forms::employee_rules()?);
        Ok(validator)
    }

    /// Replaces any rule set previously registered under `form_id`.
    pub fn register(&mut self, form_id: impl Into<String>, rules: RuleSet) {
        self.forms.insert(form_id.into(), rules);
    }

    pub fn rules(&self, form_id: &str) -> Option<&RuleSet> {
        self.forms.get(form_id)
    }

    /// Validate one value and show or clear the field's error accordingly.
    /// Fields without rules (and unknown forms) are always valid and left untouched.
    pub fn validate_field<S: ErrorSurface + ?Sized>(
        &self,
        form_id: &str,
        field: &str,
        value: &str,
        surface: &mut S,
    ) -> bool {
        let Some(rule) = self.rules(form_id).and_then(|rs| rs.get(field)) else {
            return true;
        };

        match rule.check(value) {
            Some(message) => {
                surface.show_error(field, &message);
                false
            }
            None => {
                surface.clear_error(field);
                true
            }
        }
    }

    /// Validate every configured field present in `form`. Every field's
    /// error state is refreshed, not only the first failing one.
    pub fn validate_form(&self, form: &mut Form) -> bool {
        let Some(rules) = self.rules(form.id()) else {
            return true;
        };

        let form_id = form.id().to_string();
        let mut valid = true;
        for name in rules.field_names() {
            let Some(value) = form.value(name).map(str::to_string) else {
                continue;
            };
            if !self.validate_field(&form_id, name, &value, form) {
                valid = false;
            }
        }
        valid
    }

    /// Loss of focus: validate the field's current value.
    pub fn on_blur(&self, form: &mut Form, field: &str) -> bool {
        let form_id = form.id().to_string();
        let value = form.value(field).unwrap_or_default().to_string();
        self.validate_field(&form_id, field, &value, form)
    }

    /// Typing: store the new value and drop any shown error.
    pub fn on_input(&self, form: &mut Form, field: &str, value: impl Into<String>) {
        form.set(field, value);
        form.clear_error(field);
    }

    /// Submission may proceed only when this returns true.
    pub fn on_submit(&self, form: &mut Form) -> bool {
        self.validate_form(form)
    }
}
