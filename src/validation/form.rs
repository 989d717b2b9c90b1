use std::collections::BTreeMap;

/// Where validation results are displayed.
pub trait ErrorSurface {
    /// Flag `field` and attach `message`, replacing any previous message.
    fn show_error(&mut self, field: &str, message: &str);

    /// Remove the flag and the message, if any.
    fn clear_error(&mut self, field: &str);
}

/// Error message attached next to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub node_id: String, // "error-{field}"
    pub message: String,
}

/// A named form: field values plus their displayed error state.
#[derive(Debug, Clone, Default)]
pub struct Form {
    id: String,
    values: BTreeMap<String, String>,
    errors: BTreeMap<String, FieldError>,
}

impl Form {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_flagged(&self, name: &str) -> bool {
        self.errors.contains_key(name)
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.errors.get(name)
    }

    /// `(field, message)` pairs in field-name order.
    pub fn errors(&self) -> Vec<(String, String)> {
        self.errors
            .iter()
            .map(|(f, e)| (f.clone(), e.message.clone()))
            .collect()
    }

    /// Clear all values and error state.
    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
        self.errors.clear();
    }
}

impl ErrorSurface for Form {
    /// Fields the form does not have are ignored.
    fn show_error(&mut self, field: &str, message: &str) {
        if !self.has_field(field) {
            return;
        }
        self.clear_error(field);
        self.errors.insert(
            field.to_string(),
            FieldError {
                node_id: format!("error-{field}"),
                message: message.to_string(),
            },
        );
    }

    fn clear_error(&mut self, field: &str) {
        self.errors.remove(field);
    }
}
