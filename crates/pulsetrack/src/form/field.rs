//! Labeled form field with dirty and error state.

/// Inline error text shown for a required field left empty.
pub const VALIDATION_REQUIRED: &str = "Required";

/// Values that can be checked for presence by required-field validation.
pub trait FieldValue {
    /// Whether the value counts as filled in.
    fn is_present(&self) -> bool;
}

impl FieldValue for String {
    fn is_present(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl FieldValue for crate::model::Gender {
    fn is_present(&self) -> bool {
        true
    }
}

impl FieldValue for chrono::NaiveDate {
    fn is_present(&self) -> bool {
        true
    }
}

/// A single labeled input bound to the form-state controller.
///
/// Tracks the current value, whether the caregiver has touched it, and the
/// inline error text surfaced by validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    name: &'static str,
    label: &'static str,
    value: Option<T>,
    dirty: bool,
    error: Option<&'static str>,
}

impl<T: FieldValue> Field<T> {
    /// Create an empty field.
    #[must_use]
    pub fn new(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: None,
            dirty: false,
            error: None,
        }
    }

    /// Create a field pre-populated with a default or snapshot value.
    ///
    /// Pre-population does not mark the field dirty.
    #[must_use]
    pub fn with_value(name: &'static str, label: &'static str, value: T) -> Self {
        Self {
            name,
            label,
            value: Some(value),
            dirty: false,
            error: None,
        }
    }

    /// Set the field value, marking it dirty and clearing any error.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
        self.dirty = true;
        self.error = None;
    }

    /// The wire name of this field.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The human-readable label of this field.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The current value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Whether the field has been modified since creation.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The current inline error text, if any.
    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Whether the field is currently in error state.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Run required-field validation.
    ///
    /// Marks the field's error state and returns `false` when the value is
    /// missing or blank. A passing check clears any previous error.
    pub fn validate_required(&mut self) -> bool {
        let present = self.value.as_ref().is_some_and(FieldValue::is_present);
        self.error = if present { None } else { Some(VALIDATION_REQUIRED) };
        present
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use chrono::NaiveDate;

    #[test]
    fn test_new_field_is_clean_and_empty() {
        let field: Field<String> = Field::new("firstName", "First Name");
        assert!(field.value().is_none());
        assert!(!field.is_dirty());
        assert!(!field.has_error());
        assert_eq!(field.name(), "firstName");
        assert_eq!(field.label(), "First Name");
    }

    #[test]
    fn test_with_value_does_not_mark_dirty() {
        let field = Field::with_value("gender", "Gender", Gender::Other);
        assert_eq!(field.value(), Some(&Gender::Other));
        assert!(!field.is_dirty());
    }

    #[test]
    fn test_set_marks_dirty_and_clears_error() {
        let mut field: Field<String> = Field::new("lastName", "Last Name");
        assert!(!field.validate_required());
        assert!(field.has_error());

        field.set("Lovelace".to_string());
        assert!(field.is_dirty());
        assert!(!field.has_error());
        assert_eq!(field.value().map(String::as_str), Some("Lovelace"));
    }

    #[test]
    fn test_validate_required_missing_value() {
        let mut field: Field<String> = Field::new("firstName", "First Name");
        assert!(!field.validate_required());
        assert_eq!(field.error(), Some(VALIDATION_REQUIRED));
    }

    #[test]
    fn test_validate_required_blank_string() {
        let mut field: Field<String> = Field::new("firstName", "First Name");
        field.set("   ".to_string());
        assert!(!field.validate_required());
        assert_eq!(field.error(), Some(VALIDATION_REQUIRED));
    }

    #[test]
    fn test_validate_required_passes_and_clears_error() {
        let mut field: Field<String> = Field::new("firstName", "First Name");
        assert!(!field.validate_required());

        field.set("Ada".to_string());
        assert!(field.validate_required());
        assert!(field.error().is_none());
    }

    #[test]
    fn test_date_value_always_present() {
        let mut field = Field::with_value(
            "dob",
            "Date of birth",
            NaiveDate::from_ymd_opt(2020, 3, 5).unwrap(),
        );
        assert!(field.validate_required());
    }
}
