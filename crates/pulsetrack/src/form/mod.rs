//! Form-state controller for the create/edit individual screen.
//!
//! The controller holds the field values, dirty/error state, and produces a
//! validated snapshot for the submission handler. Defaults mirror the entry
//! screen: gender "other", date of birth "today". When editing, every field
//! pre-populates from the supplied record snapshot.

pub mod field;

use chrono::{Local, NaiveDate};

use crate::error::{Error, Result};
use crate::model::{Gender, Individual};

pub use field::{Field, VALIDATION_REQUIRED};

/// The validated output of the individual form.
///
/// Only produced when every required field passes validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualDraft {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Gender.
    pub gender: Gender,
    /// Date of birth.
    pub dob: NaiveDate,
}

/// Controller for the create/edit individual form.
#[derive(Debug, Clone, PartialEq)]
pub struct IndividualForm {
    /// First name input.
    pub first_name: Field<String>,
    /// Last name input.
    pub last_name: Field<String>,
    /// Gender choice input.
    pub gender: Field<Gender>,
    /// Date-of-birth picker input.
    pub dob: Field<NaiveDate>,
}

impl IndividualForm {
    /// Create a form with default values for a new individual.
    ///
    /// Gender defaults to "other" and date of birth to the current date.
    #[must_use]
    pub fn new() -> Self {
        Self {
            first_name: Field::new("firstName", "First Name"),
            last_name: Field::new("lastName", "Last Name"),
            gender: Field::with_value("gender", "Gender", Gender::default()),
            dob: Field::with_value("dob", "Date of birth", Local::now().date_naive()),
        }
    }

    /// Create a form pre-populated from an existing record snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &Individual) -> Self {
        Self {
            first_name: Field::with_value("firstName", "First Name", snapshot.first_name.clone()),
            last_name: Field::with_value("lastName", "Last Name", snapshot.last_name.clone()),
            gender: Field::with_value("gender", "Gender", snapshot.gender),
            dob: Field::with_value("dob", "Date of birth", snapshot.dob),
        }
    }

    /// Set the first name.
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.first_name.set(value.into());
    }

    /// Set the last name.
    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.last_name.set(value.into());
    }

    /// Set the gender.
    pub fn set_gender(&mut self, value: Gender) {
        self.gender.set(value);
    }

    /// Set the date of birth.
    pub fn set_dob(&mut self, value: NaiveDate) {
        self.dob.set(value);
    }

    /// Names of the fields currently in error state.
    #[must_use]
    pub fn fields_in_error(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.first_name.has_error() {
            fields.push(self.first_name.name());
        }
        if self.last_name.has_error() {
            fields.push(self.last_name.name());
        }
        if self.gender.has_error() {
            fields.push(self.gender.name());
        }
        if self.dob.has_error() {
            fields.push(self.dob.name());
        }
        fields
    }

    /// Validate every required field and produce the submission snapshot.
    ///
    /// All fields are checked so each missing one surfaces its own inline
    /// error text, not just the first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the fields in error when any
    /// required field is missing or blank.
    pub fn validate(&mut self) -> Result<IndividualDraft> {
        let first_name_ok = self.first_name.validate_required();
        let last_name_ok = self.last_name.validate_required();
        let gender_ok = self.gender.validate_required();
        let dob_ok = self.dob.validate_required();

        if !(first_name_ok && last_name_ok && gender_ok && dob_ok) {
            return Err(Error::validation(
                self.fields_in_error()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            ));
        }

        Ok(IndividualDraft {
            first_name: self
                .first_name
                .value()
                .cloned()
                .ok_or_else(|| Error::internal("validated field without value"))?,
            last_name: self
                .last_name
                .value()
                .cloned()
                .ok_or_else(|| Error::internal("validated field without value"))?,
            gender: self
                .gender
                .value()
                .copied()
                .ok_or_else(|| Error::internal("validated field without value"))?,
            dob: self
                .dob
                .value()
                .copied()
                .ok_or_else(|| Error::internal("validated field without value"))?,
        })
    }
}

impl Default for IndividualForm {
    fn default() -> Self {
        Self::new()
    }
}
