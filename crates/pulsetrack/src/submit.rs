//! Submission handler for the individual form.
//!
//! Takes the validated form snapshot, formats the date of birth as a
//! `yyyy-MM-dd` calendar string, attaches the pre-generated record
//! identifier, and issues exactly one remote create/update call. The busy
//! indicator always reaches a terminal state: the original client left it
//! stuck on failure, which is treated here as a bug, so failures transition
//! to [`SubmitState::Failed`] and the typed error is propagated to the
//! caller.

use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::operations::{CreateIndividualInput, UpdateIndividualInput};
use crate::api::ApiClient;
use crate::error::Result;
use crate::form::IndividualForm;
use crate::model::Individual;

/// Wire format for the date of birth.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// Format a date of birth for the remote API.
#[must_use]
pub fn format_dob(dob: NaiveDate) -> String {
    dob.format(DOB_FORMAT).to_string()
}

/// Generate the identifier for a new record.
///
/// Assigned client-side before submission so the photo storage key and the
/// create call share the same identifier.
#[must_use]
pub fn new_record_id() -> Uuid {
    Uuid::new_v4()
}

/// Progress of an in-flight submission.
///
/// Exactly one submission can be in flight at a time; the form is blocked
/// while the indicator shows `InFlight`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// No submission has been attempted.
    #[default]
    Idle,
    /// The remote call is in flight.
    InFlight,
    /// The remote call completed successfully.
    Succeeded,
    /// The remote call failed with the contained message.
    Failed(String),
}

impl SubmitState {
    /// Whether the busy indicator should be shown.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Whether the submission has reached a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }
}

/// Drives one create/update submission at a time.
#[derive(Debug, Default)]
pub struct Submitter {
    state: SubmitState,
}

impl Submitter {
    /// Create a submitter in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current progress state.
    #[must_use]
    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    /// Validate the form and create a new individual record.
    ///
    /// Validation runs before the busy indicator is shown; a form with a
    /// missing required field marks that field's error state and issues no
    /// remote call.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Validation`] when a required field is
    /// missing, or the remote error when the create call fails.
    pub async fn create(
        &mut self,
        client: &ApiClient,
        form: &mut IndividualForm,
        id: Uuid,
    ) -> Result<Individual> {
        let draft = form.validate()?;

        let input = CreateIndividualInput {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            gender: draft.gender,
            dob: format_dob(draft.dob),
        };

        self.state = SubmitState::InFlight;
        match client.create_individual(input, None).await {
            Ok(individual) => {
                info!(id = %individual.id, "created individual");
                self.state = SubmitState::Succeeded;
                Ok(individual)
            }
            Err(err) => {
                warn!(id = %id, error = %err, "create individual failed");
                self.state = SubmitState::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Validate the form and update an existing individual record.
    ///
    /// The identifier is the one assigned at creation; re-submitting it
    /// updates the same record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Validation`] when a required field is
    /// missing, or the remote error when the update call fails.
    pub async fn update(
        &mut self,
        client: &ApiClient,
        form: &mut IndividualForm,
        id: Uuid,
    ) -> Result<Individual> {
        let draft = form.validate()?;

        let input = UpdateIndividualInput {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            gender: draft.gender,
            dob: format_dob(draft.dob),
        };

        self.state = SubmitState::InFlight;
        match client.update_individual(input, None).await {
            Ok(individual) => {
                info!(id = %individual.id, "updated individual");
                self.state = SubmitState::Succeeded;
                Ok(individual)
            }
            Err(err) => {
                warn!(id = %id, error = %err, "update individual failed");
                self.state = SubmitState::Failed(err.to_string());
                Err(err)
            }
        }
    }
}
