//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands. The routing
//! surface mirrors the application's screens: a list view, a create/edit
//! individual view, an individual detail view, and an add-reading view,
//! keyed by individual identifier.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use uuid::Uuid;

/// Individual record commands.
#[derive(Debug, Subcommand)]
pub enum IndividualCommand {
    /// List tracked individuals
    List(ListIndividualsArgs),

    /// Add a new individual
    Add(AddIndividualArgs),

    /// Show an individual and their readings
    Show(ShowIndividualArgs),

    /// Update an existing individual
    Update(UpdateIndividualArgs),

    /// Delete an individual record
    Delete(DeleteIndividualArgs),
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListIndividualsArgs {
    /// Maximum number of individuals to fetch
    #[arg(short, long, default_value = "50")]
    pub limit: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add command arguments.
///
/// Every field is optional at the argument layer; required-field validation
/// belongs to the form controller so missing names surface as inline field
/// errors, not argument-parser errors.
#[derive(Debug, Args)]
pub struct AddIndividualArgs {
    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Gender (defaults to other)
    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,

    /// Date of birth, yyyy-MM-dd (defaults to today)
    #[arg(long)]
    pub dob: Option<NaiveDate>,

    /// Photo to attach to the record
    #[arg(long, value_name = "FILE")]
    pub photo: Option<PathBuf>,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowIndividualArgs {
    /// Individual identifier
    pub id: Uuid,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Update command arguments.
#[derive(Debug, Args)]
pub struct UpdateIndividualArgs {
    /// Individual identifier
    pub id: Uuid,

    /// New first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// New last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// New gender
    #[arg(long, value_enum)]
    pub gender: Option<GenderArg>,

    /// New date of birth, yyyy-MM-dd
    #[arg(long)]
    pub dob: Option<NaiveDate>,

    /// Replace the attached photo
    #[arg(long, value_name = "FILE")]
    pub photo: Option<PathBuf>,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteIndividualArgs {
    /// Individual identifier
    pub id: Uuid,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Pulse-oximetry reading commands.
#[derive(Debug, Subcommand)]
pub enum ReadingCommand {
    /// Record a new reading for an individual
    Add(AddReadingArgs),

    /// Correct an existing reading
    Update(UpdateReadingArgs),

    /// Delete a reading
    Delete(DeleteReadingArgs),
}

/// Add-reading command arguments.
#[derive(Debug, Args)]
pub struct AddReadingArgs {
    /// Owning individual identifier
    pub individual_id: Uuid,

    /// Blood oxygen saturation percentage
    #[arg(long)]
    pub spo2: f64,

    /// Heart rate in beats per minute
    #[arg(long)]
    pub heart_rate: u32,
}

/// Update-reading command arguments.
#[derive(Debug, Args)]
pub struct UpdateReadingArgs {
    /// Reading identifier
    pub id: String,

    /// Blood oxygen saturation percentage
    #[arg(long)]
    pub spo2: f64,

    /// Heart rate in beats per minute
    #[arg(long)]
    pub heart_rate: u32,
}

/// Delete-reading command arguments.
#[derive(Debug, Args)]
pub struct DeleteReadingArgs {
    /// Reading identifier
    pub id: String,
}

/// Alert range commands.
#[derive(Debug, Subcommand)]
pub enum RangeCommand {
    /// Set alert thresholds for an individual
    Set(SetRangeArgs),

    /// Update existing alert thresholds
    Update(UpdateRangeArgs),

    /// Delete alert thresholds
    Delete(DeleteRangeArgs),
}

/// Set-range command arguments.
#[derive(Debug, Args)]
pub struct SetRangeArgs {
    /// Owning individual identifier
    pub individual_id: Uuid,

    /// Minimum acceptable SpO2 percentage
    #[arg(long)]
    pub min_spo2: f64,

    /// Minimum acceptable heart rate
    #[arg(long)]
    pub min_heart_rate: u32,

    /// Maximum acceptable heart rate
    #[arg(long)]
    pub max_heart_rate: u32,
}

/// Update-range command arguments.
#[derive(Debug, Args)]
pub struct UpdateRangeArgs {
    /// Range identifier
    pub id: String,

    /// Minimum acceptable SpO2 percentage
    #[arg(long)]
    pub min_spo2: f64,

    /// Minimum acceptable heart rate
    #[arg(long)]
    pub min_heart_rate: u32,

    /// Maximum acceptable heart rate
    #[arg(long)]
    pub max_heart_rate: u32,
}

/// Delete-range command arguments.
#[derive(Debug, Args)]
pub struct DeleteRangeArgs {
    /// Range identifier
    pub id: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Gender argument for the add/update commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    /// Female
    Female,
    /// Male
    Male,
    /// Other or unspecified
    Other,
}

impl From<GenderArg> for crate::model::Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Female => Self::Female,
            GenderArg::Male => Self::Male,
            GenderArg::Other => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;

    #[test]
    fn test_gender_arg_conversion() {
        assert_eq!(Gender::from(GenderArg::Female), Gender::Female);
        assert_eq!(Gender::from(GenderArg::Male), Gender::Male);
        assert_eq!(Gender::from(GenderArg::Other), Gender::Other);
    }

    #[test]
    fn test_add_individual_args_debug() {
        let args = AddIndividualArgs {
            first_name: Some("Ada".to_string()),
            last_name: None,
            gender: None,
            dob: None,
            photo: None,
        };
        let debug_str = format!("{args:?}");
        assert!(debug_str.contains("first_name"));
        assert!(debug_str.contains("Ada"));
    }

    #[test]
    fn test_reading_command_debug() {
        let cmd = ReadingCommand::Add(AddReadingArgs {
            individual_id: Uuid::nil(),
            spo2: 97.0,
            heart_rate: 70,
        });
        assert!(format!("{cmd:?}").contains("Add"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }
}
