//! Command-line interface for pulsetrack.
//!
//! This module provides the CLI structure for the `pulsetrack` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddIndividualArgs, AddReadingArgs, ConfigCommand, DeleteIndividualArgs, DeleteRangeArgs,
    DeleteReadingArgs, GenderArg, IndividualCommand, ListIndividualsArgs, RangeCommand,
    ReadingCommand, SetRangeArgs, ShowIndividualArgs, UpdateIndividualArgs, UpdateRangeArgs,
    UpdateReadingArgs,
};

/// pulsetrack - Record individuals and their pulse-oximetry readings
///
/// A caregiver client backed by a managed GraphQL API. Individuals are
/// created and edited through a validated form flow; readings and alert
/// ranges are recorded against an individual's identifier.
#[derive(Debug, Parser)]
#[command(name = "pulsetrack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage individual records
    #[command(subcommand)]
    Individual(IndividualCommand),

    /// Record pulse-oximetry readings
    #[command(subcommand)]
    Reading(ReadingCommand),

    /// Manage per-individual alert ranges
    #[command(subcommand)]
    Range(RangeCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use uuid::Uuid;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "pulsetrack");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_flags() {
        let quiet = Cli::try_parse_from(["pulsetrack", "-q", "individual", "list"]).unwrap();
        assert_eq!(quiet.verbosity(), crate::logging::Verbosity::Quiet);

        let normal = Cli::try_parse_from(["pulsetrack", "individual", "list"]).unwrap();
        assert_eq!(normal.verbosity(), crate::logging::Verbosity::Normal);

        let verbose = Cli::try_parse_from(["pulsetrack", "-v", "individual", "list"]).unwrap();
        assert_eq!(verbose.verbosity(), crate::logging::Verbosity::Verbose);

        let trace = Cli::try_parse_from(["pulsetrack", "-vv", "individual", "list"]).unwrap();
        assert_eq!(trace.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_individual_add() {
        let cli = Cli::try_parse_from([
            "pulsetrack",
            "individual",
            "add",
            "--first-name",
            "Ada",
            "--last-name",
            "Lovelace",
            "--gender",
            "female",
            "--dob",
            "2020-03-05",
        ])
        .unwrap();

        match cli.command {
            Command::Individual(IndividualCommand::Add(args)) => {
                assert_eq!(args.first_name.as_deref(), Some("Ada"));
                assert_eq!(args.gender, Some(GenderArg::Female));
                assert_eq!(
                    args.dob,
                    Some(chrono::NaiveDate::from_ymd_opt(2020, 3, 5).unwrap())
                );
                assert!(args.photo.is_none());
            }
            other => panic!("expected individual add, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_individual_add_allows_missing_fields() {
        // Required-field validation is the form's job, not the parser's
        let cli = Cli::try_parse_from(["pulsetrack", "individual", "add"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Individual(IndividualCommand::Add(_))
        ));
    }

    #[test]
    fn test_parse_individual_show_by_id() {
        let id = Uuid::new_v4();
        let cli =
            Cli::try_parse_from(["pulsetrack", "individual", "show", &id.to_string()]).unwrap();
        match cli.command {
            Command::Individual(IndividualCommand::Show(args)) => assert_eq!(args.id, id),
            other => panic!("expected individual show, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_reading_add() {
        let id = Uuid::new_v4();
        let cli = Cli::try_parse_from([
            "pulsetrack",
            "reading",
            "add",
            &id.to_string(),
            "--spo2",
            "96.5",
            "--heart-rate",
            "80",
        ])
        .unwrap();

        match cli.command {
            Command::Reading(ReadingCommand::Add(args)) => {
                assert_eq!(args.individual_id, id);
                assert!((args.spo2 - 96.5).abs() < f64::EPSILON);
                assert_eq!(args.heart_rate, 80);
            }
            other => panic!("expected reading add, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_range_set() {
        let id = Uuid::new_v4();
        let cli = Cli::try_parse_from([
            "pulsetrack",
            "range",
            "set",
            &id.to_string(),
            "--min-spo2",
            "92",
            "--min-heart-rate",
            "50",
            "--max-heart-rate",
            "120",
        ])
        .unwrap();

        match cli.command {
            Command::Range(RangeCommand::Set(args)) => {
                assert_eq!(args.individual_id, id);
                assert_eq!(args.min_heart_rate, 50);
                assert_eq!(args.max_heart_rate, 120);
            }
            other => panic!("expected range set, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_invalid_individual_id_rejected() {
        let result = Cli::try_parse_from(["pulsetrack", "individual", "show", "not-a-uuid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_with_config() {
        let cli =
            Cli::try_parse_from(["pulsetrack", "-c", "/custom/config.toml", "config", "path"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["pulsetrack", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { json: true })
        ));
    }
}
