//! `pulsetrack` - CLI for recording individuals and pulse-oximetry readings
//!
//! This binary provides the command-line interface over the remote GraphQL
//! API: the list, create/edit, and detail screens become subcommands keyed
//! by individual identifier.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::bail;
use clap::Parser;

use pulsetrack::api::operations::{
    CreateOximeterInput, CreatePulseOximetryRangeInput, DeleteIndividualInput, DeleteOximeterInput,
    DeletePulseOximetryRangeInput, UpdateOximeterInput, UpdatePulseOximetryRangeInput,
};
use pulsetrack::attachment::{attach_photo, HttpObjectStore};
use pulsetrack::cli::{
    Cli, Command, ConfigCommand, IndividualCommand, RangeCommand, ReadingCommand,
};
use pulsetrack::submit::new_record_id;
use pulsetrack::table;
use pulsetrack::{
    init_logging, ApiClient, AuthState, Config, Individual, IndividualForm, Session, Submitter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Individual(cmd) => handle_individual(&config, cmd).await,
        Command::Reading(cmd) => handle_reading(&config, cmd).await,
        Command::Range(cmd) => handle_range(&config, cmd).await,
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

/// Resolve the session gate and build the API client.
///
/// Every remote command goes through here: signed out means a typed error
/// before any request is attempted.
fn signed_in_client(config: &Config) -> anyhow::Result<(ApiClient, Session)> {
    let session = AuthState::from_config(config).require_signed_in()?.clone();
    let client = ApiClient::over_http(config, &session)?;
    Ok((client, session))
}

async fn handle_individual(config: &Config, cmd: IndividualCommand) -> anyhow::Result<()> {
    let (client, session) = signed_in_client(config)?;

    match cmd {
        IndividualCommand::List(args) => {
            let page = client.list_individuals(Some(args.limit), None).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&page.items)?);
            } else {
                println!("{:<38} {:<24} {:<8} {:<12}", "ID", "Name", "Gender", "DOB");
                for individual in &page.items {
                    println!(
                        "{:<38} {:<24} {:<8} {:<12}",
                        individual.id,
                        individual.display_name(),
                        individual.gender,
                        individual.dob.format("%Y-%m-%d"),
                    );
                }
                if page.items.is_empty() {
                    println!("(no individuals)");
                }
                if page.next_token.is_some() {
                    println!();
                    println!("More results available; raise --limit to fetch them.");
                }
            }
        }
        IndividualCommand::Add(args) => {
            let mut form = IndividualForm::new();
            if let Some(first_name) = args.first_name {
                form.set_first_name(first_name);
            }
            if let Some(last_name) = args.last_name {
                form.set_last_name(last_name);
            }
            if let Some(gender) = args.gender {
                form.set_gender(gender.into());
            }
            if let Some(dob) = args.dob {
                form.set_dob(dob);
            }

            // The identifier is assigned before submission so the photo
            // storage key and the create call share it
            let id = new_record_id();
            let mut submitter = Submitter::new();
            let individual = submitter.create(&client, &mut form, id).await?;
            println!("Created {} ({})", individual.display_name(), individual.id);

            if let Some(photo) = args.photo {
                let store = HttpObjectStore::new(config, &session)?;
                let key = attach_photo(&store, config.storage.level, id, &photo).await?;
                println!("Photo attached at {key}");
            }
        }
        IndividualCommand::Show(args) => {
            let Some(individual) = client.get_individual(args.id).await? else {
                bail!("no individual found with id {}", args.id);
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&individual)?);
            } else {
                print_individual(&individual);
            }
        }
        IndividualCommand::Update(args) => {
            let Some(snapshot) = client.get_individual(args.id).await? else {
                bail!("no individual found with id {}", args.id);
            };

            // Pre-populate every field from the snapshot, then apply the
            // supplied overrides
            let mut form = IndividualForm::from_snapshot(&snapshot);
            if let Some(first_name) = args.first_name {
                form.set_first_name(first_name);
            }
            if let Some(last_name) = args.last_name {
                form.set_last_name(last_name);
            }
            if let Some(gender) = args.gender {
                form.set_gender(gender.into());
            }
            if let Some(dob) = args.dob {
                form.set_dob(dob);
            }

            let mut submitter = Submitter::new();
            let individual = submitter.update(&client, &mut form, args.id).await?;
            println!("Updated {} ({})", individual.display_name(), individual.id);

            if let Some(photo) = args.photo {
                let store = HttpObjectStore::new(config, &session)?;
                let key = attach_photo(&store, config.storage.level, args.id, &photo).await?;
                println!("Photo attached at {key}");
            }
        }
        IndividualCommand::Delete(args) => {
            if !args.yes {
                println!("This will delete the individual record {}.", args.id);
                println!("Use --yes to confirm.");
                return Ok(());
            }
            let deleted = client
                .delete_individual(DeleteIndividualInput { id: args.id }, None)
                .await?;
            println!("Deleted {} ({})", deleted.display_name(), deleted.id);
        }
    }
    Ok(())
}

async fn handle_reading(config: &Config, cmd: ReadingCommand) -> anyhow::Result<()> {
    let (client, _session) = signed_in_client(config)?;

    match cmd {
        ReadingCommand::Add(args) => {
            let reading = client
                .create_oximeter(
                    CreateOximeterInput {
                        individual_id: args.individual_id,
                        spo2: args.spo2,
                        heart_rate: args.heart_rate,
                    },
                    None,
                )
                .await?;
            println!(
                "Recorded reading {} (SpO2 {}, heart rate {})",
                reading.id, reading.spo2, reading.heart_rate
            );
        }
        ReadingCommand::Update(args) => {
            let reading = client
                .update_oximeter(
                    UpdateOximeterInput {
                        id: args.id,
                        spo2: args.spo2,
                        heart_rate: args.heart_rate,
                    },
                    None,
                )
                .await?;
            println!(
                "Updated reading {} (SpO2 {}, heart rate {})",
                reading.id, reading.spo2, reading.heart_rate
            );
        }
        ReadingCommand::Delete(args) => {
            let deleted = client
                .delete_oximeter(DeleteOximeterInput { id: args.id }, None)
                .await?;
            println!("Deleted reading {}", deleted.id);
        }
    }
    Ok(())
}

async fn handle_range(config: &Config, cmd: RangeCommand) -> anyhow::Result<()> {
    let (client, _session) = signed_in_client(config)?;

    match cmd {
        RangeCommand::Set(args) => {
            let range = client
                .create_pulse_oximetry_range(
                    CreatePulseOximetryRangeInput {
                        individual_id: args.individual_id,
                        min_spo2: args.min_spo2,
                        min_heart_rate: args.min_heart_rate,
                        max_heart_rate: args.max_heart_rate,
                    },
                    None,
                )
                .await?;
            println!(
                "Set alert range {} (SpO2 >= {}, heart rate {}-{})",
                range.id, range.min_spo2, range.min_heart_rate, range.max_heart_rate
            );
        }
        RangeCommand::Update(args) => {
            let range = client
                .update_pulse_oximetry_range(
                    UpdatePulseOximetryRangeInput {
                        id: args.id,
                        min_spo2: args.min_spo2,
                        min_heart_rate: args.min_heart_rate,
                        max_heart_rate: args.max_heart_rate,
                    },
                    None,
                )
                .await?;
            println!(
                "Updated alert range {} (SpO2 >= {}, heart rate {}-{})",
                range.id, range.min_spo2, range.min_heart_rate, range.max_heart_rate
            );
        }
        RangeCommand::Delete(args) => {
            let deleted = client
                .delete_pulse_oximetry_range(DeletePulseOximetryRangeInput { id: args.id }, None)
                .await?;
            println!("Deleted alert range {}", deleted.id);
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                let auth = AuthState::from_config(config);
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[API]");
                println!(
                    "  Endpoint:        {}",
                    config.api.endpoint.as_deref().unwrap_or("(not set)")
                );
                println!("  Timeout (secs):  {}", config.api.timeout);
                println!();
                println!("[Auth]");
                println!(
                    "  User:            {}",
                    config.auth.user.as_deref().unwrap_or("(not set)")
                );
                println!(
                    "  Signed in:       {}",
                    if auth.is_signed_in() { "yes" } else { "no" }
                );
                println!();
                println!("[Storage]");
                println!(
                    "  Endpoint:        {}",
                    config.storage.endpoint.as_deref().unwrap_or("(not set)")
                );
                println!("  Access level:    {}", config.storage.level);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn print_individual(individual: &Individual) {
    println!("{}", individual.display_name());
    println!("  ID:      {}", individual.id);
    println!("  Gender:  {}", individual.gender);
    println!("  DOB:     {}", individual.dob.format("%Y-%m-%d"));
    if let Some(owner) = &individual.owner {
        println!("  Owner:   {owner}");
    }
    println!();
    print!("{}", table::render(individual.readings()));
}
