//! `secretsanta`: draw a Secret Santa from a JSON participant list.
//!
//! ```text
//! secretsanta --participants people.json [--seed 42] [--lookup 3]
//! SANTA_ADMIN_PASSWORD=... secretsanta --participants people.json --reveal
//! ```

mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use secretsanta_registry::DrawService;
use secretsanta_types::{AdminConfig, EngineConfig, ParticipantId, ServiceConfig, constants};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "secretsanta", version, about = "Draw a Secret Santa that keeps households apart")]
struct Cli {
    /// JSON file: `[{"name": "Alice", "surname": "Smith"}, ...]`.
    /// Participants sharing a surname are treated as one household.
    #[arg(short, long)]
    participants: PathBuf,

    /// Fixed RNG seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum candidate evaluations before giving up
    #[arg(long, default_value_t = constants::DEFAULT_MAX_SEARCH_STEPS)]
    max_steps: u64,

    /// Print the recipient for this participant id (ids start at 1, in file order)
    #[arg(long)]
    lookup: Option<u64>,

    /// Print every pairing as JSON (requires the admin password)
    #[arg(long)]
    reveal: bool,

    /// Admin password for --reveal
    #[arg(long, env = "SANTA_ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Deserialize)]
struct PersonEntry {
    name: String,
    surname: String,
}

fn load_people(path: &Path) -> Result<Vec<PersonEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading participants from {}", path.display()))?;
    let people: Vec<PersonEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing participants in {}", path.display()))?;
    Ok(people)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.json_logs);

    tracing::debug!(
        engine = constants::ENGINE_NAME,
        version = constants::VERSION,
        "Starting"
    );

    let config = ServiceConfig {
        engine: EngineConfig {
            max_search_steps: cli.max_steps,
            seed: cli.seed,
        },
        admin: cli.admin_password.clone().map(AdminConfig::new),
        ..ServiceConfig::default()
    };
    let mut service = DrawService::new(config)?;

    for person in load_people(&cli.participants)? {
        service
            .add_participant(&person.name, &person.surname)
            .with_context(|| format!("registering {} {}", person.name, person.surname))?;
    }

    let summary = service.draw()?;
    println!(
        "Drawn {} participants (draw {}, digest {})",
        summary.participant_count, summary.draw_id, summary.digest
    );

    if let Some(giver) = cli.lookup {
        let recipient = service.recipient_for(ParticipantId(giver))?;
        println!("{giver} buys for {}", recipient.full_name());
    }

    if cli.reveal {
        let password = cli
            .admin_password
            .as_deref()
            .with_context(|| {
                format!(
                    "--reveal needs --admin-password or {}",
                    constants::ADMIN_PASSWORD_ENV
                )
            })?;
        let token = service.admin_login(password)?;
        let pairings = service.admin_pairings(&token)?;
        println!("{}", serde_json::to_string_pretty(&pairings)?);
    }

    Ok(())
}
