//! SwiftReg backend entry point.
//!
//! A command-line shell over the shared registry: seeds the in-memory
//! store from configured CSV files, then runs one subcommand against it
//! and prints the JSON result.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use swiftreg_backend::api::{
    status_for, CodeDetails, CodeWithBranches, CountryCodes, ErrorBody,
};
use swiftreg_backend::config::Config;
use swiftreg_backend::import;
use swiftreg_shared::countries;
use swiftreg_shared::{CandidateCode, MemoryStore, RegistryError, SwiftRegistry};

#[derive(Parser)]
#[command(name = "swiftreg-backend")]
#[command(about = "SWIFT/BIC code registry service")]
#[command(version)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import SWIFT codes from a CSV file
    Import {
        /// CSV file to import
        file: PathBuf,
    },
    /// Register a single SWIFT code
    Add {
        /// The SWIFT/BIC code
        code: String,
        #[arg(long)]
        bank: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long)]
        country: String,
        #[arg(long)]
        country_name: String,
    },
    /// Look up a single SWIFT code
    Get {
        /// The SWIFT/BIC code
        code: String,
    },
    /// List all SWIFT codes for a country
    Country {
        /// Two-letter ISO country code
        iso2: String,
    },
    /// Delete a SWIFT code
    Delete {
        /// The SWIFT/BIC code
        code: String,
    },
    /// Show registry statistics
    Stats,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Config is loaded before the subscriber so its logging level can
    // apply; RUST_LOG and --debug both take precedence over it.
    let config = match Config::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let default_level = if args.debug {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args, config) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args, config: Config) -> anyhow::Result<ExitCode> {
    let registry = SwiftRegistry::new(MemoryStore::new());
    for seed in &config.import.seed_files {
        let report = import::import_file(&registry, seed)
            .with_context(|| format!("failed to import seed file {}", seed.display()))?;
        info!(
            path = %seed.display(),
            added = report.added,
            skipped = report.skipped,
            "seed file loaded"
        );
    }

    match args.command {
        Command::Import { file } => {
            let report = import::import_file(&registry, &file)
                .with_context(|| format!("failed to import {}", file.display()))?;
            print_json(&serde_json::json!({
                "added": report.added,
                "skipped": report.skipped,
            }))?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Add {
            code,
            bank,
            address,
            country,
            country_name,
        } => {
            let candidate = CandidateCode::new(code, bank, address, country, country_name);
            match registry.insert(&candidate) {
                Ok(outcome) => {
                    print_json(&serde_json::json!({
                        "message": format!("SWIFT code {} added successfully", outcome.code()),
                    }))?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => print_registry_error(&err),
            }
        }

        Command::Get { code } => match registry.get_by_code(&code) {
            Ok(entry) => {
                if entry.headquarter_flag {
                    let branches = registry.branches_of(&entry.swift_code)?;
                    print_json(&CodeWithBranches::new(&entry, &branches))?;
                } else {
                    print_json(&CodeDetails::from(&entry))?;
                }
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => print_registry_error(&err),
        },

        Command::Country { iso2 } => {
            let iso2 = iso2.trim().to_uppercase();
            if !countries::is_valid_country_code(&iso2) {
                return print_registry_error(&RegistryError::InvalidCountryCode { iso2 });
            }
            let entries = registry.get_by_country(&iso2)?;
            let name = countries::canonical_country_name(&iso2);
            print_json(&CountryCodes::new(&iso2, name, &entries))?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Delete { code } => match registry.delete(&code) {
            Ok(outcome) => {
                print_json(&serde_json::json!({
                    "message": format!("SWIFT code {} deleted successfully", outcome.code),
                }))?;
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => print_registry_error(&err),
        },

        Command::Stats => {
            let stats = registry.stats()?;
            print_json(&stats)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the error body to stdout and map its status to an exit code.
fn print_registry_error(err: &RegistryError) -> anyhow::Result<ExitCode> {
    let status = status_for(err);
    let body = ErrorBody::from_registry_error(err);
    println!("{}", serde_json::to_string_pretty(&body)?);
    error!(status, "{err}");
    Ok(ExitCode::FAILURE)
}
