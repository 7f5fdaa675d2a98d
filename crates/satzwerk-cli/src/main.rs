// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Satzwerk — CUPS queue manager command line.
//
// Entry point. Initialises logging, wires the manager to the real shell
// runner, and dispatches one subcommand per invocation.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use satzwerk_core::error::{Result, SatzwerkError};
use satzwerk_core::types::InstallRequest;
use satzwerk_cups::{CupsManager, ShellRunner};

#[derive(Debug, Parser)]
#[command(name = "satzwerk", version, about = "Manage CUPS queues, discover devices, and match drivers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List installed queues.
    List,
    /// Show one queue (the default queue when no name is given).
    Get {
        /// Queue name, matched case-insensitively.
        name: Option<String>,
    },
    /// List discoverable devices grouped by backend.
    Discover,
    /// Search the driver catalog.
    Drivers {
        /// Free-text model queries; the full catalog when omitted.
        slugs: Vec<String>,
        /// Cap on combined results.
        #[arg(long)]
        max: Option<usize>,
    },
    /// Install a queue for a device.
    Install {
        /// Queue name to create.
        queue: String,
        /// Device URI (as reported by `discover`).
        uri: String,
        /// Driver identifier from the catalog.
        #[arg(long, short = 'm')]
        driver: Option<String>,
        /// Human-readable description.
        #[arg(long, short = 'D')]
        description: Option<String>,
        /// Physical location.
        #[arg(long, short = 'L')]
        location: Option<String>,
        /// Queue options as key=value pairs.
        #[arg(long, short = 'o', value_parser = parse_key_value)]
        option: Vec<(String, String)>,
    },
    /// Remove an installed queue.
    Uninstall {
        /// Queue name to remove.
        name: String,
    },
    /// Submit a file to a queue.
    Print {
        /// Target queue.
        queue: String,
        /// File to print.
        file: PathBuf,
        /// Job options as key=value pairs (bare keys for flag options).
        #[arg(long, short = 'o', value_parser = parse_key_value)]
        option: Vec<(String, String)>,
    },
}

/// Parse `key=value` (or a bare `key` for flag options).
fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Ok((raw.to_string(), String::new())),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    tracing::debug!("satzwerk starting");

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("satzwerk: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let manager = CupsManager::new(ShellRunner);

    match cli.command {
        Command::List => {
            for printer in manager.list().await? {
                let marker = if printer.is_default { "*" } else { " " };
                println!("{marker} {}\t{}", printer.name, printer.connection);
            }
        }
        Command::Get { name } => {
            match manager.get(name.as_deref()).await? {
                Some(printer) => println!("{}", serde_json::to_string_pretty(&printer)?),
                None => {
                    return Err(match name {
                        Some(name) => SatzwerkError::PrinterNotFound(name),
                        None => SatzwerkError::NoDefaultPrinter,
                    });
                }
            }
        }
        Command::Discover => {
            let devices = manager.discover().await?;
            println!("{}", serde_json::to_string_pretty(&devices)?);
        }
        Command::Drivers { slugs, max } => {
            let slugs: Vec<&str> = slugs.iter().map(String::as_str).collect();
            let drivers = manager.find_drivers(&slugs, max).await?;
            println!("{}", serde_json::to_string_pretty(&drivers)?);
        }
        Command::Install {
            queue,
            uri,
            driver,
            description,
            location,
            option,
        } => {
            let mut request = InstallRequest::new(queue.as_str(), uri);
            request.driver = driver;
            request.description = description;
            request.location = location;
            request.options = option.into_iter().collect::<BTreeMap<_, _>>();
            manager.install(&request).await?;
            println!("installed {queue}");
        }
        Command::Uninstall { name } => {
            manager.uninstall(&name).await?;
            println!("removed {name}");
        }
        Command::Print { queue, file, option } => {
            let options = option.into_iter().collect::<BTreeMap<_, _>>();
            let receipt = manager.print_file(&queue, &file, &options).await?;
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
    }
    Ok(())
}
