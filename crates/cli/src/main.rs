// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! linelog - append structured events to daily log files

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{emit, write};
use linelog::LineLogger;

use crate::config::GlobalArgs;

#[derive(Parser)]
#[command(
    name = "linelog",
    version,
    about = "Append structured events as pipe-delimited lines to daily log files"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Append one event
    Write(write::WriteArgs),
    /// Append newline-delimited JSON events read from stdin
    Emit,
    /// Print the path of today's log file
    Path,
}

fn main() {
    setup_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", format_error(&e));
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` filter.
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain. Otherwise we render the full chain so context isn't
/// lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load(&cli.global)?;
    let logger = LineLogger::new(config).context("failed to open log directory")?;

    match cli.command {
        Commands::Write(args) => write::handle(args, &logger)?,
        Commands::Emit => {
            let stdin = std::io::stdin();
            let count = emit::handle(stdin.lock(), &logger)?;
            tracing::debug!(count, "emitted events");
        }
        Commands::Path => println!("{}", logger.current_log_path().display()),
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
