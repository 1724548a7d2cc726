// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Navstack CLI - replay operations against a bounded history stack

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use navstack::{commands, config};

#[derive(Parser)]
#[command(name = "navstack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "NAVSTACK_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply stack operations in order and print the final stack
    Replay {
        /// Operations: push:<value>, pop, peek, clear, len, empty
        ops: Vec<String>,

        /// Script file with one operation per line
        #[arg(short, long)]
        file: Option<std::path::PathBuf>,

        /// Maximum stack depth (overrides configuration)
        #[arg(short = 'd', long)]
        max_depth: Option<usize>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Replay { ops, file, max_depth } => {
            let settings = config::load(cli.config.as_deref())?;
            commands::replay::run(&ops, file, max_depth, &settings, cli.json, !cli.no_color)
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
