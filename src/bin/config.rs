// Copyright (C) Brian G. Milnes 2025

//! Config: create, check and inspect usingfmt configuration files
//!
//! Usage:
//!   usingfmt-config init [usingfmt.json] [--force]
//!   usingfmt-config check usingfmt.json
//!   usingfmt-config groups "System=System,Microsoft;Local=MyApp"
//!
//! Binary: usingfmt-config

use std::path::PathBuf;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use usingfmt::{decode_sort_groups, encode_sort_groups, FormatConfig};

#[derive(Parser)]
#[command(name = "usingfmt-config")]
#[command(about = "Create and check usingfmt configuration files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default configuration
    Init {
        #[arg(default_value = "usingfmt.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Load and validate a configuration, then print it
    Check { path: PathBuf },
    /// Decode compact sort groups and print them as JSON
    Groups { encoded: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init { path, force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            FormatConfig::default().save(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
        Command::Check { path } => {
            let config = FormatConfig::from_file(&path)?;
            println!("✓ {} is valid", path.display());
            println!("{}", config.to_json()?);
            if !config.sort_groups.is_empty() {
                println!("Compact sort groups: {}", encode_sort_groups(&config.sort_groups));
            }
        }
        Command::Groups { encoded } => {
            let groups = decode_sort_groups(&encoded)?;
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
    }

    Ok(())
}
