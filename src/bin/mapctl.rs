//! CLI tool for validating and inspecting short-link mapping files.
//!
//! Runs the same validation the server applies at startup, so a file that
//! passes here will be accepted by a deployment. Intended for CI and
//! pre-deploy checks; a non-zero exit status means the file must not ship.
//!
//! # Usage
//!
//! ```bash
//! # Validate a mapping file
//! cargo run --bin mapctl -- validate urls.json
//!
//! # List entries and totals
//! cargo run --bin mapctl -- info urls.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

use linkmap::prelude::UrlMap;

/// CLI tool for managing linkmap mapping files.
#[derive(Parser)]
#[command(name = "mapctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a mapping file
    Validate {
        /// Path to the mapping JSON file
        file: PathBuf,
    },

    /// Show mapping file contents and totals
    Info {
        /// Path to the mapping JSON file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { file } => validate(&file),
        Commands::Info { file } => info(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Loads and validates a mapping file, printing a summary on success.
fn validate(file: &Path) -> Result<()> {
    let map = load(file)?;

    println!(
        "{} {} is valid ({} {})",
        "ok:".green().bold(),
        file.display(),
        map.len(),
        if map.len() == 1 { "entry" } else { "entries" }
    );

    if map.is_empty() {
        println!(
            "{} mapping is empty; every request will get the 404 page",
            "warning:".yellow().bold()
        );
    }

    Ok(())
}

/// Prints every entry of a mapping file in document order.
fn info(file: &Path) -> Result<()> {
    let map = load(file)?;

    let width = map
        .codes()
        .map(str::len)
        .max()
        .unwrap_or(0);

    for entry in map.entries() {
        // Pad before coloring; ANSI escapes would count into the width.
        println!("{}  {}", format!("{:width$}", entry.code).bold(), entry.url);
    }

    println!();
    println!("{} entries", map.len().to_string().bold());

    Ok(())
}

fn load(file: &Path) -> Result<UrlMap> {
    let document = fs::read_to_string(file)
        .with_context(|| format!("Failed to read '{}'", file.display()))?;

    UrlMap::from_json_str(&document)
        .with_context(|| format!("Invalid mapping file '{}'", file.display()))
}
