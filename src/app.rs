// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod formatter;
pub mod fs;
pub mod models;
pub mod output;
pub mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;

use self::cli::Cli;
use self::config::resolve_config;
use self::events::LogSink;
use self::fs::DiskFs;
use self::output::persist;
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let config = resolve_config(args, &current_dir)?;
    log::debug!("Resolved configuration: {:?}", config);

    // 3. Walk & Collect
    let mut sink = LogSink::default();
    let buffer = Scanner::new(&config, &DiskFs).scan(&mut sink);

    let file_count = buffer.files().len();
    if buffer.is_empty() {
        log::warn!("⚠️ No files matched the specified criteria.");
    }
    if sink.failures > 0 {
        log::warn!("{} entries could not be read and were skipped.", sink.failures);
    }

    // 4. Persist (the only fatal failure)
    persist(&buffer.into_string(), &config.output)
        .context("Merged content could not be persisted")?;

    log::info!(
        "Merged {} files into: {}",
        file_count,
        config.output.display()
    );

    Ok(())
}
