//! Runtime configuration for the vanity address search.

use std::path::PathBuf;

use clap::Parser;

use crate::matcher::{MatchPosition, Pattern, PatternError};
use crate::output;

/// Algorand Vanity Address Generator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Vanity strings to look for (letters A-Z and digits 2-7)
    #[arg(required = true)]
    pub patterns: Vec<String>,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Where to match the vanity string within the address: start or end
    #[arg(short = 'l', long, default_value = "start")]
    pub location: MatchPosition,

    /// File found addresses and mnemonics are appended to
    #[arg(short = 'o', long, default_value = "vanity_addresses")]
    pub output: PathBuf,
}

impl Config {
    /// Returns the number of workers, defaulting to CPU count.
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get)
    }

    /// Validates the configuration and compiles the pattern set.
    ///
    /// Patterns are upcased before validation so lowercase input is accepted.
    /// Fails without touching the output destination.
    pub fn validate(&self) -> Result<Vec<Pattern>, ConfigError> {
        if self.threads == Some(0) {
            return Err(ConfigError::NoWorkers);
        }

        let patterns = self
            .patterns
            .iter()
            .map(|p| Pattern::new(p.to_ascii_uppercase(), self.location))
            .collect::<Result<Vec<_>, _>>()?;

        if !output::check_writable(&self.output) {
            return Err(ConfigError::UnwritableOutput(self.output.clone()));
        }

        Ok(patterns)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),

    #[error("Output file is not writable: {}", .0.display())]
    UnwritableOutput(PathBuf),

    #[error("Thread count must be at least 1")]
    NoWorkers,
}
