//! Progress estimation and terminal display.
//!
//! The coordinator builds a [`ProgressUpdate`] each tick and pushes it to a
//! [`ProgressSink`]. The terminal implementation renders a single indicatif
//! spinner line and prints a styled summary once the search ends.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::matcher::Pattern;
use crate::registry::FoundResult;

/// Visual signal for how far past (or before) the expected attempt count the
/// search is. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    /// Under 50% of expected attempts
    Low,
    /// 50% to 90%
    Medium,
    /// 90% and beyond
    High,
}

impl ProgressBand {
    /// Classifies a raw progress percentage.
    pub fn from_percent(percent: f64) -> Self {
        if percent < 50.0 {
            ProgressBand::Low
        } else if percent < 90.0 {
            ProgressBand::Medium
        } else {
            ProgressBand::High
        }
    }
}

/// Worst-case expected attempts across a pattern set: the hardest pattern
/// dominates the run.
pub fn worst_case_expected(patterns: &[Pattern]) -> u64 {
    patterns
        .iter()
        .map(Pattern::expected_attempts)
        .max()
        .unwrap_or(0)
}

/// Raw completion percentage. Unclamped: overshooting 100% just means the run
/// has been unlucky.
pub fn progress_percent(attempts: u64, expected: u64) -> f64 {
    if expected == 0 {
        return 0.0;
    }
    attempts as f64 / expected as f64 * 100.0
}

/// Resolution state of one pattern, for display.
#[derive(Debug, Clone)]
pub struct PatternStatus {
    /// The pattern text
    pub pattern: String,
    /// Whether a result has been claimed for it
    pub resolved: bool,
}

/// One tick's worth of progress, pushed to the display.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Time since the search started
    pub elapsed: Duration,
    /// Total identities generated so far
    pub attempts: u64,
    /// Attempts per second
    pub rate: f64,
    /// Worst-case expected attempts for the pattern set
    pub expected: u64,
    /// Raw completion percentage
    pub percent: f64,
    /// Band the percentage falls in
    pub band: ProgressBand,
    /// Per-pattern resolution state, in CLI order
    pub patterns: Vec<PatternStatus>,
}

/// Final accounting for a finished or cancelled search.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Total identities generated
    pub attempts: u64,
    /// Total wall-clock time
    pub elapsed: Duration,
    /// Average attempts per second
    pub rate: f64,
    /// Resolved patterns with their results, in CLI order
    pub resolved: Vec<(String, FoundResult)>,
    /// Patterns still unresolved (nonempty only after cancellation)
    pub unresolved: Vec<String>,
}

/// Display collaborator fed by the coordinator.
///
/// `render` is called once per tick while the search runs; `finish` exactly
/// once on either exit path and must leave the terminal restored.
pub trait ProgressSink {
    /// Renders one progress update.
    fn render(&self, update: &ProgressUpdate);
    /// Tears the display down and reports the final summary.
    fn finish(&self, summary: &Summary);
}

/// Terminal progress display backed by an indicatif spinner.
pub struct TerminalDisplay {
    bar: ProgressBar,
}

impl TerminalDisplay {
    /// Creates the display.
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .expect("Invalid progress template"),
        );

        Self { bar }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for TerminalDisplay {
    fn render(&self, update: &ProgressUpdate) {
        let resolved = update.patterns.iter().filter(|p| p.resolved).count();
        let percent = format!("{:.2}%", update.percent);
        let percent = match update.band {
            ProgressBand::Low => style(percent).green(),
            ProgressBand::Medium => style(percent).yellow(),
            ProgressBand::High => style(percent).red(),
        };

        let msg = format!(
            "Found: {}/{} | Checked: {} | Rate: {}/s | Progress: {}",
            resolved,
            update.patterns.len(),
            format_number(update.attempts),
            format_number(update.rate as u64),
            percent,
        );

        self.bar.set_message(msg);
        self.bar.tick();
    }

    fn finish(&self, summary: &Summary) {
        self.bar.finish_and_clear();
        print_summary(summary);
    }
}

/// Prints the startup banner.
pub fn print_header(patterns: &[Pattern], workers: usize, output: &std::path::Path) {
    println!();
    println!(
        "{} {}",
        style("algo_vanity").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", style("─".repeat(50)).dim());
    for pattern in patterns {
        println!(
            "  {} {} ({}, ~{} attempts)",
            style("Pattern:").bold(),
            pattern.text(),
            pattern.position(),
            format_number(pattern.expected_attempts())
        );
    }
    println!("  {} {}", style("Workers:").bold(), workers);
    println!("  {} {}", style("Output:").bold(), output.display());
    println!();
}

/// Prints the final summary after the display has been torn down.
pub fn print_summary(summary: &Summary) {
    println!();
    if summary.unresolved.is_empty() {
        println!("{}", style("All vanities found!").green().bold());
    } else {
        println!("{}", style("Search stopped").yellow().bold());
    }
    println!("{}", style("─".repeat(50)).dim());

    for (pattern, result) in &summary.resolved {
        println!("  {} {}", style("Pattern:").bold(), pattern);
        println!("  {} {}", style("Address:").bold(), result.address);
        println!("  {} {}", style("Mnemonic:").bold(), result.mnemonic);
        println!();
    }
    for pattern in &summary.unresolved {
        println!("  {} {} (not found)", style("Pattern:").bold(), pattern);
    }

    println!(
        "  {} {}",
        style("Checked:").bold(),
        format_number(summary.attempts)
    );
    println!(
        "  {} {:.1}s ({}/s)",
        style("Duration:").bold(),
        summary.elapsed.as_secs_f64(),
        format_number(summary.rate as u64)
    );
    println!();
}

/// Formats a number with thousands separators.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let bytes: Vec<_> = digits.bytes().rev().collect();

    let chunks: Vec<String> = bytes
        .chunks(3)
        .map(|chunk| chunk.iter().rev().map(|&b| b as char).collect())
        .collect();

    chunks.into_iter().rev().collect::<Vec<_>>().join(",")
}
