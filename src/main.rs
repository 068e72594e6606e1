//! Algorand Vanity Address Generator CLI
//!
//! Usage:
//!   algo_vanity ALGO            # Find an address starting with "ALGO"
//!   algo_vanity ALGO -l end     # Find an address ending with "ALGO"
//!   algo_vanity AB CD -t 4      # Search for two patterns on 4 threads

use std::process;
use std::sync::Arc;

use clap::Parser;
use crossbeam_channel::bounded;

use algo_vanity::{
    progress, Config, Coordinator, OutputSink, AttemptCounter, ResultRegistry, TerminalDisplay,
    WorkerPool,
};

fn main() {
    let config = Config::parse();

    // Validate before anything is spawned or written
    let patterns = match config.validate() {
        Ok(patterns) => patterns,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    let sink = match OutputSink::open(&config.output) {
        Ok(sink) => Arc::new(sink),
        Err(e) => {
            eprintln!("Cannot open output file {}: {}", config.output.display(), e);
            process::exit(1);
        }
    };

    progress::print_header(&patterns, config.worker_count(), &config.output);

    let patterns = Arc::new(patterns);
    let registry = Arc::new(ResultRegistry::new(
        patterns.iter().map(|p| p.text().to_string()),
    ));
    let counter = Arc::new(AttemptCounter::new());

    let pool = WorkerPool::spawn(
        config.worker_count(),
        patterns.clone(),
        registry.clone(),
        counter.clone(),
        sink,
    );

    // The handler owns the sender, so the channel stays open for the whole run
    let (cancel_tx, cancel_rx) = bounded(1);
    ctrlc::set_handler(move || {
        let _ = cancel_tx.try_send(());
    })
    .expect("Error setting Ctrl-C handler");

    let coordinator = Coordinator::new(
        pool,
        patterns,
        registry,
        counter,
        TerminalDisplay::new(),
        cancel_rx,
    );

    // Both outcomes have already printed their summary; partial results on
    // cancellation are persisted, so either way this is a clean exit.
    let (_outcome, _summary) = coordinator.run();
}
