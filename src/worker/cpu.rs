//! CPU search loop: generate, match, claim, persist.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::crypto::AccountSource;
use crate::matcher::Pattern;
use crate::output::OutputSink;
use crate::registry::{AttemptCounter, FoundResult, ResultRegistry};

/// Attempts are flushed to the shared counter in batches of this size to keep
/// atomic traffic off the hot path.
pub const COUNT_BATCH: u64 = 100;

/// A worker that draws candidate accounts from a source and tries to resolve
/// outstanding patterns.
///
/// The loop has no natural end: it runs until the pool raises the stop flag.
/// Completion is the coordinator's call, not the worker's.
pub struct CpuWorker<S> {
    id: usize,
    source: S,
    patterns: Arc<Vec<Pattern>>,
    registry: Arc<ResultRegistry>,
    counter: Arc<AttemptCounter>,
    sink: Arc<OutputSink>,
    stop_flag: Arc<AtomicBool>,
}

impl<S: AccountSource> CpuWorker<S> {
    /// Creates a new worker.
    pub fn new(
        id: usize,
        source: S,
        patterns: Arc<Vec<Pattern>>,
        registry: Arc<ResultRegistry>,
        counter: Arc<AttemptCounter>,
        sink: Arc<OutputSink>,
        stop_flag: Arc<AtomicBool>,
    ) -> Self {
        Self {
            id,
            source,
            patterns,
            registry,
            counter,
            sink,
            stop_flag,
        }
    }

    /// Runs the search loop until the stop flag is raised.
    ///
    /// Each iteration generates one account, tests its address against every
    /// pattern, and on a hit tries to claim the pattern's slot. A successful
    /// claim is appended to the output sink under its lock. A sink write
    /// failure is fatal for this worker; state already committed stays valid.
    pub fn run(mut self) {
        let mut pending: u64 = 0;

        while !self.stop_flag.load(Ordering::Relaxed) {
            let account = self.source.next_account();
            pending += 1;
            if pending == COUNT_BATCH {
                self.counter.add(pending);
                pending = 0;
            }

            let address = account.address().as_str();
            for pattern in self.patterns.iter() {
                if !pattern.matches(address) {
                    continue;
                }
                // Cheap pre-check; the claim below is the authoritative one
                if self.registry.is_resolved(pattern.text()) {
                    continue;
                }

                let result = FoundResult {
                    address: address.to_string(),
                    mnemonic: account.mnemonic(),
                };
                if self.registry.claim(pattern.text(), result.clone()) {
                    if let Err(e) = self.sink.append(&result.address, &result.mnemonic) {
                        eprintln!("worker {}: failed to persist result: {}", self.id, e);
                        self.counter.add(pending);
                        return;
                    }
                }
            }
        }

        // Flush the partial batch so the final total is exact
        self.counter.add(pending);
    }

    /// Returns the worker ID.
    pub fn id(&self) -> usize {
        self.id
    }
}
