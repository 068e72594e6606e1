//! Search lifecycle: polling loop, completion detection, cancellation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};

use crate::matcher::Pattern;
use crate::progress::{
    progress_percent, worst_case_expected, PatternStatus, ProgressBand, ProgressSink,
    ProgressUpdate, Summary,
};
use crate::registry::{AttemptCounter, ResultRegistry};
use crate::worker::WorkerPool;

/// Interval between progress polls (30 per second).
pub const POLL_TICK: Duration = Duration::from_millis(33);

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every pattern was resolved
    Completed,
    /// An external interrupt stopped the run first
    Cancelled,
}

/// Owns the worker pool and drives the search to completion or cancellation.
///
/// The coordinator never blocks on worker progress: each tick it waits on the
/// cancellation channel with a timeout, then observes the shared counter and
/// registry. The timed wait is both the tick sleep and the cancellation
/// point, so an interrupt is seen within one tick.
pub struct Coordinator<D: ProgressSink> {
    pool: WorkerPool,
    patterns: Arc<Vec<Pattern>>,
    registry: Arc<ResultRegistry>,
    counter: Arc<AttemptCounter>,
    display: D,
    cancel_rx: Receiver<()>,
    tick: Duration,
}

impl<D: ProgressSink> Coordinator<D> {
    /// Creates a coordinator over an already-spawned pool.
    pub fn new(
        pool: WorkerPool,
        patterns: Arc<Vec<Pattern>>,
        registry: Arc<ResultRegistry>,
        counter: Arc<AttemptCounter>,
        display: D,
        cancel_rx: Receiver<()>,
    ) -> Self {
        Self {
            pool,
            patterns,
            registry,
            counter,
            display,
            cancel_rx,
            tick: POLL_TICK,
        }
    }

    /// Overrides the poll interval. Tests shorten it.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Runs the polling loop until every pattern is resolved or the
    /// cancellation channel fires, then tears everything down.
    ///
    /// Both exit paths stop and join the pool, hand the display its final
    /// summary, and return the summary alongside the outcome. Results
    /// persisted before a cancellation stay persisted.
    pub fn run(mut self) -> (Outcome, Summary) {
        let start = Instant::now();
        let expected = worst_case_expected(&self.patterns);

        let outcome = loop {
            match self.cancel_rx.recv_timeout(self.tick) {
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break Outcome::Cancelled,
                Err(RecvTimeoutError::Timeout) => {}
            }

            let snapshot = self.registry.snapshot();
            let attempts = self.counter.total();
            let elapsed = start.elapsed();
            let percent = progress_percent(attempts, expected);

            let update = ProgressUpdate {
                elapsed,
                attempts,
                rate: rate(attempts, elapsed),
                expected,
                percent,
                band: ProgressBand::from_percent(percent),
                patterns: self
                    .patterns
                    .iter()
                    .map(|p| PatternStatus {
                        pattern: p.text().to_string(),
                        resolved: matches!(snapshot.get(p.text()), Some(Some(_))),
                    })
                    .collect(),
            };
            self.display.render(&update);

            if snapshot.values().all(Option::is_some) {
                break Outcome::Completed;
            }
        };

        self.pool.join();

        let summary = self.build_summary(start.elapsed());
        self.display.finish(&summary);

        (outcome, summary)
    }

    fn build_summary(&self, elapsed: Duration) -> Summary {
        let snapshot = self.registry.snapshot();
        let attempts = self.counter.total();

        let mut resolved = Vec::new();
        let mut unresolved = Vec::new();
        for pattern in self.patterns.iter() {
            match snapshot.get(pattern.text()) {
                Some(Some(result)) => resolved.push((pattern.text().to_string(), result.clone())),
                _ => unresolved.push(pattern.text().to_string()),
            }
        }

        Summary {
            attempts,
            elapsed,
            rate: rate(attempts, elapsed),
            resolved,
            unresolved,
        }
    }
}

fn rate(attempts: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        attempts as f64 / secs
    } else {
        0.0
    }
}
