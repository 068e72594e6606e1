//! Worker pool management.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::crypto::{AccountSource, SystemAccountSource};
use crate::matcher::Pattern;
use crate::output::OutputSink;
use crate::registry::{AttemptCounter, ResultRegistry};

use super::cpu::CpuWorker;

/// Owns the search threads and the shared stop flag.
pub struct WorkerPool {
    num_workers: usize,
    handles: Option<Vec<JoinHandle<()>>>,
    stop_flag: Arc<AtomicBool>,
}

impl WorkerPool {
    /// Spawns `num_workers` threads drawing from the system RNG.
    pub fn spawn(
        num_workers: usize,
        patterns: Arc<Vec<Pattern>>,
        registry: Arc<ResultRegistry>,
        counter: Arc<AttemptCounter>,
        sink: Arc<OutputSink>,
    ) -> Self {
        Self::spawn_with(num_workers, patterns, registry, counter, sink, |_| {
            SystemAccountSource
        })
    }

    /// Spawns `num_workers` threads, building each worker's account source
    /// with `make_source`. Tests use this to inject scripted sources.
    pub fn spawn_with<S, F>(
        num_workers: usize,
        patterns: Arc<Vec<Pattern>>,
        registry: Arc<ResultRegistry>,
        counter: Arc<AttemptCounter>,
        sink: Arc<OutputSink>,
        mut make_source: F,
    ) -> Self
    where
        S: AccountSource + 'static,
        F: FnMut(usize) -> S,
    {
        let stop_flag = Arc::new(AtomicBool::new(false));

        let handles = (0..num_workers)
            .map(|id| {
                let worker = CpuWorker::new(
                    id,
                    make_source(id),
                    patterns.clone(),
                    registry.clone(),
                    counter.clone(),
                    sink.clone(),
                    stop_flag.clone(),
                );

                thread::Builder::new()
                    .name(format!("vanity-worker-{}", id))
                    .spawn(move || worker.run())
                    .expect("Failed to spawn worker thread")
            })
            .collect();

        Self {
            num_workers,
            handles: Some(handles),
            stop_flag,
        }
    }

    /// Signals all workers to stop.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::Relaxed);
    }

    /// Returns true if the pool has been signaled to stop.
    pub fn is_stopped(&self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }

    /// Stops the workers and waits for every thread to exit.
    pub fn join(&mut self) {
        self.stop();
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let _ = handle.join();
            }
        }
    }

    /// Returns the number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.join();
    }
}
