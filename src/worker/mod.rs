//! Worker pool for parallel vanity address search.
//!
//! This module provides:
//! - Per-thread CPU search loops
//! - Pool spawn, stop and join management

mod cpu;
mod pool;

pub use cpu::{CpuWorker, COUNT_BATCH};
pub use pool::WorkerPool;
