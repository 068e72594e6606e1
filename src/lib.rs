//! # algo_vanity
//!
//! Multi-pattern Algorand vanity address generator.
//!
//! ## Architecture
//!
//! - `crypto`: Account generation, address derivation, mnemonic encoding
//! - `matcher`: Pattern validation and matching
//! - `registry`: Shared match state and attempt counting
//! - `output`: Append-only result persistence
//! - `worker`: Parallel search loops and pool management
//! - `coordinator`: Polling loop, completion detection, cancellation
//! - `progress`: Progress estimation and terminal display
//! - `config`: Runtime configuration

pub mod config;
pub mod coordinator;
pub mod crypto;
pub mod matcher;
pub mod output;
pub mod progress;
pub mod registry;
pub mod worker;

pub use config::{Config, ConfigError};
pub use coordinator::{Coordinator, Outcome};
pub use crypto::{Account, AccountSource, Address, SystemAccountSource};
pub use matcher::{MatchPosition, Pattern, PatternError};
pub use output::OutputSink;
pub use progress::{ProgressBand, ProgressSink, ProgressUpdate, Summary, TerminalDisplay};
pub use registry::{AttemptCounter, FoundResult, ResultRegistry};
pub use worker::{CpuWorker, WorkerPool};
