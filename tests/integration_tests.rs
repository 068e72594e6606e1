//! End-to-end scenarios with scripted account sources and a temporary
//! output file.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crossbeam_channel::bounded;
use tempfile::tempdir;

use algo_vanity::{
    Account, AccountSource, Address, AttemptCounter, Config, Coordinator, MatchPosition, Outcome,
    OutputSink, Pattern, ProgressSink, ProgressUpdate, ResultRegistry, Summary, WorkerPool,
};

/// Replays a fixed address sequence, repeating the last entry once the
/// script runs out. Optionally raises a stop flag after a call budget.
struct ScriptedSource {
    addresses: Vec<String>,
    calls: usize,
    stop_after: Option<usize>,
    stop_flag: Arc<AtomicBool>,
}

impl ScriptedSource {
    fn new(addresses: Vec<String>, stop_flag: Arc<AtomicBool>) -> Self {
        Self {
            addresses,
            calls: 0,
            stop_after: None,
            stop_flag,
        }
    }

    fn stop_after(mut self, calls: usize) -> Self {
        self.stop_after = Some(calls);
        self
    }
}

impl AccountSource for ScriptedSource {
    fn next_account(&mut self) -> Account {
        let index = self.calls.min(self.addresses.len() - 1);
        let address = Address::from_encoded(self.addresses[index].clone());
        self.calls += 1;
        if self.stop_after == Some(self.calls) {
            self.stop_flag.store(true, Ordering::Relaxed);
        }

        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&(self.calls as u64).to_le_bytes());
        Account::from_parts(seed, address)
    }
}

/// Display stub that swallows renders and records the final summary.
#[derive(Clone, Default)]
struct NullSink {
    summary: Arc<Mutex<Option<Summary>>>,
}

impl ProgressSink for NullSink {
    fn render(&self, _update: &ProgressUpdate) {}

    fn finish(&self, summary: &Summary) {
        *self.summary.lock().unwrap() = Some(summary.clone());
    }
}

fn full_address(prefix: &str) -> String {
    format!("{}{}", prefix, "C".repeat(58 - prefix.len()))
}

fn compile(patterns: &[&str]) -> Arc<Vec<Pattern>> {
    Arc::new(
        patterns
            .iter()
            .map(|p| Pattern::new(*p, MatchPosition::Start).unwrap())
            .collect(),
    )
}

fn records(path: &Path) -> Vec<(String, String)> {
    let contents = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len() % 2, 0, "output must hold two-line records");
    lines
        .chunks(2)
        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
        .collect()
}

// Scenario A: one pattern, deterministic hit on the Kth generation.
#[test]
fn scenario_a_resolves_after_exactly_k_generations() {
    const K: usize = 5;

    let dir = tempdir().unwrap();
    let path = dir.path().join("results");

    let patterns = compile(&["AAAA"]);
    assert_eq!(patterns[0].expected_attempts(), 1_048_576);

    let registry = Arc::new(ResultRegistry::new(["AAAA"]));
    let counter = Arc::new(AttemptCounter::new());
    let sink = Arc::new(OutputSink::open(&path).unwrap());
    let stop_flag = Arc::new(AtomicBool::new(false));

    let mut script = vec![full_address("B"); K - 1];
    script.push(full_address("AAAA"));
    let source = ScriptedSource::new(script, stop_flag.clone()).stop_after(K);

    let worker = algo_vanity::CpuWorker::new(
        0,
        source,
        patterns,
        registry.clone(),
        counter.clone(),
        sink,
        stop_flag,
    );
    thread::spawn(move || worker.run()).join().unwrap();

    // Resolved after exactly K generations
    assert!(registry.is_resolved("AAAA"));
    assert_eq!(counter.total(), K as u64);

    let found = records(&path);
    assert_eq!(found.len(), 1);
    assert!(found[0].0.starts_with("AAAA"));
}

// Scenario B: two patterns, both resolved; one record each, discovery order.
#[test]
fn scenario_b_resolves_both_patterns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results");

    let patterns = compile(&["AA", "BB"]);
    let registry = Arc::new(ResultRegistry::new(["AA", "BB"]));
    let counter = Arc::new(AttemptCounter::new());
    let sink = Arc::new(OutputSink::open(&path).unwrap());

    let script = vec![
        full_address("ZZ"),
        full_address("BB"),
        full_address("ZZ"),
        full_address("AA"),
    ];
    let stop_flag = Arc::new(AtomicBool::new(false));
    let source = ScriptedSource::new(script, stop_flag.clone()).stop_after(4);

    let worker = algo_vanity::CpuWorker::new(
        0,
        source,
        patterns,
        registry.clone(),
        counter,
        sink,
        stop_flag,
    );
    thread::spawn(move || worker.run()).join().unwrap();

    assert_eq!(registry.unresolved_count(), 0);

    let found = records(&path);
    assert_eq!(found.len(), 2);
    // Discovery order: BB was generated before AA
    assert!(found[0].0.starts_with("BB"));
    assert!(found[1].0.starts_with("AA"));
}

// Scenario C: invalid pattern fails validation before anything is spawned
// and the output destination is left untouched.
#[test]
fn scenario_c_invalid_pattern_leaves_output_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results");

    let config = Config {
        patterns: vec!["aa1".to_string()],
        threads: None,
        location: MatchPosition::Start,
        output: path.clone(),
    };

    assert!(config.validate().is_err());
    assert!(!path.exists());
}

// Full stack: scripted workers under a real coordinator; the run completes
// and reports zero unresolved patterns.
#[test]
fn coordinator_detects_completion_of_scripted_search() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results");

    let patterns = compile(&["AA"]);
    let registry = Arc::new(ResultRegistry::new(["AA"]));
    let counter = Arc::new(AttemptCounter::new());
    let sink = Arc::new(OutputSink::open(&path).unwrap());

    // The worker finds the match on its third draw, then keeps generating
    // junk until the coordinator notices completion and stops the pool.
    let pool = WorkerPool::spawn_with(
        1,
        patterns.clone(),
        registry.clone(),
        counter.clone(),
        sink,
        |_| {
            ScriptedSource::new(
                vec![
                    full_address("ZZ"),
                    full_address("ZZ"),
                    full_address("AA"),
                    full_address("ZZ"),
                ],
                Arc::new(AtomicBool::new(false)),
            )
        },
    );

    let display = NullSink::default();
    let (_cancel_tx, cancel_rx) = bounded(1);
    let coordinator = Coordinator::new(
        pool,
        patterns,
        registry,
        counter,
        display.clone(),
        cancel_rx,
    )
    .with_tick(Duration::from_millis(1));

    let (outcome, summary) = coordinator.run();

    assert_eq!(outcome, Outcome::Completed);
    assert!(summary.unresolved.is_empty());
    assert_eq!(summary.resolved.len(), 1);
    assert!(summary.resolved[0].1.address.starts_with("AA"));

    let recorded = display.summary.lock().unwrap();
    assert!(recorded.is_some());

    let found = records(&path);
    assert_eq!(found.len(), 1);
}

// Cancellation: partial finds stay persisted and are reported.
#[test]
fn cancellation_preserves_partial_results() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("results");

    let patterns = compile(&["AA", "BB"]);
    let registry = Arc::new(ResultRegistry::new(["AA", "BB"]));
    let counter = Arc::new(AttemptCounter::new());
    let sink = Arc::new(OutputSink::open(&path).unwrap());

    // AA is found quickly; BB never appears in the script
    let pool = WorkerPool::spawn_with(
        1,
        patterns.clone(),
        registry.clone(),
        counter.clone(),
        sink,
        |_| {
            ScriptedSource::new(
                vec![full_address("AA"), full_address("ZZ")],
                Arc::new(AtomicBool::new(false)),
            )
        },
    );

    let display = NullSink::default();
    let (cancel_tx, cancel_rx) = bounded(1);

    // Interrupt once the first find has landed
    {
        let registry = registry.clone();
        thread::spawn(move || {
            while !registry.is_resolved("AA") {
                thread::sleep(Duration::from_millis(1));
            }
            cancel_tx.send(()).unwrap();
        });
    }

    let coordinator = Coordinator::new(
        pool,
        patterns,
        registry,
        counter,
        display,
        cancel_rx,
    )
    .with_tick(Duration::from_millis(1));

    let (outcome, summary) = coordinator.run();

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(summary.resolved.len(), 1);
    assert_eq!(summary.unresolved, vec!["BB".to_string()]);

    let found = records(&path);
    assert_eq!(found.len(), 1);
    assert!(found[0].0.starts_with("AA"));
}
