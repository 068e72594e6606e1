//! Shared search state: per-pattern match slots and the attempt counter.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// A resolved pattern: the matched address and its mnemonic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundResult {
    /// The matched Algorand address
    pub address: String,
    /// The 25-word mnemonic of the account seed
    pub mnemonic: String,
}

/// Single source of truth for match state, shared by every worker and the
/// coordinator.
///
/// Each pattern owns one write-once slot. All mutation goes through
/// [`ResultRegistry::claim`], which holds the map lock across the
/// check-and-write pair so concurrent claimers can never both win.
pub struct ResultRegistry {
    slots: Mutex<HashMap<String, Option<FoundResult>>>,
}

impl ResultRegistry {
    /// Creates a registry with one empty slot per pattern.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let slots = patterns
            .into_iter()
            .map(|p| (p.into(), None))
            .collect();

        Self {
            slots: Mutex::new(slots),
        }
    }

    /// Atomically installs `result` for `pattern` if its slot is still empty.
    ///
    /// Returns true only for the single caller that fills the slot; every
    /// other caller observes false and the slot is left unchanged. Unknown
    /// patterns are rejected.
    pub fn claim(&self, pattern: &str, result: FoundResult) -> bool {
        let mut slots = self.slots.lock().expect("registry lock poisoned");
        match slots.get_mut(pattern) {
            Some(slot) if slot.is_none() => {
                *slot = Some(result);
                true
            }
            _ => false,
        }
    }

    /// Returns true if the pattern already has a result installed.
    pub fn is_resolved(&self, pattern: &str) -> bool {
        let slots = self.slots.lock().expect("registry lock poisoned");
        matches!(slots.get(pattern), Some(Some(_)))
    }

    /// Returns a point-in-time copy of every slot.
    ///
    /// The copy is taken under the lock but is immediately stale with respect
    /// to concurrent claims; that is sufficient for display purposes.
    pub fn snapshot(&self) -> HashMap<String, Option<FoundResult>> {
        self.slots.lock().expect("registry lock poisoned").clone()
    }

    /// Returns true once every pattern has a result.
    pub fn is_complete(&self) -> bool {
        let slots = self.slots.lock().expect("registry lock poisoned");
        slots.values().all(Option::is_some)
    }

    /// Returns the number of patterns still unresolved.
    pub fn unresolved_count(&self) -> usize {
        let slots = self.slots.lock().expect("registry lock poisoned");
        slots.values().filter(|slot| slot.is_none()).count()
    }
}

/// Monotonic count of candidate identities generated across all workers.
///
/// Workers add in batches to bound contention, so the total lags real time
/// slightly but never decreases.
#[derive(Debug, Default)]
pub struct AttemptCounter(AtomicU64);

impl AttemptCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a batch of attempts.
    #[inline]
    pub fn add(&self, attempts: u64) {
        self.0.fetch_add(attempts, Ordering::Relaxed);
    }

    /// Returns the current total.
    #[inline]
    pub fn total(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}
