//! Cryptographic identity generation for Algorand accounts.
//!
//! This module provides:
//! - Random ed25519 account generation
//! - Algorand address derivation (base32 public key + SHA-512/256 checksum)
//! - 25-word mnemonic encoding of the account seed

mod account;
pub mod mnemonic;

pub use account::{Account, Address, ADDRESS_LEN};

/// Source of fresh candidate accounts for a worker.
///
/// The production implementation draws random ed25519 keys; tests substitute
/// scripted sources that replay a fixed sequence of identities.
pub trait AccountSource: Send {
    /// Produces the next candidate account.
    fn next_account(&mut self) -> Account;
}

/// Account source backed by the operating system RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAccountSource;

impl AccountSource for SystemAccountSource {
    #[inline]
    fn next_account(&mut self) -> Account {
        Account::generate()
    }
}
