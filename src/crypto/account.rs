//! Algorand account generation and address derivation.

use std::fmt;

use data_encoding::BASE32_NOPAD;
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use sha2::{Digest, Sha512_256};

/// Length of an encoded Algorand address in characters.
pub const ADDRESS_LEN: usize = 58;

/// An encoded Algorand address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Derives an address from an ed25519 public key.
    ///
    /// Process:
    /// 1. Hash the 32-byte public key with SHA-512/256
    /// 2. Append the last 4 bytes of the digest as a checksum
    /// 3. Encode the 36 bytes as unpadded RFC 4648 base32
    pub fn from_public_key(public_key: &[u8; 32]) -> Self {
        let digest = Sha512_256::digest(public_key);

        let mut data = [0u8; 36];
        data[..32].copy_from_slice(public_key);
        data[32..].copy_from_slice(&digest[28..]);

        Self(BASE32_NOPAD.encode(&data))
    }

    /// Wraps an already-encoded address string.
    ///
    /// Skips derivation entirely; intended for account sources that replay
    /// precomputed identities.
    pub fn from_encoded(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the encoded address.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An Algorand account (32-byte ed25519 seed + derived address).
#[derive(Debug, Clone)]
pub struct Account {
    seed: [u8; 32],
    address: Address,
}

impl Account {
    /// Generates a new random account.
    ///
    /// Uses the operating system RNG for key material.
    #[inline]
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::generate(&mut OsRng))
    }

    /// Builds an account from an existing seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self::from_signing_key(SigningKey::from_bytes(&seed))
    }

    /// Assembles an account from parts without deriving the address.
    ///
    /// Used by scripted account sources; `Account::generate` and
    /// `Account::from_seed` are the derivation paths.
    pub fn from_parts(seed: [u8; 32], address: Address) -> Self {
        Self { seed, address }
    }

    fn from_signing_key(key: SigningKey) -> Self {
        let address = Address::from_public_key(key.verifying_key().as_bytes());
        Self {
            seed: key.to_bytes(),
            address,
        }
    }

    /// Returns the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Returns the private key seed.
    #[inline]
    pub fn seed(&self) -> &[u8; 32] {
        &self.seed
    }

    /// Returns the 25-word mnemonic encoding of the seed.
    pub fn mnemonic(&self) -> String {
        super::mnemonic::from_seed(&self.seed)
    }
}
